mod cursor;
mod error;
mod path;
mod reporter;
mod value;

/// Cursor navigation and lazy iteration types.
pub use cursor::{PayloadCursor, PayloadIter};
/// Error type, result alias, and path rendering helper.
pub use error::{PayloadError, Result, format_variable_path};
/// Access path segment and field path expression types.
pub use path::{FieldPath, PathSegment};
/// Pluggable error construction contract.
pub use reporter::ErrorReporter;
/// Dynamic value model and object reference types.
pub use value::{ObjectValue, TypeDescriptor, Value};
