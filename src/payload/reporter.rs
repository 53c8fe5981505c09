use crate::payload::{PathSegment, PayloadError};

/// Pluggable factory for the error raised on a bad payload.
///
/// A reporter is attached once at root-cursor construction and shared
/// unchanged by every derived cursor, so it must be stateless or
/// internally synchronized. Implementations receive the full failure
/// context and may build the default error via
/// [`PayloadError::bad_payload`] or surface a domain error through
/// [`PayloadError::custom`]. [`format_variable_path`] renders the path
/// the way the default error message does.
///
/// [`format_variable_path`]: crate::payload::format_variable_path
pub trait ErrorReporter: Send + Sync {
	/// Builds the error for a failed type assertion.
	fn create_error(&self, expected: &str, actual: &str, path: &[PathSegment]) -> PayloadError;
}
