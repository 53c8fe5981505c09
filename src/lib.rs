//! Public library API for typed extraction from untyped payload data.

/// Payload value model, cursor navigation, and error reporting.
pub mod payload;
