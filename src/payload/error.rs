use thiserror::Error;

use crate::payload::PathSegment;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PayloadError>;

/// Errors produced while navigating and extracting payload values.
#[derive(Debug, Error)]
pub enum PayloadError {
	/// Value shape or type did not satisfy an operation's precondition.
	#[error("{}", render_type_mismatch(.expected, .actual, .path))]
	TypeMismatch {
		/// Expected type label.
		expected: String,
		/// Actual type label computed from the held value.
		actual: String,
		/// Access path from the root to the failing cursor.
		path: Vec<PathSegment>,
	},
	/// Path expression syntax is invalid.
	#[error("invalid field path: {path}")]
	InvalidFieldPath {
		/// Original user-provided path expression.
		path: String,
	},
	/// Domain error produced by a custom error reporter.
	#[error(transparent)]
	Custom(Box<dyn std::error::Error + Send + Sync>),
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Input document was not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}

impl PayloadError {
	/// Builds the default type-mismatch error for the given context.
	pub fn bad_payload(expected: &str, actual: &str, path: &[PathSegment]) -> Self {
		Self::TypeMismatch {
			expected: expected.to_owned(),
			actual: actual.to_owned(),
			path: path.to_vec(),
		}
	}

	/// Wraps a domain error produced by a custom reporter.
	pub fn custom(err: impl std::error::Error + Send + Sync + 'static) -> Self {
		Self::Custom(Box::new(err))
	}
}

/// Renders an access path as a human-readable variable expression.
///
/// The first segment is prefixed with `$`; each subsequent segment renders
/// as `[n]` for an index or `->$name` for a name. `["foo", 0]` renders as
/// `$foo[0]`.
pub fn format_variable_path(path: &[PathSegment]) -> String {
	use std::fmt::Write;

	let mut buffer = String::from("$");
	for (position, segment) in path.iter().enumerate() {
		match segment {
			PathSegment::Index(index) => {
				let _ = write!(buffer, "[{index}]");
			}
			PathSegment::Name(name) => {
				if position > 0 {
					buffer.push_str("->$");
				}
				buffer.push_str(name);
			}
		}
	}

	buffer
}

fn render_type_mismatch(expected: &str, actual: &str, path: &[PathSegment]) -> String {
	if path.is_empty() {
		format!("Unexpected payload type, expected `{expected}` but got `{actual}` instead")
	} else {
		format!(
			"Unexpected payload for {}, expected `{expected}` but got `{actual}` instead",
			format_variable_path(path)
		)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use crate::payload::{PathSegment, PayloadError, format_variable_path};

	fn name(value: &str) -> PathSegment {
		PathSegment::Name(Arc::from(value))
	}

	#[test]
	fn renders_name_then_index() {
		assert_eq!(format_variable_path(&[name("foo"), PathSegment::Index(0)]), "$foo[0]");
	}

	#[test]
	fn renders_index_at_root() {
		assert_eq!(format_variable_path(&[PathSegment::Index(1)]), "$[1]");
	}

	#[test]
	fn renders_chained_names_with_arrows() {
		assert_eq!(format_variable_path(&[name("a"), name("b"), PathSegment::Index(3), name("c")]), "$a->$b[3]->$c");
	}

	#[test]
	fn root_mismatch_message_has_no_path() {
		let err = PayloadError::bad_payload("integer", "string", &[]);
		assert_eq!(err.to_string(), "Unexpected payload type, expected `integer` but got `string` instead");
	}

	#[test]
	fn nested_mismatch_message_names_the_path() {
		let err = PayloadError::bad_payload("integer", "(empty)", &[name("foo"), PathSegment::Index(0)]);
		assert_eq!(err.to_string(), "Unexpected payload for $foo[0], expected `integer` but got `(empty)` instead");
	}
}
