use std::sync::Arc;

use crate::payload::{PayloadError, Result};

/// One segment of an access path.
///
/// Segments record how a cursor was reached from the root. They drive
/// error-message rendering and serve as iteration keys, never semantic
/// lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
	/// Property name segment.
	Name(Arc<str>),
	/// Sequence index segment.
	Index(usize),
}

/// Parsed field path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path segments.
	pub segments: Vec<PathSegment>,
}

impl FieldPath {
	/// Parse dotted field syntax with optional `[index]` selectors.
	///
	/// A leading `[index]` selector is accepted so array-rooted documents
	/// are addressable, e.g. `[0].name`.
	pub fn parse(input: &str) -> Result<Self> {
		if input.is_empty() {
			return Err(PayloadError::InvalidFieldPath { path: input.to_owned() });
		}

		let bytes = input.as_bytes();
		let mut idx = 0_usize;
		let mut segments = Vec::new();
		let mut expect_name = bytes[0] != b'[';

		while idx < bytes.len() {
			if expect_name {
				let start = idx;
				while idx < bytes.len() {
					let byte = bytes[idx];
					if byte.is_ascii_alphanumeric() || byte == b'_' {
						idx += 1;
					} else {
						break;
					}
				}

				if idx == start {
					return Err(PayloadError::InvalidFieldPath { path: input.to_owned() });
				}

				segments.push(PathSegment::Name(Arc::from(&input[start..idx])));
			}

			while idx < bytes.len() && bytes[idx] == b'[' {
				idx += 1;
				let n_start = idx;
				while idx < bytes.len() && bytes[idx].is_ascii_digit() {
					idx += 1;
				}
				if idx == n_start || idx >= bytes.len() || bytes[idx] != b']' {
					return Err(PayloadError::InvalidFieldPath { path: input.to_owned() });
				}

				let number = input[n_start..idx]
					.parse::<usize>()
					.map_err(|_| PayloadError::InvalidFieldPath { path: input.to_owned() })?;
				segments.push(PathSegment::Index(number));
				idx += 1;
			}

			if idx < bytes.len() {
				if bytes[idx] != b'.' {
					return Err(PayloadError::InvalidFieldPath { path: input.to_owned() });
				}
				idx += 1;
				if idx >= bytes.len() {
					return Err(PayloadError::InvalidFieldPath { path: input.to_owned() });
				}
				expect_name = true;
			}
		}

		Ok(Self { segments })
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use crate::payload::{FieldPath, PathSegment};

	#[test]
	fn parses_names_indexes_and_dots() {
		let path = FieldPath::parse("a.b[0].c").expect("path parses");
		assert_eq!(
			path.segments,
			vec![
				PathSegment::Name(Arc::from("a")),
				PathSegment::Name(Arc::from("b")),
				PathSegment::Index(0),
				PathSegment::Name(Arc::from("c")),
			]
		);
	}

	#[test]
	fn parses_leading_index_selector() {
		let path = FieldPath::parse("[2].name").expect("path parses");
		assert_eq!(path.segments, vec![PathSegment::Index(2), PathSegment::Name(Arc::from("name"))]);
	}

	#[test]
	fn parses_consecutive_index_selectors() {
		let path = FieldPath::parse("grid[1][2]").expect("path parses");
		assert_eq!(
			path.segments,
			vec![PathSegment::Name(Arc::from("grid")), PathSegment::Index(1), PathSegment::Index(2)]
		);
	}

	#[test]
	fn rejects_malformed_expressions() {
		for input in ["", "a..b", "a[", "a[x]", "a[1", "a.", ".a", "a.[0]"] {
			assert!(FieldPath::parse(input).is_err(), "expected `{input}` to be rejected");
		}
	}
}
