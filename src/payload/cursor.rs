use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::payload::value::short_type_name;
use crate::payload::{ErrorReporter, FieldPath, ObjectValue, PathSegment, PayloadError, Result, TypeDescriptor, Value};

/// Immutable wrapper pairing a dynamic value with its access path.
///
/// Navigation never mutates a cursor; each step returns a fresh cursor
/// whose path is extended by exactly one segment, so intermediate cursors
/// stay valid and independently usable. Extraction methods assert the
/// concrete type at the current position and fail with a path-qualified
/// [`PayloadError::TypeMismatch`] otherwise.
#[derive(Clone)]
pub struct PayloadCursor {
	value: Value,
	path: Vec<PathSegment>,
	reporter: Option<Arc<dyn ErrorReporter>>,
}

impl PayloadCursor {
	/// Wraps a root value with default error construction.
	pub fn new(value: impl Into<Value>) -> Self {
		Self {
			value: value.into(),
			path: Vec::new(),
			reporter: None,
		}
	}

	/// Wraps a root value with a custom error reporter.
	///
	/// The reporter reference is carried unchanged into every descendant
	/// cursor.
	pub fn with_reporter(value: impl Into<Value>, reporter: Arc<dyn ErrorReporter>) -> Self {
		Self {
			value: value.into(),
			path: Vec::new(),
			reporter: Some(reporter),
		}
	}

	/// The dynamic value currently held.
	pub fn value(&self) -> &Value {
		&self.value
	}

	/// Access path from the root to this cursor.
	pub fn path(&self) -> &[PathSegment] {
		&self.path
	}

	/// True when the held value is the empty sentinel.
	pub fn is_empty(&self) -> bool {
		matches!(self.value, Value::Empty)
	}

	/// Descends into a named member of a mapping or object.
	///
	/// A missing member yields an empty cursor rather than an error; only
	/// a value that is not navigable by name fails here.
	pub fn property(&self, name: &str) -> Result<Self> {
		let member = match &self.value {
			Value::Map(members) => members
				.iter()
				.find(|(key, _)| key.as_ref() == name)
				.map(|(_, value)| value.clone())
				.unwrap_or(Value::Empty),
			Value::Object(object) => object.property(name).unwrap_or(Value::Empty),
			_ => return Err(self.type_mismatch("object")),
		};

		Ok(self.derive(member, PathSegment::Name(Arc::from(name))))
	}

	/// Descends into a sequence element by zero-based index.
	///
	/// An out-of-range index yields an empty cursor rather than an error.
	pub fn index(&self, index: usize) -> Result<Self> {
		let Value::List(items) = &self.value else {
			return Err(self.type_mismatch("array"));
		};

		let element = items.get(index).cloned().unwrap_or(Value::Empty);
		Ok(self.derive(element, PathSegment::Index(index)))
	}

	/// Iterates the elements of a sequence or mapping as child cursors.
	///
	/// Iterability is validated here, before any element is produced, so
	/// the error surfaces even when the returned iterator is dropped
	/// unconsumed. Element cursors are built lazily as the iterator is
	/// drained. Each call derives an independent iterator.
	pub fn iterate(&self) -> Result<PayloadIter> {
		match self.value {
			Value::List(_) | Value::Map(_) => Ok(PayloadIter {
				parent: self.clone(),
				position: 0,
			}),
			_ => Err(self.type_mismatch("iterable")),
		}
	}

	/// Folds a parsed path expression over `property`/`index` navigation.
	pub fn walk(&self, path: &FieldPath) -> Result<Self> {
		let mut current = self.clone();
		for segment in &path.segments {
			current = match segment {
				PathSegment::Name(name) => current.property(name)?,
				PathSegment::Index(index) => current.index(*index)?,
			};
		}

		Ok(current)
	}

	/// Replaces an empty sentinel with `replacement`, keeping the path.
	///
	/// Non-empty cursors come back unchanged; an explicit null is a
	/// present value and is never filled. A cursor replacement is
	/// unwrapped to its held value.
	pub fn fill_empty(&self, replacement: impl Into<Value>) -> Self {
		if self.is_empty() {
			Self {
				value: replacement.into(),
				path: self.path.clone(),
				reporter: self.reporter.clone(),
			}
		} else {
			self.clone()
		}
	}

	/// Extracts a string, accepting any object with a string rendering.
	pub fn as_string(&self) -> Result<String> {
		match &self.value {
			Value::Str(value) => Ok(value.to_string()),
			Value::Object(object) => match object.as_display_string() {
				Some(value) => Ok(value),
				None => Err(self.type_mismatch("string")),
			},
			_ => Err(self.type_mismatch("string")),
		}
	}

	/// Extracts a string, or `None` for empty and explicit null.
	pub fn as_string_opt(&self) -> Result<Option<String>> {
		if self.is_nullish() {
			return Ok(None);
		}

		self.as_string().map(Some)
	}

	/// Extracts every element as a string, failing on the first bad one.
	pub fn as_string_list(&self) -> Result<Vec<String>> {
		self.iterate()?.map(|(_, item)| item.as_string()).collect()
	}

	/// Extracts an integer. Floats are never truncated.
	pub fn as_integer(&self) -> Result<i64> {
		match self.value {
			Value::Int(value) => Ok(value),
			_ => Err(self.type_mismatch("integer")),
		}
	}

	/// Extracts an integer, or `None` for empty and explicit null.
	pub fn as_integer_opt(&self) -> Result<Option<i64>> {
		if self.is_nullish() {
			return Ok(None);
		}

		self.as_integer().map(Some)
	}

	/// Extracts every element as an integer, failing on the first bad one.
	pub fn as_integer_list(&self) -> Result<Vec<i64>> {
		self.iterate()?.map(|(_, item)| item.as_integer()).collect()
	}

	/// Extracts a boolean.
	pub fn as_boolean(&self) -> Result<bool> {
		match self.value {
			Value::Bool(value) => Ok(value),
			_ => Err(self.type_mismatch("boolean")),
		}
	}

	/// Extracts a boolean, or `None` for empty and explicit null.
	pub fn as_boolean_opt(&self) -> Result<Option<bool>> {
		if self.is_nullish() {
			return Ok(None);
		}

		self.as_boolean().map(Some)
	}

	/// Extracts every element as a boolean, failing on the first bad one.
	pub fn as_boolean_list(&self) -> Result<Vec<bool>> {
		self.iterate()?.map(|(_, item)| item.as_boolean()).collect()
	}

	/// Extracts a float, widening integers.
	pub fn as_float(&self) -> Result<f64> {
		match self.value {
			Value::Float(value) => Ok(value),
			Value::Int(value) => Ok(value as f64),
			_ => Err(self.type_mismatch("double")),
		}
	}

	/// Extracts a float, or `None` for empty and explicit null.
	pub fn as_float_opt(&self) -> Result<Option<f64>> {
		if self.is_nullish() {
			return Ok(None);
		}

		self.as_float().map(Some)
	}

	/// Extracts every element as a float, failing on the first bad one.
	pub fn as_float_list(&self) -> Result<Vec<f64>> {
		self.iterate()?.map(|(_, item)| item.as_float()).collect()
	}

	/// Extracts an object reference conforming to `descriptor`.
	///
	/// Conformance covers the exact concrete type plus any implementor
	/// relationships the object acknowledges via
	/// [`ObjectValue::conforms_to`].
	pub fn as_instance_of(&self, descriptor: &TypeDescriptor) -> Result<Arc<dyn ObjectValue>> {
		match &self.value {
			Value::Object(object) if object.conforms_to(descriptor) => Ok(object.clone()),
			_ => Err(self.type_mismatch(&format!("instanceof {}", descriptor.name()))),
		}
	}

	/// Extracts a conforming object reference, or `None` for empty and
	/// explicit null.
	pub fn as_instance_of_opt(&self, descriptor: &TypeDescriptor) -> Result<Option<Arc<dyn ObjectValue>>> {
		if self.is_nullish() {
			return Ok(None);
		}

		self.as_instance_of(descriptor).map(Some)
	}

	/// Borrows an object reference downcast to its concrete type.
	pub fn as_object<T: ObjectValue>(&self) -> Result<&T> {
		let Value::Object(object) = &self.value else {
			return Err(self.type_mismatch(&format!("instanceof {}", short_type_name::<T>())));
		};

		(object.as_ref() as &dyn Any)
			.downcast_ref::<T>()
			.ok_or_else(|| self.type_mismatch(&format!("instanceof {}", short_type_name::<T>())))
	}

	/// Returns the held value as-is, unless it is the empty sentinel.
	///
	/// Escape hatch for callers that need the untyped value.
	pub fn as_raw_value(&self) -> Result<Value> {
		if self.is_empty() {
			return Err(self.type_mismatch("(non-empty)"));
		}

		Ok(self.value.clone())
	}

	fn is_nullish(&self) -> bool {
		matches!(self.value, Value::Empty | Value::Null)
	}

	fn type_mismatch(&self, expected: &str) -> PayloadError {
		let actual = self.value.type_label();
		match &self.reporter {
			Some(reporter) => reporter.create_error(expected, &actual, &self.path),
			None => PayloadError::bad_payload(expected, &actual, &self.path),
		}
	}

	fn derive(&self, value: Value, segment: PathSegment) -> Self {
		let mut path = self.path.clone();
		path.push(segment);
		Self {
			value,
			path,
			reporter: self.reporter.clone(),
		}
	}
}

impl fmt::Debug for PayloadCursor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PayloadCursor")
			.field("value", &self.value)
			.field("path", &self.path)
			.finish_non_exhaustive()
	}
}

impl From<PayloadCursor> for Value {
	fn from(cursor: PayloadCursor) -> Self {
		cursor.value
	}
}

/// Lazy iterator over the elements of one cursor.
///
/// Yields each element's key together with a child cursor whose path is
/// extended by that key: index segments for sequences, name segments for
/// mappings.
pub struct PayloadIter {
	parent: PayloadCursor,
	position: usize,
}

impl PayloadIter {
	fn remaining(&self) -> usize {
		let total = match &self.parent.value {
			Value::List(items) => items.len(),
			Value::Map(members) => members.len(),
			_ => 0,
		};
		total.saturating_sub(self.position)
	}
}

impl Iterator for PayloadIter {
	type Item = (PathSegment, PayloadCursor);

	fn next(&mut self) -> Option<Self::Item> {
		let position = self.position;
		match &self.parent.value {
			Value::List(items) => {
				let element = items.get(position)?.clone();
				self.position += 1;
				let segment = PathSegment::Index(position);
				Some((segment.clone(), self.parent.derive(element, segment)))
			}
			Value::Map(members) => {
				let (key, value) = members.get(position)?;
				let segment = PathSegment::Name(key.clone());
				let child = self.parent.derive(value.clone(), segment.clone());
				self.position += 1;
				Some((segment, child))
			}
			_ => None,
		}
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		let remaining = self.remaining();
		(remaining, Some(remaining))
	}
}

impl ExactSizeIterator for PayloadIter {}
