use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// Dynamic value held by a payload cursor.
///
/// A closed model over everything a decoded document can contain, plus the
/// [`Value::Empty`] sentinel produced by navigation misses. Containers are
/// reference-counted so cloning a value shares structure instead of deep
/// copying.
#[derive(Debug, Clone)]
pub enum Value {
	/// Marker for a navigation miss, distinct from an explicit null.
	Empty,
	/// Explicit null present in the payload.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	Int(i64),
	/// Floating-point scalar.
	Float(f64),
	/// UTF-8 string.
	Str(Arc<str>),
	/// Ordered sequence.
	List(Arc<[Value]>),
	/// Keyed mapping with entries in insertion order.
	Map(Arc<[(Arc<str>, Value)]>),
	/// Opaque object reference.
	Object(Arc<dyn ObjectValue>),
}

impl Value {
	/// Builds a list value from owned items.
	pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
		Value::List(items.into_iter().collect())
	}

	/// Builds a mapping value from key/value pairs, keeping their order.
	pub fn map<K: Into<Arc<str>>>(pairs: impl IntoIterator<Item = (K, Value)>) -> Self {
		Value::Map(pairs.into_iter().map(|(key, value)| (key.into(), value)).collect())
	}

	/// Canonical type label used in error messages.
	pub fn type_label(&self) -> String {
		match self {
			Value::Empty => "(empty)".to_owned(),
			Value::Null => "NULL".to_owned(),
			Value::Bool(_) => "boolean".to_owned(),
			Value::Int(_) => "integer".to_owned(),
			Value::Float(_) => "double".to_owned(),
			Value::Str(_) => "string".to_owned(),
			Value::List(_) => "array".to_owned(),
			Value::Map(_) => "object".to_owned(),
			Value::Object(object) => format!("instanceof {}", object.type_label()),
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Empty, Value::Empty) | (Value::Null, Value::Null) => true,
			(Value::Bool(a), Value::Bool(b)) => a == b,
			(Value::Int(a), Value::Int(b)) => a == b,
			(Value::Float(a), Value::Float(b)) => a == b,
			(Value::Str(a), Value::Str(b)) => a == b,
			(Value::List(a), Value::List(b)) => a == b,
			(Value::Map(a), Value::Map(b)) => a == b,
			(Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
			_ => false,
		}
	}
}

impl From<()> for Value {
	fn from(_: ()) -> Self {
		Value::Null
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Value::Bool(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Value::Int(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Value::Int(i64::from(value))
	}
}

impl From<u32> for Value {
	fn from(value: u32) -> Self {
		Value::Int(i64::from(value))
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Value::Float(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Value::Str(Arc::from(value))
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Value::Str(Arc::from(value))
	}
}

impl From<Arc<str>> for Value {
	fn from(value: Arc<str>) -> Self {
		Value::Str(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Value::List(items.into())
	}
}

impl From<Arc<dyn ObjectValue>> for Value {
	fn from(object: Arc<dyn ObjectValue>) -> Self {
		Value::Object(object)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(value) => value.into(),
			None => Value::Null,
		}
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(value) => Value::Bool(value),
			serde_json::Value::Number(number) => match number.as_i64() {
				Some(value) => Value::Int(value),
				None => Value::Float(number.as_f64().unwrap_or(f64::NAN)),
			},
			serde_json::Value::String(value) => Value::Str(Arc::from(value)),
			serde_json::Value::Array(items) => Value::List(items.into_iter().map(Value::from).collect()),
			serde_json::Value::Object(members) => {
				Value::Map(members.into_iter().map(|(key, value)| (Arc::<str>::from(key), Value::from(value))).collect())
			}
		}
	}
}

/// Opaque object reference stored in a payload.
///
/// Implementations decide which named members they expose to navigation,
/// whether they carry a string rendering accepted by string extraction,
/// and which type descriptors they conform to beyond their own concrete
/// type.
pub trait ObjectValue: Any + fmt::Debug + Send + Sync {
	/// Runtime type label used in error messages.
	fn type_label(&self) -> &str;

	/// Looks up a named member; absent by default.
	fn property(&self, _name: &str) -> Option<Value> {
		None
	}

	/// Optional string rendering accepted by string extraction.
	fn as_display_string(&self) -> Option<String> {
		None
	}

	/// Reports whether this object satisfies `descriptor`.
	///
	/// The default accepts only the concrete type. Implementations may
	/// widen this to acknowledge descriptors for traits they implement.
	fn conforms_to(&self, descriptor: &TypeDescriptor) -> bool {
		self.type_id() == descriptor.id()
	}
}

/// Named runtime type identity used by instance-of extraction.
///
/// A descriptor can identify a concrete type or a `dyn` trait object, so
/// implementor relationships are expressible:
///
/// ```
/// use paywalk::payload::{ObjectValue, TypeDescriptor};
///
/// trait Named {}
///
/// #[derive(Debug)]
/// struct Dog;
///
/// impl Named for Dog {}
///
/// impl ObjectValue for Dog {
/// 	fn type_label(&self) -> &str {
/// 		"Dog"
/// 	}
///
/// 	fn conforms_to(&self, descriptor: &TypeDescriptor) -> bool {
/// 		descriptor.is::<Dog>() || descriptor.is::<dyn Named>()
/// 	}
/// }
///
/// let named = TypeDescriptor::of::<dyn Named>("Named");
/// assert!(Dog.conforms_to(&named));
/// ```
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
	name: &'static str,
	id: TypeId,
}

impl TypeDescriptor {
	/// Descriptor for any `'static` type, including `dyn` trait objects.
	pub fn of<T: ?Sized + 'static>(name: &'static str) -> Self {
		Self {
			name,
			id: TypeId::of::<T>(),
		}
	}

	/// Type name used in error labels.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Wrapped type identity.
	pub fn id(&self) -> TypeId {
		self.id
	}

	/// Reports whether this descriptor identifies `T`.
	pub fn is<T: ?Sized + 'static>(&self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

/// Trailing segment of a Rust type path, used for error labels.
pub(crate) fn short_type_name<T: ?Sized>() -> &'static str {
	let full = std::any::type_name::<T>();
	full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests;
