use std::sync::Arc;

use serde_json::json;

use crate::payload::value::short_type_name;
use crate::payload::{ObjectValue, TypeDescriptor, Value};

#[test]
fn decoded_json_maps_onto_the_closed_model() {
	let value = Value::from(json!({
		"null": null,
		"flag": true,
		"count": 42,
		"ratio": 0.5,
		"name": "melon",
		"items": [1, "two"]
	}));

	let Value::Map(members) = value else {
		panic!("expected mapping");
	};
	let lookup = |name: &str| {
		members
			.iter()
			.find(|(key, _)| key.as_ref() == name)
			.map(|(_, value)| value.clone())
			.expect("member exists")
	};

	assert_eq!(lookup("null"), Value::Null);
	assert_eq!(lookup("flag"), Value::Bool(true));
	assert_eq!(lookup("count"), Value::Int(42));
	assert_eq!(lookup("ratio"), Value::Float(0.5));
	assert_eq!(lookup("name"), Value::from("melon"));
	assert_eq!(lookup("items"), Value::list([Value::Int(1), Value::from("two")]));
}

#[test]
fn integral_json_numbers_stay_integers() {
	assert_eq!(Value::from(json!(7)), Value::Int(7));
	assert_eq!(Value::from(json!(-7)), Value::Int(-7));
	assert_eq!(Value::from(json!(7.25)), Value::Float(7.25));
}

#[test]
fn oversized_unsigned_numbers_fall_back_to_float() {
	let huge = u64::MAX;
	let Value::Float(value) = Value::from(json!(huge)) else {
		panic!("expected float fallback");
	};
	assert_eq!(value, huge as f64);
}

#[test]
fn decoded_null_is_null_not_empty() {
	assert_eq!(Value::from(json!(null)), Value::Null);
	assert_ne!(Value::from(json!(null)), Value::Empty);
}

#[test]
fn type_labels_match_the_host_taxonomy() {
	assert_eq!(Value::Empty.type_label(), "(empty)");
	assert_eq!(Value::Null.type_label(), "NULL");
	assert_eq!(Value::Bool(true).type_label(), "boolean");
	assert_eq!(Value::Int(1).type_label(), "integer");
	assert_eq!(Value::Float(1.0).type_label(), "double");
	assert_eq!(Value::from("x").type_label(), "string");
	assert_eq!(Value::list([]).type_label(), "array");
	assert_eq!(Value::map(Vec::<(&str, Value)>::new()).type_label(), "object");
}

#[derive(Debug)]
struct Marker;

impl ObjectValue for Marker {
	fn type_label(&self) -> &str {
		"Marker"
	}
}

#[test]
fn object_label_includes_the_runtime_type() {
	let object: Arc<dyn ObjectValue> = Arc::new(Marker);
	assert_eq!(Value::Object(object).type_label(), "instanceof Marker");
}

#[test]
fn object_equality_is_reference_identity() {
	let first: Arc<dyn ObjectValue> = Arc::new(Marker);
	let second: Arc<dyn ObjectValue> = Arc::new(Marker);

	assert_eq!(Value::Object(first.clone()), Value::Object(first.clone()));
	assert_ne!(Value::Object(first), Value::Object(second));
}

#[test]
fn option_conversion_treats_none_as_null() {
	assert_eq!(Value::from(Option::<i64>::None), Value::Null);
	assert_eq!(Value::from(Some(5_i64)), Value::Int(5));
}

#[test]
fn map_constructor_preserves_insertion_order() {
	let Value::Map(members) = Value::map([("z", Value::Int(1)), ("a", Value::Int(2))]) else {
		panic!("expected mapping");
	};
	assert_eq!(members[0].0.as_ref(), "z");
	assert_eq!(members[1].0.as_ref(), "a");
}

#[test]
fn descriptor_identity_matches_concrete_and_dyn_types() {
	let concrete = TypeDescriptor::of::<Marker>("Marker");
	assert!(concrete.is::<Marker>());
	assert!(!concrete.is::<dyn ObjectValue>());
	assert_eq!(concrete.name(), "Marker");
}

#[test]
fn default_conformance_accepts_only_the_concrete_type() {
	assert!(Marker.conforms_to(&TypeDescriptor::of::<Marker>("Marker")));
	assert!(!Marker.conforms_to(&TypeDescriptor::of::<String>("String")));
}

#[test]
fn short_type_name_drops_the_module_path() {
	assert_eq!(short_type_name::<Marker>(), "Marker");
	assert_eq!(short_type_name::<String>(), "String");
}
