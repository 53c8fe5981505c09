use std::path::Path;

use paywalk::payload::{Result, Value};

/// Reads and decodes a JSON document into a payload value.
pub fn load_payload(path: &Path) -> Result<Value> {
	let bytes = std::fs::read(path)?;
	let decoded: serde_json::Value = serde_json::from_slice(&bytes)?;
	Ok(Value::from(decoded))
}

/// Renders a payload value as JSON for CLI output.
///
/// Object references have no JSON shape and render as their type label;
/// the empty sentinel renders as null, matching its absent meaning.
pub fn render_value(value: &Value) -> serde_json::Value {
	match value {
		Value::Empty | Value::Null => serde_json::Value::Null,
		Value::Bool(value) => serde_json::Value::Bool(*value),
		Value::Int(value) => serde_json::Value::from(*value),
		Value::Float(value) => serde_json::Value::from(*value),
		Value::Str(value) => serde_json::Value::String(value.to_string()),
		Value::List(items) => serde_json::Value::Array(items.iter().map(render_value).collect()),
		Value::Map(members) => serde_json::Value::Object(members.iter().map(|(key, value)| (key.to_string(), render_value(value))).collect()),
		Value::Object(object) => serde_json::Value::String(format!("instanceof {}", object.type_label())),
	}
}
