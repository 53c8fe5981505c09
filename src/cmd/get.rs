use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;

use paywalk::payload::{FieldPath, PayloadCursor, Result, Value};

use crate::cmd::util::{load_payload, render_value};

/// Concrete type asserted by the `get` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AsType {
	/// Assert a string.
	String,
	/// Assert an integer.
	Integer,
	/// Assert a boolean.
	Boolean,
	/// Assert a float.
	Float,
	/// Pass the raw value through.
	Raw,
}

/// JSON record emitted by `get --json`.
#[derive(Debug, Serialize)]
struct GetRecord {
	path: String,
	r#type: String,
	value: serde_json::Value,
}

/// Walk a path expression, assert a type, and print the value.
pub fn run(path: PathBuf, at: String, as_type: AsType, default: Option<String>, json: bool) -> Result<()> {
	let root = PayloadCursor::new(load_payload(&path)?);
	let mut cursor = root.walk(&FieldPath::parse(&at)?)?;

	if let Some(default) = default {
		let decoded: serde_json::Value = serde_json::from_str(&default)?;
		cursor = cursor.fill_empty(Value::from(decoded));
	}

	let extracted = extract(&cursor, as_type)?;

	if json {
		let record = GetRecord {
			path: at,
			r#type: cursor.value().type_label(),
			value: extracted,
		};
		println!("{}", serde_json::to_string_pretty(&record)?);
	} else {
		println!("{}", render_plain(&extracted));
	}

	Ok(())
}

fn extract(cursor: &PayloadCursor, as_type: AsType) -> Result<serde_json::Value> {
	Ok(match as_type {
		AsType::String => serde_json::Value::String(cursor.as_string()?),
		AsType::Integer => serde_json::Value::from(cursor.as_integer()?),
		AsType::Boolean => serde_json::Value::Bool(cursor.as_boolean()?),
		AsType::Float => serde_json::Value::from(cursor.as_float()?),
		AsType::Raw => render_value(&cursor.as_raw_value()?),
	})
}

fn render_plain(value: &serde_json::Value) -> String {
	match value {
		serde_json::Value::String(value) => value.clone(),
		other => other.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use paywalk::payload::PayloadCursor;
	use serde_json::json;

	use super::{AsType, extract, render_plain};

	#[test]
	fn extracts_typed_scalars_as_json() {
		let cursor = PayloadCursor::new(json!(42));
		assert_eq!(extract(&cursor, AsType::Integer).expect("integer"), json!(42));
		assert_eq!(extract(&cursor, AsType::Float).expect("float"), json!(42.0));
		assert!(extract(&cursor, AsType::String).is_err());
	}

	#[test]
	fn raw_extraction_renders_the_whole_subtree() {
		let cursor = PayloadCursor::new(json!({"a": [1, 2]}));
		assert_eq!(extract(&cursor, AsType::Raw).expect("raw"), json!({"a": [1, 2]}));
	}

	#[test]
	fn plain_rendering_drops_string_quotes() {
		assert_eq!(render_plain(&json!("hello")), "hello");
		assert_eq!(render_plain(&json!([1, 2])), "[1,2]");
	}
}
