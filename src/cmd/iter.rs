use std::path::PathBuf;

use serde::Serialize;

use paywalk::payload::{FieldPath, PathSegment, PayloadCursor, Result};

use crate::cmd::util::load_payload;

/// JSON record emitted by `iter --json` for one element.
#[derive(Debug, Serialize)]
struct IterRecord {
	key: String,
	r#type: String,
}

/// Iterate one level of a payload and print element keys with types.
pub fn run(path: PathBuf, at: Option<String>, json: bool) -> Result<()> {
	let root = PayloadCursor::new(load_payload(&path)?);
	let cursor = match at {
		Some(expr) => root.walk(&FieldPath::parse(&expr)?)?,
		None => root,
	};

	let records: Vec<IterRecord> = cursor
		.iterate()?
		.map(|(key, item)| IterRecord {
			key: render_key(&key),
			r#type: item.value().type_label(),
		})
		.collect();

	if json {
		println!("{}", serde_json::to_string_pretty(&records)?);
	} else {
		for record in &records {
			println!("{}: {}", record.key, record.r#type);
		}
	}

	Ok(())
}

fn render_key(key: &PathSegment) -> String {
	match key {
		PathSegment::Name(name) => name.to_string(),
		PathSegment::Index(index) => index.to_string(),
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use paywalk::payload::PathSegment;

	use super::render_key;

	#[test]
	fn renders_both_key_kinds() {
		assert_eq!(render_key(&PathSegment::Name(Arc::from("name"))), "name");
		assert_eq!(render_key(&PathSegment::Index(3)), "3");
	}
}
