//! Resolved output documents and their serialization.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::Result;

/// Object key order used when a document is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOrder {
    /// Keys as they were inserted while resolving the template.
    Inserted,
    /// Keys sorted lexicographically at every level.
    Sorted,
}

/// A fully resolved document together with where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    /// Path relative to the context output root.
    pub path: PathBuf,
    pub content: Value,
    pub order: KeyOrder,
}

impl OutputDocument {
    pub fn new<P: Into<PathBuf>>(path: P, content: Value, order: KeyOrder) -> Self {
        Self {
            path: path.into(),
            content,
            order,
        }
    }

    /// `<stem>.json` in `dir`, or at the output root when `dir` is empty.
    pub fn json<P: AsRef<Path>>(dir: P, stem: &str, content: Value, order: KeyOrder) -> Self {
        Self::new(dir.as_ref().join(format!("{stem}.json")), content, order)
    }

    /// Serializes the content with four space indentation.
    pub fn render(&self) -> Result<String> {
        let value = match self.order {
            KeyOrder::Inserted => self.content.clone(),
            KeyOrder::Sorted => sort_keys(&self.content),
        };
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        value.serialize(&mut serializer)?;
        out.push(b'\n');
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_inserted_keeps_order() {
        let doc = OutputDocument::json("", "x", json!({"type": "t", "key": {"b": 1, "a": 2}}), KeyOrder::Inserted);
        let text = doc.render().unwrap();
        assert!(text.find("\"type\"").unwrap() < text.find("\"key\"").unwrap());
        assert!(text.find("\"b\"").unwrap() < text.find("\"a\"").unwrap());
        assert!(text.contains("\n    \"type\": \"t\""));
    }

    #[test]
    fn test_render_sorted_orders_nested_keys() {
        let doc = OutputDocument::json("", "x", json!({"type": "t", "key": {"b": 1, "a": 2}}), KeyOrder::Sorted);
        let text = doc.render().unwrap();
        assert!(text.find("\"key\"").unwrap() < text.find("\"type\"").unwrap());
        assert!(text.find("\"a\"").unwrap() < text.find("\"b\"").unwrap());
    }

    #[test]
    fn test_json_path() {
        let doc = OutputDocument::json("crushing", "iron", json!({}), KeyOrder::Inserted);
        assert_eq!(doc.path, PathBuf::from("crushing/iron.json"));
        let doc = OutputDocument::json("", "iron", json!({}), KeyOrder::Inserted);
        assert_eq!(doc.path, PathBuf::from("iron.json"));
    }
}
