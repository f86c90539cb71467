//! Immutable document templates and the operations that resolve them.
//!
//! A template is JSON text whose `null` values are placeholder holes. Every
//! call to [`Template::instantiate`] parses a fresh document, so definitions
//! are never shared or mutated between uses.

use serde_json::Value;

use crate::error::{Error, Result};

/// A named document skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub name: &'static str,
    pub skeleton: &'static str,
}

impl Template {
    pub const fn new(name: &'static str, skeleton: &'static str) -> Self {
        Self { name, skeleton }
    }

    /// Parses a fresh copy of the skeleton.
    pub fn instantiate(&self) -> Result<Value> {
        serde_json::from_str(self.skeleton).map_err(|e| {
            Error::TemplateError(format!("template '{}' is not valid JSON: {}", self.name, e))
        })
    }
}

/// Replaces the value at `pointer`, which must already exist in the document.
pub fn fill<V: Into<Value>>(doc: &mut Value, pointer: &str, value: V) -> Result<()> {
    let slot = doc
        .pointer_mut(pointer)
        .ok_or_else(|| Error::TemplateError(format!("no field at '{pointer}'")))?;
    *slot = value.into();
    Ok(())
}

/// Inserts `key` into the object at `pointer`.
pub fn insert<V: Into<Value>>(doc: &mut Value, pointer: &str, key: &str, value: V) -> Result<()> {
    match doc.pointer_mut(pointer) {
        Some(Value::Object(map)) => {
            map.insert(key.to_string(), value.into());
            Ok(())
        }
        _ => Err(Error::TemplateError(format!("no object at '{pointer}'"))),
    }
}

/// Appends to the array at `pointer`.
pub fn push<V: Into<Value>>(doc: &mut Value, pointer: &str, value: V) -> Result<()> {
    match doc.pointer_mut(pointer) {
        Some(Value::Array(items)) => {
            items.push(value.into());
            Ok(())
        }
        _ => Err(Error::TemplateError(format!("no array at '{pointer}'"))),
    }
}

/// Removes a top-level field, returning whether it was present.
pub fn remove(doc: &mut Value, key: &str) -> bool {
    doc.as_object_mut()
        .map(|map| map.shift_remove(key).is_some())
        .unwrap_or(false)
}

/// Fails if any placeholder is left in the document.
pub fn ensure_resolved(doc: &Value, template: &Template) -> Result<()> {
    match find_placeholder(doc, String::new()) {
        Some(pointer) => Err(Error::UnresolvedPlaceholder {
            template: template.name.to_string(),
            pointer,
        }),
        None => Ok(()),
    }
}

fn find_placeholder(value: &Value, pointer: String) -> Option<String> {
    match value {
        Value::Null => Some(if pointer.is_empty() { "/".to_string() } else { pointer }),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .find_map(|(i, item)| find_placeholder(item, format!("{pointer}/{i}"))),
        Value::Object(map) => map.iter().find_map(|(key, item)| {
            let escaped = key.replace('~', "~0").replace('/', "~1");
            find_placeholder(item, format!("{pointer}/{escaped}"))
        }),
        _ => None,
    }
}
