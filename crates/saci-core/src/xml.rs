//! XML to nested mapping conversion
//!
//! Produces a `serde_json::Value` tree following the common
//! "XML as dictionary" layout:
//!
//! - the document becomes `{ <root-name>: <root-value> }`
//! - attributes become keys prefixed with `@`
//! - child elements become keys holding their value, or an array of values
//!   when the element name repeats
//! - text of an element that also has attributes or children goes under `#text`
//! - a text-only element collapses to its string, an empty one to `null`

use crate::error::Result;
use crate::keys::ATTRIBUTE_MARKER;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Key holding element text next to attributes or children
pub const TEXT_KEY: &str = "#text";

/// Parse an XML string into a nested mapping
pub fn parse_str(xml: &str) -> Result<Value> {
    let doc = roxmltree::Document::parse(xml)?;
    let root = doc.root_element();

    let mut top = Map::new();
    top.insert(root.tag_name().name().to_string(), element_value(root));
    Ok(Value::Object(top))
}

/// Read and parse an XML file into a nested mapping
pub fn parse_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to read XML file {:?}: {}", path, e),
        )
    })?;
    tracing::debug!("Parsing {} bytes from {:?}", content.len(), path);
    parse_str(&content)
}

fn element_value(node: roxmltree::Node<'_, '_>) -> Value {
    let mut map = Map::new();

    for attr in node.attributes() {
        map.insert(
            format!("{}{}", ATTRIBUTE_MARKER, attr.name()),
            Value::String(attr.value().to_string()),
        );
    }

    let mut text = String::new();
    for child in node.children() {
        if child.is_element() {
            let name = child.tag_name().name().to_string();
            let value = element_value(child);
            push_child(&mut map, name, value);
        } else if child.is_text() {
            if let Some(t) = child.text() {
                text.push_str(t);
            }
        }
    }

    let text = text.trim();
    if map.is_empty() {
        return if text.is_empty() {
            Value::Null
        } else {
            Value::String(text.to_string())
        };
    }

    if !text.is_empty() {
        map.insert(TEXT_KEY.to_string(), Value::String(text.to_string()));
    }
    Value::Object(map)
}

/// Insert a child value, turning repeated names into an array
fn push_child(map: &mut Map<String, Value>, name: String, value: Value) {
    match map.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(name, value);
        }
    }
}
