//! Attribute-marker stripping for parsed XML mappings
//!
//! The XML reader keeps attributes apart from child elements by prefixing
//! their keys with `@`. Downstream code that does not care about the
//! distinction strips the marker so both can be addressed by bare name.

use serde_json::{Map, Value};

/// Marker prepended to attribute-derived keys
pub const ATTRIBUTE_MARKER: char = '@';

/// Strip the attribute marker from every key at every nesting level
pub fn strip_keys(value: &Value) -> Value {
    strip_keys_with(value, ATTRIBUTE_MARKER)
}

/// Strip a custom leading marker from every key at every nesting level
///
/// Sequences keep their length and order; scalars are returned unchanged.
/// When a stripped key collides with an undecorated sibling, the
/// undecorated (element-derived) entry is kept.
pub fn strip_keys_with(value: &Value, marker: char) -> Value {
    match value {
        Value::Object(map) => Value::Object(strip_map(map, marker)),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| strip_keys_with(item, marker))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn strip_map(map: &Map<String, Value>, marker: char) -> Map<String, Value> {
    let mut out = Map::with_capacity(map.len());

    for (key, value) in map {
        let stripped = strip_keys_with(value, marker);
        match key.strip_prefix(marker) {
            Some(bare) => {
                if out.contains_key(bare) {
                    tracing::debug!("Key '{}' shadowed by element '{}'", key, bare);
                    continue;
                }
                out.insert(bare.to_string(), stripped);
            }
            None => {
                if out.contains_key(key.as_str()) {
                    tracing::debug!("Element '{}' replaces attribute of same name", key);
                }
                out.insert(key.clone(), stripped);
            }
        }
    }

    out
}
