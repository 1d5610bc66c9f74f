//! Recursive field-casing transforms at the transport edge.
//!
//! The crate speaks snake_case internally (plain serde derives); the backend
//! wire format uses camelCase keys. These transforms rewrite object keys
//! recursively through nested objects and arrays while leaving values,
//! nulls, and array order untouched. For conventional keys (no consecutive
//! capitals, no numeric segments) the two transforms are mutual inverses.

use serde_json::{Map, Value};

/// Rewrites every object key in `value` from snake_case to camelCase.
#[must_use]
pub fn keys_to_camel(value: Value) -> Value {
    map_keys(value, &snake_to_camel)
}

/// Rewrites every object key in `value` from camelCase to snake_case.
#[must_use]
pub fn keys_to_snake(value: Value) -> Value {
    map_keys(value, &camel_to_snake)
}

/// Converts one snake_case identifier to camelCase.
#[must_use]
pub fn snake_to_camel(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for c in key.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Converts one camelCase identifier to snake_case.
#[must_use]
pub fn camel_to_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

fn map_keys(value: Value, transform: &impl Fn(&str) -> String) -> Value {
    match value {
        Value::Object(entries) => {
            let mapped: Map<String, Value> = entries
                .into_iter()
                .map(|(key, nested)| (transform(&key), map_keys(nested, transform)))
                .collect();
            Value::Object(mapped)
        }
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| map_keys(item, transform))
                .collect(),
        ),
        leaf => leaf,
    }
}
