//! `serde_json::Value` support for sanitization traversal.
//!
//! `Value` is the dynamically shaped graph: its kind is only known at runtime,
//! so traversal matches on it node by node.
//!
//! | Node                      | Action                                      |
//! |---------------------------|---------------------------------------------|
//! | `String`                  | cleaned in place                            |
//! | `Array`                   | every element walked                        |
//! | `Object`                  | string values cleaned, other values skipped |
//! | `Null`, `Bool`, `Number`  | skipped (trace)                             |

use serde_json::{Map, Value};

use crate::{text::TextMapper, traversal::traits::SanitizableWithMapper};

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl SanitizableWithMapper for Value {
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        match self {
            Value::String(text) => mapper.map_in_place(text),
            Value::Array(items) => items.sanitize_with(mapper),
            Value::Object(entries) => entries.sanitize_with(mapper),
            Value::Null | Value::Bool(_) | Value::Number(_) => {
                tracing::trace!(kind = kind(self), "skipping non-text JSON value");
            }
        }
    }

    fn sanitize_map_value<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        if let Value::String(text) = self {
            mapper.map_in_place(text);
        }
    }
}

impl SanitizableWithMapper for Map<String, Value> {
    fn sanitize_with<M: TextMapper + ?Sized>(&mut self, mapper: &M) {
        for (key, value) in self.iter_mut() {
            if value.is_string() {
                value.sanitize_map_value(mapper);
            } else {
                tracing::trace!(key = %key, kind = kind(value), "leaving non-string object value untouched");
            }
        }
    }
}
