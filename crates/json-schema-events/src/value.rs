//! `serde_json::Value` source.

use crate::{JsonEventHandler, JsonNumber};
use serde_json::Value;

/// Walk a `serde_json::Value` depth-first and push its events into `handler`.
///
/// Object keys are visited in the map's iteration order, which is insertion
/// order since the crate enables serde_json's `preserve_order` feature.
pub fn walk<H: JsonEventHandler + ?Sized>(value: &Value, handler: &mut H) {
    match value {
        Value::Null => handler.null(),
        Value::Bool(b) => handler.bool(*b),
        Value::Number(n) => handler.number(JsonNumber::from(n)),
        Value::String(s) => handler.string(s),
        Value::Array(items) => {
            handler.open_array();
            for item in items {
                walk(item, handler);
            }
            handler.close_array();
        }
        Value::Object(map) => {
            handler.open_object();
            for (key, item) in map {
                handler.object_key(key);
                walk(item, handler);
            }
            handler.close_object();
        }
    }
}
