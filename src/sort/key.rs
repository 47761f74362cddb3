//! Canonical key text for mapping keys.

use crate::model::value::{format_datetime, format_float};
use crate::model::Value;

/// Coerce a mapping key to its canonical text.
///
/// Strings pass through unchanged, integers print in decimal, floats keep a
/// trailing `.0` when integral (`1.0`), booleans become `True`/`False` and
/// null becomes `None`. Composite and bytes keys use their literal form, so
/// the tuple key `(1, 2)` becomes the text `(1, 2)`.
pub fn canonical_key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => format_float(*f),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => "None".to_string(),
        Value::Date(d) => d.to_string(),
        Value::DateTime(dt) => format_datetime(dt),
        Value::Bytes(_) | Value::Map(_) | Value::List(_) | Value::Set(_) | Value::Tuple(_) => {
            key.to_string()
        }
    }
}
