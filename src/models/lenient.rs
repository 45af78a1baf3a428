//! Shape-tolerant field deserializers for stored records
//!
//! A hand-edited or foreign record may carry `null` or a value of the wrong
//! JSON type in any field. These helpers degrade such values to the field's
//! default so the record itself still loads.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Text field: strings as-is, numbers and booleans stringified, else empty
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

/// Optional label: only strings survive, anything else is absent
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Flag field: booleans as-is, `"true"`/`"false"` strings, else false
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Render a scalar JSON value as text; `None` for null, arrays and objects
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
