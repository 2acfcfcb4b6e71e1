use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializer for a message's `content`, which the session format writes as
/// a list of blocks, a single bare value, or nothing at all
///
/// - A list is taken as-is
/// - A falsy value (`null`, `false`, `0`, `""`, `{}`) becomes an empty list
/// - Any other value becomes a one-element list
pub fn deserialize_content_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(into_content_list(value))
}

pub(crate) fn into_content_list(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other if is_truthy(&other) => vec![other],
        _ => Vec::new(),
    }
}

/// JSON truthiness: null, false, zero, and empty strings/arrays/objects are falsy
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Deserializer for optional fields where a present `null` is meaningful
///
/// Paired with `#[serde(default)]`: a missing key stays `None`, while any
/// present value (including `null`) becomes `Some`.
pub fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Deserializer for optional string fields that tolerates other JSON types
///
/// A string becomes `Some`; `null` or any non-string value becomes `None`, so a
/// single oddly-typed field does not fail the surrounding record.
pub fn deserialize_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
