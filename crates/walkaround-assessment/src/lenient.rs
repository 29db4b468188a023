//! Per-field tolerant deserializers for stored records
//!
//! A `null` or wrong-typed value degrades to the field's empty value instead
//! of failing the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

fn text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        _ => String::new(),
    }
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(text(Value::deserialize(deserializer)?))
}

pub(crate) fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().map(text).collect(),
        _ => Vec::new(),
    })
}

/// Object entries with non-string values kept as empty text
pub(crate) fn string_map<'de, D, M>(deserializer: D) -> Result<M, D::Error>
where
    D: Deserializer<'de>,
    M: Default + FromIterator<(String, String)>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries.into_iter().map(|(k, v)| (k, text(v))).collect(),
        _ => M::default(),
    })
}

/// Object entries with non-bool values kept as unchecked
pub(crate) fn bool_map<'de, D, M>(deserializer: D) -> Result<M, D::Error>
where
    D: Deserializer<'de>,
    M: Default + FromIterator<(String, bool)>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(entries) => entries
            .into_iter()
            .map(|(k, v)| (k, v.as_bool().unwrap_or(false)))
            .collect(),
        _ => M::default(),
    })
}

/// Nested struct, or its default when the value has the wrong shape
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(T::deserialize(Value::deserialize(deserializer)?).unwrap_or_default())
}
