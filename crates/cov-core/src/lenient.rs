//! Forgiving deserializers for memo lists written by upstream generators.
//!
//! A memo with one malformed entry must still load: the display pipeline
//! prefers a partially grounded memo to a missing event. Indexed lists keep
//! a `None` slot for each entry of the wrong shape so diagnostics still
//! number items by their position in the source. `null` lists become empty.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a list, turning entries that do not fit `T` into `None`.
pub fn keep_slots<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .map(|value| serde_json::from_value(value).ok())
        .collect())
}

/// Deserialize an optional list, silently dropping entries that do not
/// fit `T`. `null` stays `None`.
pub fn skip_malformed_opt<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw.map(|items| {
        items
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect()
    }))
}

/// Deserialize a scalar as text: strings as-is, numbers in their decimal
/// form, `true` as `"true"`. `false`, `null`, arrays and objects are `None`.
pub fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }))
}

/// Like [`scalar_text`] but empty when the value has no text form.
pub fn scalar_text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    scalar_text(deserializer).map(Option::unwrap_or_default)
}
