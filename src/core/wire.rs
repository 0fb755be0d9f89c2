//! Serde adapters for the backend's loosely typed JSON.
//!
//! The backend is backed by SQLite, so booleans arrive as `0`/`1`, nullable
//! text columns arrive as `null`, and ids may be numbers or strings.

use serde::{Deserialize, Deserializer};

/// `null` or missing becomes `T::default()`
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Int(i64),
}

/// Accepts `true`/`false`, `0`/`1`, or `null`
pub fn bool_from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Int(i)) => i != 0,
        None => false,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Text {
    Text(String),
    Number(serde_json::Number),
}

/// Form values are text, but hand-written drafts often use JSON numbers.
/// Both are kept as the text the user would have typed.
pub fn raw_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Text>::deserialize(deserializer)? {
        Some(Text::Text(s)) => s,
        Some(Text::Number(n)) => n.to_string(),
        None => String::new(),
    })
}
