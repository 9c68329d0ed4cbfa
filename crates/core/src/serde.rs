//! Serde helper functions for request deserialization.
//!
//! Query parameters arrive as strings; an empty value (`?category=`) is
//! treated the same as an absent one. Decimals are always parsed from the
//! text the client sent, never through `f64`.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional decimal from its string form, treating empty
/// strings as None.
///
/// Parsing the text directly keeps the exact value (`0.1` stays `0.1`),
/// without a round trip through `f64`.
pub fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_decimal(&s).map(Some),
        _ => Ok(None),
    }
}

/// Deserialize an optional decimal from a JSON number or numeric string.
///
/// Relies on serde_json's `arbitrary_precision`, so a number keeps every
/// digit it was written with (`0.30000000000000000001` is not `0.3`).
pub fn deserialize_optional_json_decimal<'de, D>(
    deserializer: D,
) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => parse_decimal(&n.to_string()).map(Some),
        Some(Value::String(s)) => parse_decimal(&s).map(Some),
        Some(other) => Err(de::Error::custom(format!(
            "expected a decimal number, found {other}"
        ))),
    }
}

fn parse_decimal<E: de::Error>(text: &str) -> Result<Decimal, E> {
    let text = text.trim();
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .map_err(|e| E::custom(format!("invalid decimal {text}: {e}")))
}
