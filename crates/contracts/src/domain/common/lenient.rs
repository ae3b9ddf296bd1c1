//! Field deserializers that tolerate loosely typed backend rows.
//!
//! One odd column must not fail a whole list, so `null` falls back to the
//! field default and numbers may arrive as JSON strings (Decimal columns).

use super::form_value::parse_number;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrFloat {
    String(String),
    Float(f64),
}

/// `null` becomes `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Number or numeric string; `null` and unparseable strings are `None`.
pub fn number_option<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StringOrFloat>::deserialize(deserializer)? {
        Some(StringOrFloat::String(s)) => parse_number(&s),
        Some(StringOrFloat::Float(f)) => Some(f),
        None => None,
    })
}

/// As [`number_option`], with zero in place of `None`.
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(number_option(deserializer)?.unwrap_or(0.0))
}
