//! Wire normalization helpers.
//!
//! The backend sends `""` for a missing image or price and `0`/`null` for a
//! missing rating. These collapse to `None`.

use serde::{Deserialize, Deserializer};

pub(crate) fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()).map(T::from))
}

pub(crate) fn zero_as_none<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<f64> = Option::deserialize(deserializer)?;
    Ok(value.filter(|rating| *rating > 0.0))
}
