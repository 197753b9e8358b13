//! Serde helpers for the input and report boundaries
//!
//! Durations stay exact (`Beats`) inside the engine and only become
//! floating point when a report is serialized.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serializer};

use super::{beats_to_f64, Beats};

/// Serialize exact beats as a JSON number
pub fn beats_as_f64<S>(value: &Beats, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_f64(beats_to_f64(value))
}

/// Serialize any `Display` value as its string form ("3/4")
pub fn as_display<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Display,
    S: Serializer,
{
    serializer.collect_str(value)
}

/// Read an explicit `null` as the field's default (empty voice, "?" id)
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
