//! Serde helpers for options written as `false` or a variant name.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagOr<T> {
    Flag(bool),
    Value(T),
}

/// Deserialize `false | "<variant>"` into `Option<T>`.
pub fn deserialize_flag_or<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    match FlagOr::<T>::deserialize(deserializer)? {
        FlagOr::Flag(false) => Ok(None),
        FlagOr::Flag(true) => Err(D::Error::custom(
            "expected `false` or a variant name, found `true`",
        )),
        FlagOr::Value(value) => Ok(Some(value)),
    }
}

/// Like [`deserialize_flag_or`], but keeps "absent" (`None`) apart from
/// "explicitly disabled" (`Some(None)`). Pair with `#[serde(default)]`.
pub fn deserialize_optional_flag_or<'de, D, T>(
    deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserialize_flag_or(deserializer).map(Some)
}

/// Serialize `Option<T>` as `false` when disabled.
pub fn serialize_flag_or<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    match value {
        None => serializer.serialize_bool(false),
        Some(value) => value.serialize(serializer),
    }
}
