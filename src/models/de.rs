// src/models/de.rs

//! Lenient integer fields.
//!
//! Browser clients post ids straight from `<select>` values, so an id may
//! arrive as `3` or as `"3"`. Both decode to the same integer.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString {
    Int(i64),
    Text(String),
}

impl IntOrString {
    fn into_i64<E: de::Error>(self) -> Result<i64, E> {
        match self {
            IntOrString::Int(v) => Ok(v),
            IntOrString::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid integer: {:?}", s))),
        }
    }
}

pub fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    IntOrString::deserialize(deserializer)?.into_i64()
}

pub fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IntOrString>::deserialize(deserializer)?
        .map(IntOrString::into_i64)
        .transpose()
}
