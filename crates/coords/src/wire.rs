//! Wire-format conventions shared by the position values.
//!
//! Every position encodes as a flat JSON object with every field required.
//! `world` is nullable (a detached position) but may not be omitted -- serde
//! treats `Option` fields as omittable by default, so the field carries an
//! explicit deserializer that keeps absence an error while accepting `null`.
//! Unknown fields are ignored on decode and nothing beyond the known fields
//! is preserved.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::PositionError;

/// Required-but-nullable `world` field: absent is an error, `null` is `None`.
pub(crate) fn world_field<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::deserialize(deserializer)
}

/// Decode a position value out of an already-parsed JSON node.
///
/// Only object nodes are positions; the shape check lives here because
/// the derived impls would otherwise also accept a coordinate sequence
/// like `[1, 2, "overworld"]`.
pub(crate) fn decode<T: DeserializeOwned>(value: &Value) -> Result<T, PositionError> {
    if !value.is_object() {
        return Err(PositionError::Malformed(serde_json::Error::custom(
            "position payload must be an object",
        )));
    }
    T::deserialize(value).map_err(PositionError::from)
}
