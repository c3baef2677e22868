//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct, the stored representation
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches, where
//!   entities support updates

pub mod collection;
pub mod prompt;
pub mod prompt_version;

/// Deserialize helper distinguishing "field absent" from "field: null".
///
/// With `#[serde(default, deserialize_with = "double_option")]` an absent
/// field stays `None`, an explicit `null` becomes `Some(None)`, and a
/// value becomes `Some(Some(v))`. Update DTOs use this for fields that a
/// patch must be able to clear.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: serde::Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    serde::Deserialize::deserialize(de).map(Some)
}
