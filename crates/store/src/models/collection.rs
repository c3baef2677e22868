use promptlab_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};

use super::double_option;

/// A named grouping of prompts.
///
/// Stores no back-references; membership is derived by scanning
/// `Prompt.collection_id`.
#[derive(Debug, Clone, Serialize)]
pub struct Collection {
    pub id: Id,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    /// Store-assigned insertion sequence, same role as on `Prompt`.
    #[serde(skip)]
    pub seq: u64,
}

/// Payload for creating a collection. Also the body shape for full (PUT)
/// replacement.
#[derive(Debug, Deserialize)]
pub struct CreateCollection {
    pub name: String,
    pub description: Option<String>,
}

/// Payload for updating a collection.
///
/// `None` leaves a field unchanged; an explicit JSON `null` clears the
/// description.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateCollection {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
}
