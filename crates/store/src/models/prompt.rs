use promptlab_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};

use super::double_option;

/// A titled, versionable unit of text content, optionally filed under a
/// collection.
#[derive(Debug, Clone, Serialize)]
pub struct Prompt {
    pub id: Id,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    /// Owning collection, if any. Checked against the collection table at
    /// the moment it is set; never re-checked afterwards.
    pub collection_id: Option<Id>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Store-assigned insertion sequence. Breaks `created_at` ties in
    /// recency sorts; not part of the wire format.
    #[serde(skip)]
    pub seq: u64,
}

/// Payload for creating a prompt. Also the body shape for full (PUT)
/// replacement, where absent optional fields clear the stored values.
#[derive(Debug, Deserialize)]
pub struct CreatePrompt {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<Id>,
}

/// Payload for partially updating a prompt.
///
/// `None` leaves a field unchanged. The nullable fields are double-`Option`
/// so an explicit JSON `null` can clear them.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePrompt {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub collection_id: Option<Option<Id>>,
}
