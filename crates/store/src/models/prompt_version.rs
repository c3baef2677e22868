use promptlab_core::types::{Id, Timestamp};
use serde::{Deserialize, Serialize};

/// An immutable snapshot of a prompt's title and content at a point in its
/// edit history, numbered sequentially from 1.
///
/// There is no update DTO: versions are never modified once written.
#[derive(Debug, Clone, Serialize)]
pub struct PromptVersion {
    pub id: Id,
    pub prompt_id: Id,
    pub version_number: i64,
    pub title: String,
    pub content: String,
    /// Change note describing the snapshot, not a copy of the prompt's own
    /// description field.
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// Payload for snapshotting a new version of a prompt.
#[derive(Debug, Deserialize)]
pub struct CreatePromptVersion {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
}
