//! Shared response types for API handlers.
//!
//! Entities go over the wire enriched rather than raw: prompts gain a
//! `variables` field computed from their content, and list endpoints wrap
//! their items with a `total` count.

use serde::Serialize;

use promptlab_core::template::extract_variables;
use promptlab_store::models::collection::Collection;
use promptlab_store::models::prompt::Prompt;
use promptlab_store::models::prompt_version::PromptVersion;

/// A prompt as returned by the API: the stored record plus the template
/// variables found in its content.
#[derive(Debug, Serialize)]
pub struct PromptResponse {
    #[serde(flatten)]
    pub prompt: Prompt,
    pub variables: Vec<String>,
}

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        let variables = extract_variables(&prompt.content);
        Self { prompt, variables }
    }
}

/// Response body for `GET /api/v1/prompts`.
#[derive(Debug, Serialize)]
pub struct PromptList {
    pub prompts: Vec<PromptResponse>,
    pub total: usize,
}

impl PromptList {
    pub fn from_prompts(prompts: Vec<Prompt>) -> Self {
        let prompts: Vec<PromptResponse> = prompts.into_iter().map(Into::into).collect();
        let total = prompts.len();
        Self { prompts, total }
    }
}

/// Response body for `GET /api/v1/collections`.
#[derive(Debug, Serialize)]
pub struct CollectionList {
    pub collections: Vec<Collection>,
    pub total: usize,
}

impl CollectionList {
    pub fn from_collections(collections: Vec<Collection>) -> Self {
        let total = collections.len();
        Self { collections, total }
    }
}

/// Response body for `GET /api/v1/prompts/{id}/versions`.
#[derive(Debug, Serialize)]
pub struct PromptVersionList {
    pub versions: Vec<PromptVersion>,
    pub total: usize,
}

impl PromptVersionList {
    pub fn from_versions(versions: Vec<PromptVersion>) -> Self {
        let total = versions.len();
        Self { versions, total }
    }
}
