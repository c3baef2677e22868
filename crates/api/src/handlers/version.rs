//! Handlers for the `/prompts/{id}/versions` resource.
//!
//! Versions are immutable snapshots, so the surface is list, create, get,
//! and revert. Revert responds with the new snapshot it appended, not the
//! prompt.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use promptlab_core::error::CoreError;
use promptlab_core::validation::{validate_content, validate_description, validate_title};
use promptlab_store::models::prompt_version::{CreatePromptVersion, PromptVersion};

use crate::error::AppResult;
use crate::response::PromptVersionList;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/prompts/{id}/versions
///
/// History newest first.
pub async fn list(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
) -> AppResult<Json<PromptVersionList>> {
    let versions = state.store.list_versions(&prompt_id)?;
    Ok(Json(PromptVersionList::from_versions(versions)))
}

/// POST /api/v1/prompts/{id}/versions
pub async fn create(
    State(state): State<AppState>,
    Path(prompt_id): Path<String>,
    Json(input): Json<CreatePromptVersion>,
) -> AppResult<(StatusCode, Json<PromptVersion>)> {
    validate_snapshot(&input)?;
    let version = state.store.create_version(&prompt_id, &input)?;

    tracing::info!(
        prompt_id = %prompt_id,
        version_id = %version.id,
        version_number = version.version_number,
        "Version created",
    );

    Ok((StatusCode::CREATED, Json(version)))
}

/// GET /api/v1/prompts/{id}/versions/{version_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((prompt_id, version_id)): Path<(String, String)>,
) -> AppResult<Json<PromptVersion>> {
    let version = state.store.get_version(&prompt_id, &version_id)?;
    Ok(Json(version))
}

/// POST /api/v1/prompts/{id}/versions/{version_id}/revert
///
/// Appends a copy of the target version at the top of the history.
pub async fn revert(
    State(state): State<AppState>,
    Path((prompt_id, version_id)): Path<(String, String)>,
) -> AppResult<(StatusCode, Json<PromptVersion>)> {
    let version = state.store.revert_to_version(&prompt_id, &version_id)?;

    tracing::info!(
        prompt_id = %prompt_id,
        target_version_id = %version_id,
        version_number = version.version_number,
        "Prompt reverted",
    );

    Ok((StatusCode::CREATED, Json(version)))
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn validate_snapshot(input: &CreatePromptVersion) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    validate_content(&input.content)?;
    if let Some(description) = &input.description {
        validate_description(description)?;
    }
    Ok(())
}
