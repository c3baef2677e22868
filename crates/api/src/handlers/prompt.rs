//! Handlers for the `/prompts` resource.
//!
//! `PUT` and `PATCH` differ in replacement semantics: `PUT` takes the same
//! body as create and resets optional fields that are absent, while `PATCH`
//! only touches the fields the body mentions (an explicit `null` clears).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use promptlab_core::error::CoreError;
use promptlab_core::validation::{validate_content, validate_description, validate_title};
use promptlab_store::models::prompt::{CreatePrompt, UpdatePrompt};

use crate::error::{AppError, AppResult};
use crate::response::{PromptList, PromptResponse};
use crate::state::AppState;

/// Query parameters for `GET /api/v1/prompts`.
#[derive(Debug, Deserialize)]
pub struct ListPromptsParams {
    /// Only prompts filed under this collection.
    pub collection_id: Option<String>,
    /// Case-insensitive substring match on title or description.
    pub search: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/prompts
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListPromptsParams>,
) -> AppResult<Json<PromptList>> {
    let prompts = state
        .store
        .list_prompts(params.collection_id.as_deref(), params.search.as_deref());
    Ok(Json(PromptList::from_prompts(prompts)))
}

/// POST /api/v1/prompts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePrompt>,
) -> AppResult<(StatusCode, Json<PromptResponse>)> {
    validate_create(&input)?;
    let prompt = state.store.create_prompt(&input)?;

    tracing::info!(prompt_id = %prompt.id, title = %prompt.title, "Prompt created");

    Ok((StatusCode::CREATED, Json(prompt.into())))
}

/// GET /api/v1/prompts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<PromptResponse>> {
    let prompt = state
        .store
        .get_prompt(&id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;
    Ok(Json(prompt.into()))
}

/// PUT /api/v1/prompts/{id}
///
/// Full replacement with the create body shape. Optional fields left out
/// of the body are cleared on the stored prompt.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CreatePrompt>,
) -> AppResult<Json<PromptResponse>> {
    validate_create(&input)?;
    let replacement = UpdatePrompt {
        title: Some(input.title),
        content: Some(input.content),
        description: Some(input.description),
        collection_id: Some(input.collection_id),
    };
    update_inner(&state, id, replacement).await
}

/// PATCH /api/v1/prompts/{id}
///
/// Partial update. Fields absent from the body keep their stored values.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdatePrompt>,
) -> AppResult<Json<PromptResponse>> {
    validate_update(&input)?;
    update_inner(&state, id, input).await
}

/// DELETE /api/v1/prompts/{id}
///
/// Removes the prompt only; its version history stays readable.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if state.store.delete_prompt(&id) {
        tracing::info!(prompt_id = %id, "Prompt deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

async fn update_inner(
    state: &AppState,
    id: String,
    input: UpdatePrompt,
) -> AppResult<Json<PromptResponse>> {
    let prompt = state
        .store
        .update_prompt(&id, &input)?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Prompt",
            id,
        }))?;

    tracing::info!(prompt_id = %prompt.id, "Prompt updated");

    Ok(Json(prompt.into()))
}

fn validate_create(input: &CreatePrompt) -> Result<(), CoreError> {
    validate_title(&input.title)?;
    validate_content(&input.content)?;
    if let Some(description) = &input.description {
        validate_description(description)?;
    }
    Ok(())
}

fn validate_update(input: &UpdatePrompt) -> Result<(), CoreError> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }
    if let Some(content) = &input.content {
        validate_content(content)?;
    }
    if let Some(Some(description)) = &input.description {
        validate_description(description)?;
    }
    Ok(())
}
