//! Handlers for the `/collections` resource.
//!
//! Deleting a collection always cascades to its member prompts. There is
//! deliberately no orphaning variant of the delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use promptlab_core::error::CoreError;
use promptlab_core::validation::{validate_collection_name, validate_description};
use promptlab_store::models::collection::{Collection, CreateCollection, UpdateCollection};

use crate::error::{AppError, AppResult};
use crate::response::CollectionList;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/collections
pub async fn list(State(state): State<AppState>) -> AppResult<Json<CollectionList>> {
    let collections = state.store.list_collections();
    Ok(Json(CollectionList::from_collections(collections)))
}

/// POST /api/v1/collections
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCollection>,
) -> AppResult<(StatusCode, Json<Collection>)> {
    validate_create(&input)?;
    let collection = state.store.create_collection(&input);

    tracing::info!(collection_id = %collection.id, name = %collection.name, "Collection created");

    Ok((StatusCode::CREATED, Json(collection)))
}

/// GET /api/v1/collections/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Collection>> {
    let collection = state
        .store
        .get_collection(&id)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collection",
            id,
        }))?;
    Ok(Json(collection))
}

/// PUT /api/v1/collections/{id}
///
/// Full replacement with the create body shape.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<CreateCollection>,
) -> AppResult<Json<Collection>> {
    validate_create(&input)?;
    let replacement = UpdateCollection {
        name: Some(input.name),
        description: Some(input.description),
    };
    let collection = state
        .store
        .update_collection(&id, &replacement)
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Collection",
            id,
        }))?;

    tracing::info!(collection_id = %collection.id, "Collection updated");

    Ok(Json(collection))
}

/// DELETE /api/v1/collections/{id}
///
/// Cascades: the collection and every prompt filed under it are removed
/// in one step.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    if state.store.delete_collection_cascade(&id) {
        tracing::info!(collection_id = %id, "Collection deleted with member prompts");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Collection",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn validate_create(input: &CreateCollection) -> Result<(), CoreError> {
    validate_collection_name(&input.name)?;
    if let Some(description) = &input.description {
        validate_description(description)?;
    }
    Ok(())
}
