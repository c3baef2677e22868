//! Route definitions for prompts and their version history.
//!
//! Version routes live under their owning prompt, so every version
//! operation carries the prompt id and the handlers can enforce
//! ownership.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{prompt, version};
use crate::state::AppState;

/// Routes mounted at `/prompts`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{id}                              -> get_by_id
/// PUT    /{id}                              -> update
/// PATCH  /{id}                              -> partial_update
/// DELETE /{id}                              -> delete
/// GET    /{id}/versions                     -> version::list
/// POST   /{id}/versions                     -> version::create
/// GET    /{id}/versions/{version_id}        -> version::get_by_id
/// POST   /{id}/versions/{version_id}/revert -> version::revert
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prompt::list).post(prompt::create))
        .route(
            "/{id}",
            get(prompt::get_by_id)
                .put(prompt::update)
                .patch(prompt::partial_update)
                .delete(prompt::delete),
        )
        .route(
            "/{id}/versions",
            get(version::list).post(version::create),
        )
        .route("/{id}/versions/{version_id}", get(version::get_by_id))
        .route("/{id}/versions/{version_id}/revert", post(version::revert))
}
