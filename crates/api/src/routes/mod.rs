pub mod collection;
pub mod health;
pub mod prompt;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /prompts                                    list (?collection_id, ?search), create
/// /prompts/{id}                               get, replace (PUT), update (PATCH), delete
/// /prompts/{id}/versions                      list, create
/// /prompts/{id}/versions/{version_id}         get
/// /prompts/{id}/versions/{version_id}/revert  revert (POST)
///
/// /collections                                list, create
/// /collections/{id}                           get, replace (PUT), delete (cascades)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/prompts", prompt::router())
        .nest("/collections", collection::router())
}
