//! Route definitions for collections.

use axum::routing::get;
use axum::Router;

use crate::handlers::collection;
use crate::state::AppState;

/// Routes mounted at `/collections`.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update
/// DELETE /{id}  -> delete (cascades to member prompts)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(collection::list).post(collection::create))
        .route(
            "/{id}",
            get(collection::get_by_id)
                .put(collection::update)
                .delete(collection::delete),
        )
}
