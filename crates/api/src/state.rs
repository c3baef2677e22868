use std::sync::Arc;

use promptlab_store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory entity store.
    pub store: Arc<Store>,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
}
