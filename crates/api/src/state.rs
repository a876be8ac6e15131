use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Per-request persistence contexts are built from `pool`; nothing mutable
/// lives here.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: annos_db::DbPool,
    /// Server configuration (JWT secret is read by the auth extractors).
    pub config: Arc<ServerConfig>,
}
