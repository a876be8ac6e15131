//! Route definitions for the advertisement resource.

use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::handlers::advertisement;
use crate::state::AppState;

/// Routes mounted at `/Advertisment`.
///
/// Paths are action-named rather than RESTful to stay compatible with
/// existing clients.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/Create", post(advertisement::create))
        .route("/GetAll", get(advertisement::list))
        .route("/GetOne/{id}", get(advertisement::get_by_id))
        .route("/Update", put(advertisement::update))
        .route("/Patch/{id}", patch(advertisement::patch))
        .route("/Delete/{id}", delete(advertisement::delete))
}
