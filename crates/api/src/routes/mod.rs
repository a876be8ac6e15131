pub mod advertisement;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /Advertisment/Create          POST    (Admin)
/// /Advertisment/GetAll          GET     (Admin, User)
/// /Advertisment/GetOne/{id}     GET     (Admin, User)
/// /Advertisment/Update          PUT     (Admin)
/// /Advertisment/Patch/{id}      PATCH   (Admin)
/// /Advertisment/Delete/{id}     DELETE  (Admin)
/// ```
///
/// The resource segment keeps its historical spelling; existing clients
/// depend on it.
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/Advertisment", advertisement::router())
}
