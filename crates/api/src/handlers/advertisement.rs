//! Handlers for the `/Advertisment` resource.
//!
//! Every mutation commits through a fresh [`AdvertContext`] and, except for
//! `patch`, answers with the full collection so clients can re-sync.

use annos_core::error::CoreError;
use annos_core::patch::{PatchDocument, RawPatchOperation};
use annos_core::types::DbId;
use annos_db::context::AdvertContext;
use annos_db::models::advertisement::Advertisement;
use annos_db::models::advertisement_view::{to_views, AdvertisementView};
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::state::AppState;

const ENTITY: &str = "Advertisement";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /api/Advertisment/Create
///
/// The payload's `id` is ignored; the store assigns one.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    AppJson(input): AppJson<AdvertisementView>,
) -> AppResult<Json<Vec<AdvertisementView>>> {
    let mut ctx = AdvertContext::new(state.pool.clone());
    ctx.add(Advertisement::from(input));
    ctx.save_changes().await?;

    tracing::info!(user_id = %user.user_id, "Advertisement created");
    Ok(Json(to_views(ctx.list_all().await?)))
}

/// GET /api/Advertisment/GetAll
pub async fn list(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
) -> AppResult<Json<Vec<AdvertisementView>>> {
    let ctx = AdvertContext::new(state.pool.clone());
    Ok(Json(to_views(ctx.list_all().await?)))
}

/// GET /api/Advertisment/GetOne/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<AdvertisementView>> {
    let mut ctx = AdvertContext::new(state.pool.clone());
    let advert = ctx.find(id).await?.ok_or_else(|| not_found(id))?;
    Ok(Json(AdvertisementView::from(advert.clone())))
}

/// PUT /api/Advertisment/Update
///
/// Overwrites every mutable field of the record named by the payload's `id`.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    AppJson(input): AppJson<AdvertisementView>,
) -> AppResult<Json<Vec<AdvertisementView>>> {
    let mut ctx = AdvertContext::new(state.pool.clone());
    let advert = ctx
        .find(input.id)
        .await?
        .ok_or_else(|| not_found(input.id))?;

    advert.name = input.name;
    advert.description = input.description;
    advert.price = input.price;
    advert.date_added = input.date_added;

    ctx.save_changes().await?;

    tracing::info!(advert_id = input.id, user_id = %user.user_id, "Advertisement updated");
    Ok(Json(to_views(ctx.list_all().await?)))
}

/// PATCH /api/Advertisment/Patch/{id}
///
/// Applies an RFC 6902-style document restricted to add/replace/test on the
/// mutable fields. Returns the patched record as stored.
pub async fn patch(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    AppPath(id): AppPath<DbId>,
    AppJson(raw): AppJson<Vec<RawPatchOperation>>,
) -> AppResult<Json<AdvertisementView>> {
    let document = PatchDocument::try_from(raw.as_slice())?;

    let mut ctx = AdvertContext::new(state.pool.clone());
    let advert = ctx.find(id).await?.ok_or_else(|| not_found(id))?;
    document.apply_to(&mut *advert)?;
    ctx.save_changes().await?;

    // Re-read through the context so the response carries the stored values.
    let patched = ctx.find(id).await?.ok_or_else(|| not_found(id))?.clone();

    tracing::info!(
        advert_id = id,
        user_id = %user.user_id,
        operations = document.operations().len(),
        "Advertisement patched"
    );
    Ok(Json(AdvertisementView::from(patched)))
}

/// DELETE /api/Advertisment/Delete/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Vec<AdvertisementView>>> {
    let mut ctx = AdvertContext::new(state.pool.clone());
    if ctx.find(id).await?.is_none() {
        return Err(not_found(id));
    }
    ctx.remove(id);
    ctx.save_changes().await?;

    tracing::info!(advert_id = id, user_id = %user.user_id, "Advertisement deleted");
    Ok(Json(to_views(ctx.list_all().await?)))
}
