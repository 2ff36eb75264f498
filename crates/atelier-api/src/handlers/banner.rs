//! Handlers for the `/banner` resource.
//!
//! One banner per `banner_type`; the image lives under the per-type
//! storage folder and is swapped via upload-new-then-destroy-old.

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::banner::BannerSummary;
use atelier_db::repositories::BannerRepo;
use atelier_storage::paths;
use axum::extract::{Path, State};

use crate::assets;
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::FormData;
use crate::response::Success;
use crate::state::AppState;

/// POST /api/banner
///
/// Multipart `type` + `image`. A duplicate type conflicts and leaves the
/// existing banner untouched.
pub async fn create(State(state): State<AppState>, mut form: FormData) -> AppResult<Success> {
    let banner_type = form.text_or_default("type");
    if banner_type.trim().is_empty() {
        return Err(AppError::BadRequest("Banner type is required!".into()));
    }
    let Some(image) = form.take_file("image") else {
        return Err(AppError::BadRequest("Banner image is required!".into()));
    };

    if BannerRepo::find_by_type(&state.pool, &banner_type)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Banner already exists for this type!".into(),
        )));
    }

    let storage = &*state.storage;
    let stored = assets::upload_file(storage, &paths::banner(&banner_type), image).await?;

    let banner = match BannerRepo::create(&state.pool, &banner_type, &stored.secure_url).await {
        Ok(row) => row,
        Err(err) => {
            assets::discard_uploads(storage, std::slice::from_ref(&stored)).await;
            // A concurrent create can still trip the constraint between the
            // pre-check and the insert.
            if is_unique_violation(&err, "uq_banners_banner_type") {
                return Err(AppError::Core(CoreError::Conflict(
                    "Banner already exists for this type!".into(),
                )));
            }
            return Err(err.into());
        }
    };

    tracing::info!(id = banner.id, banner_type = %banner.banner_type, "banner created");
    Ok(Success::created()
        .message("Banner created successfully")
        .field("banner", &banner))
}

/// GET /api/banner/all-banners
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let banners: Vec<BannerSummary> = BannerRepo::list_all(&state.pool)
        .await?
        .into_iter()
        .map(BannerSummary::from)
        .collect();
    Ok(Success::ok().count(banners.len()).field("banners", &banners))
}

/// GET /api/banner/{banner_type}/{id}
pub async fn get(
    State(state): State<AppState>,
    Path((banner_type, id)): Path<(String, DbId)>,
) -> AppResult<Success> {
    let banner = BannerRepo::find_by_type_and_id(&state.pool, &banner_type, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Banner not found".into()))?;
    Ok(Success::ok().field("banner", &banner))
}

/// PUT /api/banner/{banner_type}/{id}
///
/// Replaces the image: upload new, persist the URL, then destroy the
/// superseded object best-effort.
pub async fn update(
    State(state): State<AppState>,
    Path((banner_type, id)): Path<(String, DbId)>,
    mut form: FormData,
) -> AppResult<Success> {
    let Some(image) = form.take_file("image") else {
        return Err(AppError::BadRequest("Banner image is required!".into()));
    };

    let existing = BannerRepo::find_by_type_and_id(&state.pool, &banner_type, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Banner not found".into()))?;

    let storage = &*state.storage;
    let stored = assets::upload_file(storage, &paths::banner(&banner_type), image).await?;

    let banner = match BannerRepo::update_image(&state.pool, id, &stored.secure_url).await {
        Ok(Some(row)) => row,
        Ok(None) => {
            assets::discard_uploads(storage, std::slice::from_ref(&stored)).await;
            return Err(AppError::NotFound("Banner not found".into()));
        }
        Err(err) => {
            assets::discard_uploads(storage, std::slice::from_ref(&stored)).await;
            return Err(err.into());
        }
    };

    assets::destroy_url_best_effort(storage, &paths::banner(&banner_type), &existing.image).await;

    tracing::info!(id, banner_type = %banner_type, "banner image replaced");
    Ok(Success::ok()
        .message("Banner updated successfully")
        .field("banner", &banner))
}
