//! Handlers for the `/alumni` resource.

use atelier_core::types::DbId;
use atelier_db::models::alumni::{CreateAlumni, UpdateAlumni};
use atelier_db::repositories::AlumniRepo;
use atelier_storage::paths;
use axum::extract::{Path, State};
use validator::Validate;

use crate::assets;
use crate::error::{AppError, AppResult};
use crate::extract::FormData;
use crate::response::Success;
use crate::state::AppState;

/// POST /api/alumni/new-alumni
pub async fn create(State(state): State<AppState>, mut form: FormData) -> AppResult<Success> {
    let input = CreateAlumni {
        name: form.text_or_default("name"),
        company: form.text_or_default("company"),
        designation: form.text_or_default("designation"),
        location: form.text_or_default("location"),
    };
    input.validate()?;

    let Some(image) = form.take_file("image") else {
        return Err(AppError::BadRequest("Image is required!".into()));
    };

    let storage = &*state.storage;
    let stored = assets::upload_file(storage, &paths::alumni_images(), image).await?;

    let alumni = match AlumniRepo::create(&state.pool, &input, &stored.secure_url).await {
        Ok(row) => row,
        Err(err) => {
            assets::discard_uploads(storage, std::slice::from_ref(&stored)).await;
            return Err(err.into());
        }
    };

    tracing::info!(id = alumni.id, "alumni entry created");
    Ok(Success::created()
        .message("Alumni created successfully")
        .field("alumni", &alumni))
}

/// GET /api/alumni/all-alumnies
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let alumnies = AlumniRepo::list_all(&state.pool).await?;
    Ok(Success::ok()
        .count(alumnies.len())
        .field("alumnies", &alumnies))
}

/// GET /api/alumni/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let alumni = AlumniRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Alumni not found".into()))?;
    Ok(Success::ok().field("alumni", &alumni))
}

/// PUT /api/alumni/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut form: FormData,
) -> AppResult<Success> {
    let existing = AlumniRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Alumni not found".into()))?;

    let input = UpdateAlumni {
        name: form.text("name").map(str::to_string),
        company: form.text("company").map(str::to_string),
        designation: form.text("designation").map(str::to_string),
        location: form.text("location").map(str::to_string),
    };

    let storage = &*state.storage;
    let new_image = match form.take_file("image") {
        Some(file) => Some(assets::upload_file(storage, &paths::alumni_images(), file).await?),
        None => None,
    };

    let alumni = match AlumniRepo::update(
        &state.pool,
        id,
        &input,
        new_image.as_ref().map(|s| s.secure_url.as_str()),
    )
    .await
    {
        Ok(Some(row)) => row,
        Ok(None) => {
            if let Some(stored) = &new_image {
                assets::discard_uploads(storage, std::slice::from_ref(stored)).await;
            }
            return Err(AppError::NotFound("Alumni not found".into()));
        }
        Err(err) => {
            if let Some(stored) = &new_image {
                assets::discard_uploads(storage, std::slice::from_ref(stored)).await;
            }
            return Err(err.into());
        }
    };

    if new_image.is_some() {
        assets::destroy_url_best_effort(storage, &paths::alumni_images(), &existing.image).await;
    }

    tracing::info!(id, "alumni entry updated");
    Ok(Success::ok()
        .message("Alumni updated successfully")
        .field("alumni", &alumni))
}

/// DELETE /api/alumni/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let existing = AlumniRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Alumni not found".into()))?;

    assets::destroy_url(&*state.storage, &paths::alumni_images(), &existing.image).await?;
    AlumniRepo::delete(&state.pool, id).await?;

    tracing::info!(id, "alumni entry deleted");
    Ok(Success::ok().message("Alumni deleted successfully"))
}
