//! Handlers for the `/founder` resource.

use atelier_core::types::DbId;
use atelier_db::models::founder::{CreateFounder, UpdateFounder};
use atelier_db::repositories::FounderRepo;
use atelier_storage::paths;
use axum::extract::{Path, State};
use validator::Validate;

use crate::assets;
use crate::error::{AppError, AppResult};
use crate::extract::FormData;
use crate::response::Success;
use crate::state::AppState;

/// POST /api/founder/new-founder
pub async fn create(State(state): State<AppState>, mut form: FormData) -> AppResult<Success> {
    let input = CreateFounder {
        name: form.text_or_default("name"),
        position: form.text_or_default("position"),
    };
    input.validate()?;

    let Some(image) = form.take_file("image") else {
        return Err(AppError::BadRequest("Image is required!".into()));
    };

    let storage = &*state.storage;
    let stored = assets::upload_file(storage, &paths::founder_images(), image).await?;

    let founder = match FounderRepo::create(&state.pool, &input, &stored.secure_url).await {
        Ok(row) => row,
        Err(err) => {
            assets::discard_uploads(storage, std::slice::from_ref(&stored)).await;
            return Err(err.into());
        }
    };

    tracing::info!(id = founder.id, "founder created");
    Ok(Success::created()
        .message("Founder created successfully")
        .field("founder", &founder))
}

/// GET /api/founder/all-founders
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let founders = FounderRepo::list_all(&state.pool).await?;
    Ok(Success::ok()
        .count(founders.len())
        .field("founders", &founders))
}

/// GET /api/founder/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let founder = FounderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Founder not found".into()))?;
    Ok(Success::ok().field("founder", &founder))
}

/// PUT /api/founder/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut form: FormData,
) -> AppResult<Success> {
    let existing = FounderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Founder not found".into()))?;

    let input = UpdateFounder {
        name: form.text("name").map(str::to_string),
        position: form.text("position").map(str::to_string),
    };

    let storage = &*state.storage;
    let new_image = match form.take_file("image") {
        Some(file) => Some(assets::upload_file(storage, &paths::founder_images(), file).await?),
        None => None,
    };

    let founder = match FounderRepo::update(
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
            return Err(AppError::NotFound("Founder not found".into()));
        }
        Err(err) => {
            if let Some(stored) = &new_image {
                assets::discard_uploads(storage, std::slice::from_ref(stored)).await;
            }
            return Err(err.into());
        }
    };

    if new_image.is_some() {
        assets::destroy_url_best_effort(storage, &paths::founder_images(), &existing.image).await;
    }

    tracing::info!(id, "founder updated");
    Ok(Success::ok()
        .message("Founder updated successfully")
        .field("founder", &founder))
}

/// DELETE /api/founder/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let existing = FounderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Founder not found".into()))?;

    assets::destroy_url(&*state.storage, &paths::founder_images(), &existing.image).await?;
    FounderRepo::delete(&state.pool, id).await?;

    tracing::info!(id, "founder deleted");
    Ok(Success::ok().message("Founder deleted successfully"))
}
