//! Handlers for the `/staff` resource.

use atelier_core::types::DbId;
use atelier_db::models::staff::{CreateStaff, UpdateStaff};
use atelier_db::repositories::StaffRepo;
use atelier_storage::paths;
use axum::extract::{Path, State};
use validator::Validate;

use crate::assets;
use crate::error::{AppError, AppResult};
use crate::extract::FormData;
use crate::response::Success;
use crate::state::AppState;

/// POST /api/staff/new-staff
pub async fn create(State(state): State<AppState>, mut form: FormData) -> AppResult<Success> {
    let input = CreateStaff {
        name: form.text_or_default("name"),
        position: form.text_or_default("position"),
        location: form.text_or_default("location"),
    };
    input.validate()?;

    let Some(image) = form.take_file("image") else {
        return Err(AppError::BadRequest("Image is required!".into()));
    };

    let storage = &*state.storage;
    let stored = assets::upload_file(storage, &paths::staff_images(), image).await?;

    let staff = match StaffRepo::create(&state.pool, &input, &stored.secure_url).await {
        Ok(row) => row,
        Err(err) => {
            assets::discard_uploads(storage, std::slice::from_ref(&stored)).await;
            return Err(err.into());
        }
    };

    tracing::info!(id = staff.id, "staff member created");
    Ok(Success::created()
        .message("Staff member created successfully")
        .field("staff", &staff))
}

/// GET /api/staff/all-staffs
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let staffs = StaffRepo::list_all(&state.pool).await?;
    Ok(Success::ok().count(staffs.len()).field("staffs", &staffs))
}

/// GET /api/staff/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let staff = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Staff member not found".into()))?;
    Ok(Success::ok().field("staff", &staff))
}

/// PUT /api/staff/{id}
///
/// Merges provided text fields; a new `image` file replaces the stored
/// asset (upload new, persist, destroy old best-effort).
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut form: FormData,
) -> AppResult<Success> {
    let existing = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Staff member not found".into()))?;

    let input = UpdateStaff {
        name: form.text("name").map(str::to_string),
        position: form.text("position").map(str::to_string),
        location: form.text("location").map(str::to_string),
    };

    let storage = &*state.storage;
    let new_image = match form.take_file("image") {
        Some(file) => Some(assets::upload_file(storage, &paths::staff_images(), file).await?),
        None => None,
    };

    let staff = match StaffRepo::update(
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
            return Err(AppError::NotFound("Staff member not found".into()));
        }
        Err(err) => {
            if let Some(stored) = &new_image {
                assets::discard_uploads(storage, std::slice::from_ref(stored)).await;
            }
            return Err(err.into());
        }
    };

    if new_image.is_some() {
        assets::destroy_url_best_effort(storage, &paths::staff_images(), &existing.image).await;
    }

    tracing::info!(id, "staff member updated");
    Ok(Success::ok()
        .message("Staff member updated successfully")
        .field("staff", &staff))
}

/// DELETE /api/staff/{id}
///
/// Destroys the remote image first; a failed destroy aborts and leaves
/// the row in place.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let existing = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Staff member not found".into()))?;

    assets::destroy_url(&*state.storage, &paths::staff_images(), &existing.image).await?;
    StaffRepo::delete(&state.pool, id).await?;

    tracing::info!(id, "staff member deleted");
    Ok(Success::ok().message("Staff member deleted successfully"))
}
