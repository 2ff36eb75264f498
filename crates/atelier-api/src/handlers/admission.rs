//! Handlers for the `/admission` resource.

use atelier_core::types::DbId;
use atelier_db::models::admission::CreateAdmission;
use atelier_db::repositories::AdmissionRepo;
use atelier_mailer::EmailJob;
use atelier_storage::paths;
use axum::extract::{Path, State};
use validator::Validate;

use crate::assets;
use crate::error::{AppError, AppResult};
use crate::extract::FormData;
use crate::response::Success;
use crate::state::AppState;

/// POST /api/admission/new-admission
///
/// Multipart: text fields plus an optional `photo` file and repeated
/// `document` files. Files upload before the insert; a failed insert
/// discards the fresh uploads.
pub async fn create(State(state): State<AppState>, mut form: FormData) -> AppResult<Success> {
    let input = CreateAdmission {
        name: form.text_or_default("name"),
        email: form.text_or_default("email"),
        phone_number: form.text_or_default("phone_number"),
        profile: form.text_or_default("profile"),
        select_course: form.text_or_default("select_course"),
        select_state: form.text_or_default("select_state"),
        district: form.text_or_default("district"),
        city: form.text_or_default("city"),
        message: form.text_or_default("message"),
    };
    input.validate()?;

    let storage = &*state.storage;
    let mut uploaded = Vec::new();

    let photo = match form.take_file("photo") {
        Some(file) => {
            let stored = assets::upload_file(storage, &paths::admission_photos(), file).await?;
            let url = stored.secure_url.clone();
            uploaded.push(stored);
            Some(url)
        }
        None => None,
    };

    let document_files = form.take_files("document");
    let documents = match assets::upload_files(
        storage,
        &paths::admission_documents(),
        document_files,
    )
    .await
    {
        Ok(stored) => {
            let urls: Vec<String> = stored.iter().map(|s| s.secure_url.clone()).collect();
            uploaded.extend(stored);
            urls
        }
        Err(err) => {
            assets::discard_uploads(storage, &uploaded).await;
            return Err(err);
        }
    };

    let admission =
        match AdmissionRepo::create(&state.pool, &input, photo.as_deref(), &documents).await {
            Ok(row) => row,
            Err(err) => {
                assets::discard_uploads(storage, &uploaded).await;
                return Err(err.into());
            }
        };

    tracing::info!(id = admission.id, "admission form created");
    Ok(Success::created()
        .message("Admission form submitted successfully")
        .field("admission", &admission))
}

/// GET /api/admission/all-admission
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let admissions = AdmissionRepo::list_all(&state.pool).await?;
    if admissions.is_empty() {
        return Err(AppError::NotFound("No admission forms found!".into()));
    }
    Ok(Success::ok()
        .count(admissions.len())
        .field("admissions", &admissions))
}

/// GET /api/admission/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let admission = AdmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Admission form not found".into()))?;
    Ok(Success::ok().field("admission", &admission))
}

/// PUT /api/admission/admission-approve/{id}
///
/// One-way `pending -> approved` gate. A repeat approval is non-mutating
/// and reports "already approved". A successful transition queues the
/// notification email; delivery never affects the state change.
pub async fn approve(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    if let Some(admission) = AdmissionRepo::approve(&state.pool, id).await? {
        let message = if state.mailer.is_enabled() {
            let _ = state.mailer.enqueue(EmailJob::AdmissionApproved {
                to: admission.email.clone(),
                name: admission.name.clone(),
                course: admission.select_course.clone(),
                state: admission.select_state.clone(),
                district: admission.district.clone(),
                city: admission.city.clone(),
            });
            "Admission approved; notification email queued"
        } else {
            "Admission approved; email notifications are not configured"
        };
        tracing::info!(id, "admission approved");
        return Ok(Success::ok().message(message).field("admission", &admission));
    }

    // Nothing transitioned: the row is either absent or already approved.
    let admission = AdmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Admission form not found".into()))?;
    Ok(Success::ok()
        .message("Admission already approved")
        .field("admission", &admission))
}

/// DELETE /api/admission/{id}
///
/// Destroys the remote photo and document assets first; a failed destroy
/// aborts the request and leaves the row in place.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let admission = AdmissionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Admission form not found".into()))?;

    let storage = &*state.storage;
    if let Some(photo) = &admission.photo {
        assets::destroy_url(storage, &paths::admission_photos(), photo).await?;
    }
    for document in &admission.documents {
        assets::destroy_url(storage, &paths::admission_documents(), document).await?;
    }

    AdmissionRepo::delete(&state.pool, id).await?;
    tracing::info!(id, "admission form deleted");
    Ok(Success::ok().message("Admission form deleted successfully"))
}
