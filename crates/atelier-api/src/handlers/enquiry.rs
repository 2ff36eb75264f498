//! Handlers for the `/enquiry` resource.

use atelier_core::types::DbId;
use atelier_db::models::enquiry::CreateEnquiry;
use atelier_db::repositories::EnquiryRepo;
use axum::extract::{Path, State};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::Success;
use crate::state::AppState;

/// POST /api/enquiry/new-enquiry
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateEnquiry>,
) -> AppResult<Success> {
    input.validate()?;
    let enquiry = EnquiryRepo::create(&state.pool, &input).await?;
    tracing::info!(id = enquiry.id, "enquiry created");
    Ok(Success::created()
        .message("Enquiry submitted successfully")
        .field("enquiry", &enquiry))
}

/// GET /api/enquiry/all-enquiry
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let enquiries = EnquiryRepo::list_all(&state.pool).await?;
    if enquiries.is_empty() {
        return Err(AppError::NotFound("No enquiries found!".into()));
    }
    Ok(Success::ok()
        .count(enquiries.len())
        .field("enquiries", &enquiries))
}

/// GET /api/enquiry/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let enquiry = EnquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Enquiry not found".into()))?;
    Ok(Success::ok().field("enquiry", &enquiry))
}

/// PUT /api/enquiry/approve/{id}
///
/// Approves the enquiry and copies its fields verbatim into a fresh,
/// unapproved admission row, in one transaction. A repeat approval is
/// non-mutating and creates no second admission.
pub async fn approve(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    if let Some((enquiry, admission)) = EnquiryRepo::approve_and_promote(&state.pool, id).await? {
        tracing::info!(id, admission_id = admission.id, "enquiry approved and promoted");
        return Ok(Success::ok()
            .message("Enquiry approved and admission created")
            .field("enquiry", &enquiry)
            .field("admission", &admission));
    }

    let enquiry = EnquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Enquiry not found".into()))?;
    Ok(Success::ok()
        .message("Enquiry already approved")
        .field("enquiry", &enquiry))
}

/// DELETE /api/enquiry/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    if !EnquiryRepo::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Enquiry not found".into()));
    }
    tracing::info!(id, "enquiry deleted");
    Ok(Success::ok().message("Enquiry deleted successfully"))
}
