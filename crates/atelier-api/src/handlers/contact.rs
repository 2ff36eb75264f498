//! Handlers for the `/contact` resource.

use atelier_core::types::DbId;
use atelier_db::models::contact::CreateContact;
use atelier_db::repositories::ContactRepo;
use atelier_mailer::EmailJob;
use axum::extract::{Path, State};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::Success;
use crate::state::AppState;

/// POST /api/contact/new-contact
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateContact>,
) -> AppResult<Success> {
    input.validate()?;
    let contact = ContactRepo::create(&state.pool, &input).await?;
    tracing::info!(id = contact.id, "contact message created");
    Ok(Success::created()
        .message("Contact message submitted successfully")
        .field("contact", &contact))
}

/// GET /api/contact/all-contact
///
/// Newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let contacts = ContactRepo::list_all(&state.pool).await?;
    if contacts.is_empty() {
        return Err(AppError::NotFound("No contact messages found!".into()));
    }
    Ok(Success::ok()
        .count(contacts.len())
        .field("contacts", &contacts))
}

/// GET /api/contact/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact message not found".into()))?;
    Ok(Success::ok().field("contact", &contact))
}

/// PUT /api/contact/approve/{id}
///
/// One-way approval gate; a repeat approval is non-mutating. A successful
/// transition queues the acknowledgement email.
pub async fn approve(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    if let Some(contact) = ContactRepo::approve(&state.pool, id).await? {
        let message = if state.mailer.is_enabled() {
            let _ = state.mailer.enqueue(EmailJob::ContactApproved {
                to: contact.email.clone(),
                name: contact.name.clone(),
            });
            "Contact approved; notification email queued"
        } else {
            "Contact approved; email notifications are not configured"
        };
        tracing::info!(id, "contact approved");
        return Ok(Success::ok().message(message).field("contact", &contact));
    }

    let contact = ContactRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact message not found".into()))?;
    Ok(Success::ok()
        .message("Contact already approved")
        .field("contact", &contact))
}

/// DELETE /api/contact/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Contact message not found".into()));
    }
    tracing::info!(id, "contact message deleted");
    Ok(Success::ok().message("Contact message deleted successfully"))
}
