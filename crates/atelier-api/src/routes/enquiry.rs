//! Route definitions for the `/enquiry` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::enquiry;
use crate::state::AppState;

/// Routes mounted at `/enquiry`.
///
/// ```text
/// POST   /new-enquiry    -> create
/// GET    /all-enquiry    -> list
/// GET    /{id}           -> get
/// DELETE /{id}           -> delete
/// PUT    /approve/{id}   -> approve + promote to admission
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-enquiry", post(enquiry::create))
        .route("/all-enquiry", get(enquiry::list))
        .route("/{id}", get(enquiry::get))
        .route("/{id}", delete(enquiry::delete))
        .route("/approve/{id}", put(enquiry::approve))
}
