//! Route definitions for the `/contact` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST   /new-contact    -> create
/// GET    /all-contact    -> list (newest first)
/// GET    /{id}           -> get
/// DELETE /{id}           -> delete
/// PUT    /approve/{id}   -> approve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-contact", post(contact::create))
        .route("/all-contact", get(contact::list))
        .route("/{id}", get(contact::get))
        .route("/{id}", delete(contact::delete))
        .route("/approve/{id}", put(contact::approve))
}
