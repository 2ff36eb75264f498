//! Route definitions for the `/admission` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::admission;
use crate::state::AppState;

/// Routes mounted at `/admission`.
///
/// ```text
/// POST   /new-admission            -> create (multipart)
/// GET    /all-admission            -> list
/// GET    /{id}                     -> get
/// DELETE /{id}                     -> delete
/// PUT    /admission-approve/{id}   -> approve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-admission", post(admission::create))
        .route("/all-admission", get(admission::list))
        .route("/{id}", get(admission::get))
        .route("/{id}", delete(admission::delete))
        .route("/admission-approve/{id}", put(admission::approve))
}
