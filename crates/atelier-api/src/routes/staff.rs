//! Route definitions for the `/staff` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::staff;
use crate::state::AppState;

/// Routes mounted at `/staff`.
///
/// ```text
/// POST   /new-staff    -> create (multipart)
/// GET    /all-staffs   -> list
/// GET    /{id}         -> get
/// PUT    /{id}         -> update (multipart)
/// DELETE /{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-staff", post(staff::create))
        .route("/all-staffs", get(staff::list))
        .route("/{id}", get(staff::get))
        .route("/{id}", put(staff::update))
        .route("/{id}", delete(staff::delete))
}
