//! Route definitions for the `/course` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::course;
use crate::state::AppState;

/// Routes mounted at `/course`.
///
/// ```text
/// POST   /new-course    -> create (multipart)
/// GET    /all-course    -> list (oldest first)
/// GET    /{id}          -> get
/// PUT    /{id}          -> update (multipart)
/// DELETE /{id}          -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-course", post(course::create))
        .route("/all-course", get(course::list))
        .route("/{id}", get(course::get))
        .route("/{id}", put(course::update))
        .route("/{id}", delete(course::delete))
}
