//! Route definitions for the `/exam` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::exam;
use crate::state::AppState;

/// Routes mounted at `/exam`.
///
/// ```text
/// POST   /new-exam          -> create
/// GET    /all-exams         -> list (newest first)
/// GET    /search?keyword=   -> search by name / code
/// GET    /{id}              -> get
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-exam", post(exam::create))
        .route("/all-exams", get(exam::list))
        .route("/search", get(exam::search))
        .route("/{id}", get(exam::get))
        .route("/{id}", put(exam::update))
        .route("/{id}", delete(exam::delete))
}
