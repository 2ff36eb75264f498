//! Route definitions for the `/student` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/student`.
///
/// ```text
/// POST   /new-student       -> create
/// GET    /all-students      -> list
/// GET    /search?keyword=   -> search by name / father name
/// GET    /{id}              -> get
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-student", post(student::create))
        .route("/all-students", get(student::list))
        .route("/search", get(student::search))
        .route("/{id}", get(student::get))
        .route("/{id}", put(student::update))
        .route("/{id}", delete(student::delete))
}
