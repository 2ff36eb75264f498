//! Route definitions for the `/marksheet` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::marksheet;
use crate::state::AppState;

/// Routes mounted at `/marksheet`.
///
/// ```text
/// POST   /new-marksheet    -> create (grades computed server-side)
/// GET    /all-marksheets   -> list with joined students
/// GET    /{id}             -> get with joined student
/// PUT    /{id}             -> replace subjects, recompute grades
/// DELETE /{id}             -> delete
/// GET    /{id}/print       -> render and stream the PNG
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-marksheet", post(marksheet::create))
        .route("/all-marksheets", get(marksheet::list))
        .route("/{id}", get(marksheet::get))
        .route("/{id}", put(marksheet::update))
        .route("/{id}", delete(marksheet::delete))
        .route("/{id}/print", get(marksheet::print))
}
