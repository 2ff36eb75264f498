//! Route definitions for the `/alumni` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::alumni;
use crate::state::AppState;

/// Routes mounted at `/alumni`.
///
/// ```text
/// POST   /new-alumni     -> create (multipart)
/// GET    /all-alumnies   -> list
/// GET    /{id}           -> get
/// PUT    /{id}           -> update (multipart)
/// DELETE /{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-alumni", post(alumni::create))
        .route("/all-alumnies", get(alumni::list))
        .route("/{id}", get(alumni::get))
        .route("/{id}", put(alumni::update))
        .route("/{id}", delete(alumni::delete))
}
