//! Route definitions for the `/founder` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::founder;
use crate::state::AppState;

/// Routes mounted at `/founder`.
///
/// ```text
/// POST   /new-founder    -> create (multipart)
/// GET    /all-founders   -> list
/// GET    /{id}           -> get
/// PUT    /{id}           -> update (multipart)
/// DELETE /{id}           -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-founder", post(founder::create))
        .route("/all-founders", get(founder::list))
        .route("/{id}", get(founder::get))
        .route("/{id}", put(founder::update))
        .route("/{id}", delete(founder::delete))
}
