//! Route definitions for the `/gallery-folder` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::gallery_folder;
use crate::state::AppState;

/// Routes mounted at `/gallery-folder`.
///
/// ```text
/// POST   /new-gallery-folder     -> create (multipart)
/// GET    /all-gallery-folders    -> list (newest first)
/// GET    /{id}                   -> get
/// PUT    /{id}                   -> update (multipart)
/// DELETE /{id}                   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-gallery-folder", post(gallery_folder::create))
        .route("/all-gallery-folders", get(gallery_folder::list))
        .route("/{id}", get(gallery_folder::get))
        .route("/{id}", put(gallery_folder::update))
        .route("/{id}", delete(gallery_folder::delete))
}
