//! Route definitions for the `/gallery` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes mounted at `/gallery`.
///
/// ```text
/// POST   /new-gallery                 -> create
/// GET    /all-gallery                 -> flattened image list
/// DELETE /{gallery_id}/{image_id}     -> delete one image entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/new-gallery", post(gallery::create))
        .route("/all-gallery", get(gallery::list))
        .route("/{gallery_id}/{image_id}", delete(gallery::delete_image))
}
