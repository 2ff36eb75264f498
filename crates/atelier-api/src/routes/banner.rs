//! Route definitions for the `/banner` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::banner;
use crate::state::AppState;

/// Routes mounted at `/banner`.
///
/// ```text
/// POST /                        -> create (multipart)
/// GET  /all-banners             -> list
/// GET  /{banner_type}/{id}      -> get
/// PUT  /{banner_type}/{id}      -> replace image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(banner::create))
        .route("/all-banners", get(banner::list))
        .route("/{banner_type}/{id}", get(banner::get))
        .route("/{banner_type}/{id}", put(banner::update))
}
