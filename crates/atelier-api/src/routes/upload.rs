//! Route definition for the standalone `/upload` endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::upload;
use crate::state::AppState;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST / -> upload a single image (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(upload::upload_image))
}
