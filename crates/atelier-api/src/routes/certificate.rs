//! Route definitions for the `/certificate` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::certificate;
use crate::state::AppState;

/// Routes mounted at `/certificate`.
///
/// ```text
/// GET /{enrollment_id}          -> primary certificate render
/// GET /second/{enrollment_id}   -> second-copy certificate render
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{enrollment_id}", get(certificate::primary))
        .route("/second/{enrollment_id}", get(certificate::second))
}
