//! Root-level welcome and health routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// Routes mounted at the root, outside `/api`.
///
/// ```text
/// GET /        -> plain-text welcome
/// GET /health  -> liveness + database health
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::welcome))
        .route("/health", get(health::health))
}
