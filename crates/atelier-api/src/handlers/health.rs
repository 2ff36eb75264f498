//! Welcome and health endpoints.

use axum::extract::State;

use crate::error::AppResult;
use crate::response::Success;
use crate::state::AppState;

/// GET /
pub async fn welcome() -> &'static str {
    "Atelier School of Design API"
}

/// GET /health
///
/// Liveness plus a database round-trip.
pub async fn health(State(state): State<AppState>) -> AppResult<Success> {
    let database = match atelier_db::health_check(&state.pool).await {
        Ok(()) => "up",
        Err(err) => {
            tracing::error!(error = %err, "database health check failed");
            "down"
        }
    };
    Ok(Success::ok()
        .field("status", &"ok")
        .field("database", &database))
}
