use std::sync::Arc;

use atelier_mailer::Mailer;
use atelier_render::Renderer;
use atelier_storage::ObjectStorage;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: atelier_db::DbPool,
    /// Server configuration (JWT secret, CORS, timeouts).
    pub config: Arc<ServerConfig>,
    /// Remote object storage for uploaded site assets.
    pub storage: Arc<dyn ObjectStorage>,
    /// Handle to the background email delivery worker.
    pub mailer: Mailer,
    /// Certificate and marksheet raster renderer.
    pub renderer: Arc<Renderer>,
}
