//! Handler for the standalone `/upload` endpoint.

use atelier_storage::paths;
use axum::extract::State;

use crate::assets;
use crate::error::{AppError, AppResult};
use crate::extract::FormData;
use crate::response::Success;
use crate::state::AppState;

/// POST /api/upload
///
/// Uploads a single `image` to the shared gallery folder and returns its
/// public URL. No database row is written; galleries reference the URL.
pub async fn upload_image(State(state): State<AppState>, mut form: FormData) -> AppResult<Success> {
    let Some(image) = form.take_file("image") else {
        return Err(AppError::BadRequest("Image is required!".into()));
    };

    let stored = assets::upload_file(&*state.storage, &paths::gallery_uploads(), image).await?;

    Ok(Success::created()
        .message("Image uploaded successfully")
        .field("url", &stored.secure_url))
}
