//! Handlers for the `/gallery` resource.
//!
//! Galleries hold lists of already-hosted image URLs (uploaded through
//! `/upload`). Each entry gets a generated id on insert so single images
//! can be removed later.

use atelier_core::types::DbId;
use atelier_db::models::gallery::{CreateGallery, GalleryImage, GalleryImageEntry};
use atelier_db::repositories::GalleryRepo;
use atelier_storage::paths;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use crate::assets;
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::Success;
use crate::state::AppState;

/// POST /api/gallery/new-gallery
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateGallery>,
) -> AppResult<Success> {
    input.validate()?;

    let images: Vec<GalleryImage> = input
        .images
        .into_iter()
        .map(|entry| GalleryImage {
            id: Uuid::new_v4(),
            img: entry.img,
        })
        .collect();

    let gallery = GalleryRepo::create(&state.pool, &images).await?;
    tracing::info!(id = gallery.id, images = images.len(), "gallery created");
    Ok(Success::created()
        .message("Gallery created successfully")
        .field("gallery", &gallery))
}

/// GET /api/gallery/all-gallery
///
/// Newest first, flattened to one entry per image across all galleries.
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let galleries = GalleryRepo::list_all(&state.pool).await?;

    let entries: Vec<GalleryImageEntry> = galleries
        .into_iter()
        .flat_map(|gallery| {
            let parent_id = gallery.id;
            gallery
                .images
                .0
                .into_iter()
                .map(move |image| GalleryImageEntry {
                    parent_id,
                    image_id: image.id,
                    img: image.img,
                })
        })
        .collect();

    if entries.is_empty() {
        return Err(AppError::NotFound("No gallery images found!".into()));
    }

    Ok(Success::ok().count(entries.len()).field("images", &entries))
}

/// DELETE /api/gallery/{gallery_id}/{image_id}
///
/// Removes one image entry: destroy the hosted object first (abort on
/// failure), then drop the entry from the row's list.
pub async fn delete_image(
    State(state): State<AppState>,
    Path((gallery_id, image_id)): Path<(DbId, Uuid)>,
) -> AppResult<Success> {
    let gallery = GalleryRepo::find_by_id(&state.pool, gallery_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Gallery not found".into()))?;

    let mut images = gallery.images.0;
    let position = images
        .iter()
        .position(|image| image.id == image_id)
        .ok_or_else(|| AppError::NotFound("Gallery image not found".into()))?;

    let removed = images.remove(position);
    assets::destroy_url(&*state.storage, &paths::gallery_uploads(), &removed.img).await?;

    GalleryRepo::update_images(&state.pool, gallery_id, &images)
        .await?
        .ok_or_else(|| AppError::NotFound("Gallery not found".into()))?;

    tracing::info!(gallery_id, %image_id, "gallery image deleted");
    Ok(Success::ok().message("Gallery image deleted successfully"))
}
