//! Handlers for the `/gallery-folder` resource.
//!
//! A folder owns a cover image and a set of member images, all stored
//! under a per-title prefix so the whole subtree can be destroyed when
//! the folder goes away. Member entries keep their storage public id,
//! which spares the URL re-parsing the other entities rely on.

use atelier_core::error::CoreError;
use atelier_core::types::DbId;
use atelier_db::models::gallery_folder::FolderImage;
use atelier_db::repositories::GalleryFolderRepo;
use atelier_storage::paths;
use axum::extract::{Path, State};

use crate::assets;
use crate::error::{is_unique_violation, AppError, AppResult};
use crate::extract::FormData;
use crate::response::Success;
use crate::state::AppState;

/// POST /api/gallery-folder/new-gallery-folder
///
/// Multipart `folder_title` + single `folderImage` + repeated
/// `galleryImages`. Duplicate titles conflict. Member images upload
/// concurrently, awaited together.
pub async fn create(State(state): State<AppState>, mut form: FormData) -> AppResult<Success> {
    let folder_title = form.text_or_default("folder_title");
    if folder_title.trim().is_empty() {
        return Err(AppError::BadRequest("Folder title is required!".into()));
    }
    let Some(cover) = form.take_file("folderImage") else {
        return Err(AppError::BadRequest("Folder image is required!".into()));
    };
    let member_files = form.take_files("galleryImages");
    if member_files.is_empty() {
        return Err(AppError::BadRequest(
            "At least one gallery image is required!".into(),
        ));
    }

    if GalleryFolderRepo::find_by_title(&state.pool, &folder_title)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Gallery folder already exists with this title!".into(),
        )));
    }

    let storage = &*state.storage;
    let mut uploaded = Vec::new();

    let cover_stored =
        assets::upload_file(storage, &paths::gallery_folder(&folder_title), cover).await?;
    uploaded.push(cover_stored.clone());

    let members = match assets::upload_files(
        storage,
        &paths::gallery_folder_images(&folder_title),
        member_files,
    )
    .await
    {
        Ok(stored) => {
            let entries: Vec<FolderImage> = stored
                .iter()
                .map(|s| FolderImage {
                    image_url: s.secure_url.clone(),
                    public_id: s.public_id.clone(),
                })
                .collect();
            uploaded.extend(stored);
            entries
        }
        Err(err) => {
            assets::discard_uploads(storage, &uploaded).await;
            return Err(err);
        }
    };

    let folder = match GalleryFolderRepo::create(
        &state.pool,
        &folder_title,
        &cover_stored.secure_url,
        &members,
    )
    .await
    {
        Ok(row) => row,
        Err(err) => {
            assets::discard_uploads(storage, &uploaded).await;
            if is_unique_violation(&err, "uq_gallery_folders_folder_title") {
                return Err(AppError::Core(CoreError::Conflict(
                    "Gallery folder already exists with this title!".into(),
                )));
            }
            return Err(err.into());
        }
    };

    tracing::info!(id = folder.id, title = %folder.folder_title, "gallery folder created");
    Ok(Success::created()
        .message("Gallery folder created successfully")
        .field("gallery_folder", &folder))
}

/// GET /api/gallery-folder/all-gallery-folders
pub async fn list(State(state): State<AppState>) -> AppResult<Success> {
    let folders = GalleryFolderRepo::list_all(&state.pool).await?;
    if folders.is_empty() {
        return Err(AppError::NotFound("No gallery folders found!".into()));
    }
    Ok(Success::ok()
        .count(folders.len())
        .field("gallery_folders", &folders))
}

/// GET /api/gallery-folder/{id}
pub async fn get(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let folder = GalleryFolderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Gallery folder not found".into()))?;
    Ok(Success::ok().field("gallery_folder", &folder))
}

/// PUT /api/gallery-folder/{id}
///
/// `imagesToRemove` (repeated text, stored URLs) destroys those members;
/// new `galleryImages` files upload and append. Either part may be absent.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    mut form: FormData,
) -> AppResult<Success> {
    let existing = GalleryFolderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Gallery folder not found".into()))?;

    let storage = &*state.storage;
    let mut images = existing.gallery_images.0.clone();

    // Destroy-then-drop for each named URL; a failed destroy aborts so the
    // entry list never references a destroyed object.
    for url in form.texts("imagesToRemove") {
        let Some(position) = images.iter().position(|image| &image.image_url == url) else {
            continue;
        };
        storage.destroy(&images[position].public_id).await?;
        images.remove(position);
    }

    let new_files = form.take_files("galleryImages");
    let uploaded = assets::upload_files(
        storage,
        &paths::gallery_folder_images(&existing.folder_title),
        new_files,
    )
    .await?;
    images.extend(uploaded.iter().map(|s| FolderImage {
        image_url: s.secure_url.clone(),
        public_id: s.public_id.clone(),
    }));

    let folder = match GalleryFolderRepo::update_images(&state.pool, id, &images).await {
        Ok(Some(row)) => row,
        Ok(None) => {
            assets::discard_uploads(storage, &uploaded).await;
            return Err(AppError::NotFound("Gallery folder not found".into()));
        }
        Err(err) => {
            assets::discard_uploads(storage, &uploaded).await;
            return Err(err.into());
        }
    };

    tracing::info!(id, "gallery folder updated");
    Ok(Success::ok()
        .message("Gallery folder updated successfully")
        .field("gallery_folder", &folder))
}

/// DELETE /api/gallery-folder/{id}
///
/// Destroys every object under the folder's storage prefix (cover and
/// members), then removes the row. A failed destroy aborts.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Success> {
    let existing = GalleryFolderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Gallery folder not found".into()))?;

    let removed = state
        .storage
        .destroy_prefix(&paths::gallery_folder(&existing.folder_title))
        .await?;
    GalleryFolderRepo::delete(&state.pool, id).await?;

    tracing::info!(id, removed, "gallery folder deleted");
    Ok(Success::ok().message("Gallery folder deleted successfully"))
}
