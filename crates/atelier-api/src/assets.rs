//! Shared asset-protocol steps used by the upload-bearing handlers.
//!
//! The protocol is uniform across entities:
//! - create: upload first, insert second; a failed insert best-effort
//!   destroys the fresh uploads before the error surfaces
//! - replace: upload the new object, persist its URL, then destroy the
//!   superseded object best-effort
//! - delete: destroy the remote object(s) first and abort on failure, so a
//!   row is never removed while its asset may still exist
//!
//! Destroys address objects by re-deriving the provider public id from the
//! stored URL (see `atelier_storage::paths`). No step retries.

use atelier_storage::{paths, ObjectStorage, StorageError, StoredObject};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use futures::future::try_join_all;

use crate::error::AppError;
use crate::extract::UploadedFile;

/// Upload one file into `folder`.
pub async fn upload_file(
    storage: &dyn ObjectStorage,
    folder: &str,
    file: UploadedFile,
) -> Result<StoredObject, AppError> {
    let stored = storage
        .upload(folder, &file.file_name, &file.content_type, file.bytes)
        .await?;
    tracing::debug!(public_id = %stored.public_id, "asset uploaded");
    Ok(stored)
}

/// Upload several files into `folder` concurrently, awaited together.
///
/// The first failure aborts the whole batch; objects already uploaded by
/// sibling futures are left for the caller's compensation pass.
pub async fn upload_files(
    storage: &dyn ObjectStorage,
    folder: &str,
    files: Vec<UploadedFile>,
) -> Result<Vec<StoredObject>, AppError> {
    try_join_all(
        files
            .into_iter()
            .map(|file| upload_file(storage, folder, file)),
    )
    .await
}

/// Best-effort destroy of freshly uploaded objects after a failed insert.
///
/// Failures are logged and swallowed; the insert error that triggered the
/// compensation is the one the caller reports.
pub async fn discard_uploads(storage: &dyn ObjectStorage, uploaded: &[StoredObject]) {
    for object in uploaded {
        if let Err(err) = storage.destroy(&object.public_id).await {
            tracing::warn!(
                public_id = %object.public_id,
                error = %err,
                "failed to discard upload after aborted insert; object is orphaned"
            );
        }
    }
}

/// Destroy the object a stored URL points at. Used on the delete path,
/// where a failure must abort the request.
pub async fn destroy_url(
    storage: &dyn ObjectStorage,
    folder: &str,
    url: &str,
) -> Result<(), StorageError> {
    let public_id = paths::public_id_from_url(folder, url);
    storage.destroy(&public_id).await?;
    tracing::debug!(%public_id, "asset destroyed");
    Ok(())
}

/// Best-effort destroy of a superseded object after a replace.
///
/// The new object is already persisted, so a failed destroy only orphans
/// the old one; log it and move on.
pub async fn destroy_url_best_effort(storage: &dyn ObjectStorage, folder: &str, url: &str) {
    if let Err(err) = destroy_url(storage, folder, url).await {
        tracing::warn!(
            %url,
            error = %err,
            "failed to destroy superseded asset; object is orphaned"
        );
    }
}

/// Stream a rendered PNG as the response body.
pub fn png_response(png: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, "image/png")], png).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use atelier_storage::MemoryStorage;

    fn file(name: &str) -> UploadedFile {
        UploadedFile {
            file_name: name.to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![1, 2, 3],
        }
    }

    #[tokio::test]
    async fn upload_files_stores_every_file() {
        let storage = MemoryStorage::new();
        let stored = upload_files(&storage, "atelier_data/staff_images", vec![file("a.png"), file("b.png")])
            .await
            .unwrap();
        assert_eq!(stored.len(), 2);
        assert_eq!(storage.object_count(), 2);
    }

    #[tokio::test]
    async fn discard_uploads_removes_fresh_objects() {
        let storage = MemoryStorage::new();
        let stored = upload_files(&storage, "atelier_data/staff_images", vec![file("a.png")])
            .await
            .unwrap();
        discard_uploads(&storage, &stored).await;
        assert_eq!(storage.object_count(), 0);
    }

    #[tokio::test]
    async fn destroy_url_round_trips_a_stored_url() {
        let storage = MemoryStorage::new();
        let stored = upload_file(&storage, "atelier_data/alumni_images", file("me.png"))
            .await
            .unwrap();
        destroy_url(&storage, "atelier_data/alumni_images", &stored.secure_url)
            .await
            .unwrap();
        assert_eq!(storage.object_count(), 0);
    }

    #[tokio::test]
    async fn failed_destroy_on_delete_path_propagates() {
        let storage = MemoryStorage::failing();
        let stored = upload_file(&storage, "atelier_data/alumni_images", file("me.png"))
            .await
            .unwrap();
        let result = destroy_url(&storage, "atelier_data/alumni_images", &stored.secure_url).await;
        assert_matches!(result, Err(StorageError::Unavailable(_)));
        assert_eq!(storage.object_count(), 1);
    }
}
