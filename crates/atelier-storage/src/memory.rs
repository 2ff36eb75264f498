//! In-process object storage used by tests and storage-less development.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::{paths, ObjectStorage, StoredObject};

/// Base URL for the fake public URLs handed out by [`MemoryStorage`].
const PUBLIC_BASE: &str = "https://storage.test";

/// [`ObjectStorage`] backed by an in-process map.
///
/// Objects live for the lifetime of the instance. [`MemoryStorage::failing`]
/// builds an instance whose destroy operations always fail, for exercising
/// the delete-abort path.
#[derive(Default)]
pub struct MemoryStorage {
    objects: Mutex<HashMap<String, Vec<u8>>>,
    fail_destroy: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A storage whose destroy operations report the store as unreachable.
    pub fn failing() -> Self {
        Self {
            objects: Mutex::new(HashMap::new()),
            fail_destroy: true,
        }
    }

    /// Number of stored objects.
    pub fn object_count(&self) -> usize {
        self.objects.lock().expect("storage lock poisoned").len()
    }

    /// Whether an object with the given public id is stored.
    pub fn contains(&self, public_id: &str) -> bool {
        let dotted = format!("{public_id}.");
        self.objects
            .lock()
            .expect("storage lock poisoned")
            .keys()
            .any(|k| k == public_id || k.starts_with(&dotted))
    }
}

#[async_trait]
impl ObjectStorage for MemoryStorage {
    async fn upload(
        &self,
        folder: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError> {
        let (key, public_id) = paths::new_object_key(folder, file_name, content_type);
        self.objects
            .lock()
            .expect("storage lock poisoned")
            .insert(key.clone(), bytes);
        Ok(StoredObject {
            secure_url: format!("{PUBLIC_BASE}/{key}"),
            public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), StorageError> {
        if self.fail_destroy {
            return Err(StorageError::Unavailable(
                "memory storage configured to fail destroys".to_string(),
            ));
        }
        let dotted = format!("{public_id}.");
        self.objects
            .lock()
            .expect("storage lock poisoned")
            .retain(|k, _| k != public_id && !k.starts_with(&dotted));
        Ok(())
    }

    async fn destroy_prefix(&self, prefix: &str) -> Result<u64, StorageError> {
        if self.fail_destroy {
            return Err(StorageError::Unavailable(
                "memory storage configured to fail destroys".to_string(),
            ));
        }
        let mut objects = self.objects.lock().expect("storage lock poisoned");
        let before = objects.len();
        objects.retain(|k, _| !k.starts_with(prefix));
        Ok((before - objects.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_then_destroy_round_trip() {
        let storage = MemoryStorage::new();
        let stored = storage
            .upload("atelier_data/staff_images", "me.jpg", "image/jpeg", vec![1, 2, 3])
            .await
            .unwrap();

        assert!(stored.secure_url.starts_with("https://storage.test/"));
        assert!(storage.contains(&stored.public_id));

        // Destroy via the public id parsed back out of the URL, the same way
        // handlers do it.
        let public_id =
            paths::public_id_from_url("atelier_data/staff_images", &stored.secure_url);
        assert_eq!(public_id, stored.public_id);

        storage.destroy(&public_id).await.unwrap();
        assert!(!storage.contains(&stored.public_id));
        assert_eq!(storage.object_count(), 0);
    }

    #[tokio::test]
    async fn destroy_prefix_removes_only_the_subtree() {
        let storage = MemoryStorage::new();
        storage
            .upload("atelier_data/gallery_folder/A/images", "1.png", "image/png", vec![1])
            .await
            .unwrap();
        storage
            .upload("atelier_data/gallery_folder/A", "cover.png", "image/png", vec![2])
            .await
            .unwrap();
        storage
            .upload("atelier_data/gallery_folder/B/images", "2.png", "image/png", vec![3])
            .await
            .unwrap();

        let removed = storage
            .destroy_prefix("atelier_data/gallery_folder/A")
            .await
            .unwrap();
        assert_eq!(removed, 2);
        assert_eq!(storage.object_count(), 1);
    }

    #[tokio::test]
    async fn failing_storage_rejects_destroys_but_accepts_uploads() {
        let storage = MemoryStorage::failing();
        let stored = storage
            .upload("atelier_data/staff_images", "a.png", "image/png", vec![1])
            .await
            .unwrap();

        let err = storage.destroy(&stored.public_id).await.unwrap_err();
        assert!(matches!(err, StorageError::Unavailable(_)));
        assert!(storage.contains(&stored.public_id));
    }
}
