//! Remote object storage for uploaded site assets.
//!
//! All uploaded binaries (banners, profile images, gallery photos, admission
//! documents) live on an S3-compatible object store, grouped under the folder
//! paths in [`paths`]. Handlers talk to the [`ObjectStorage`] trait;
//! [`S3Storage`] is the production provider and [`MemoryStorage`] backs tests
//! and storage-less local development.

pub mod error;
pub mod memory;
pub mod paths;
pub mod s3;

pub use error::StorageError;
pub use memory::MemoryStorage;
pub use s3::{S3Storage, StorageConfig};

use async_trait::async_trait;

/// The provider-side identity and public URL of a stored object.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Provider id used for later destroys (object key without extension).
    pub public_id: String,
    /// Publicly accessible HTTPS URL, stored verbatim on database rows.
    pub secure_url: String,
}

/// Provider-agnostic object storage operations.
///
/// Uploads generate a fresh object key under `folder` (see
/// [`paths::new_object_key`]); destroys address objects by the public id
/// derived from a stored URL via [`paths::public_id_from_url`].
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `bytes` under a newly generated key inside `folder`.
    async fn upload(
        &self,
        folder: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError>;

    /// Remove the object identified by `public_id`. Destroying an id with no
    /// matching object is not an error.
    async fn destroy(&self, public_id: &str) -> Result<(), StorageError>;

    /// Remove every object whose key starts with `prefix`, returning the
    /// number of objects removed.
    async fn destroy_prefix(&self, prefix: &str) -> Result<u64, StorageError>;
}
