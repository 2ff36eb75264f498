//! S3-compatible object storage provider.
//!
//! Works against AWS S3 proper or any S3-compatible endpoint (MinIO, R2)
//! via `STORAGE_ENDPOINT`. Credentials fall back to the standard AWS
//! provider chain when not set explicitly.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::{Delete, ObjectIdentifier};
use aws_sdk_s3::Client;

use crate::error::{classify_sdk_error, StorageError};
use crate::{paths, ObjectStorage, StoredObject};

/// Default signing region when `STORAGE_REGION` is not set.
const DEFAULT_REGION: &str = "us-east-1";

/// Object storage configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Bucket receiving all uploads.
    pub bucket: String,
    /// Signing region (defaults to `us-east-1`).
    pub region: String,
    /// Custom endpoint URL for S3-compatible stores; `None` means AWS S3.
    pub endpoint: Option<String>,
    /// Explicit access key; falls back to the ambient AWS credential chain.
    pub access_key_id: Option<String>,
    /// Explicit secret key, paired with `access_key_id`.
    pub secret_access_key: Option<String>,
    /// Base URL for public object URLs; derived from the endpoint or bucket
    /// when not set.
    pub public_url: Option<String>,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `STORAGE_BUCKET` is not set, signalling that remote
    /// storage is not configured.
    ///
    /// | Variable                    | Required | Default        |
    /// |-----------------------------|----------|----------------|
    /// | `STORAGE_BUCKET`            | yes      | --             |
    /// | `STORAGE_REGION`            | no       | `us-east-1`    |
    /// | `STORAGE_ENDPOINT`          | no       | AWS S3         |
    /// | `STORAGE_ACCESS_KEY_ID`     | no       | provider chain |
    /// | `STORAGE_SECRET_ACCESS_KEY` | no       | provider chain |
    /// | `STORAGE_PUBLIC_URL`        | no       | derived        |
    pub fn from_env() -> Option<Self> {
        let bucket = std::env::var("STORAGE_BUCKET").ok()?;
        Some(Self {
            bucket,
            region: std::env::var("STORAGE_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string()),
            endpoint: std::env::var("STORAGE_ENDPOINT").ok(),
            access_key_id: std::env::var("STORAGE_ACCESS_KEY_ID").ok(),
            secret_access_key: std::env::var("STORAGE_SECRET_ACCESS_KEY").ok(),
            public_url: std::env::var("STORAGE_PUBLIC_URL").ok(),
        })
    }

    /// Base URL under which uploaded objects are publicly reachable.
    pub fn public_base(&self) -> String {
        if let Some(url) = &self.public_url {
            return url.trim_end_matches('/').to_string();
        }
        if let Some(endpoint) = &self.endpoint {
            return format!("{}/{}", endpoint.trim_end_matches('/'), self.bucket);
        }
        format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region)
    }
}

/// Production [`ObjectStorage`] backed by an S3 bucket.
pub struct S3Storage {
    client: Client,
    bucket: String,
    public_base: String,
}

impl S3Storage {
    /// Build an S3 client from the given configuration.
    pub async fn connect(config: &StorageConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if let (Some(key), Some(secret)) = (&config.access_key_id, &config.secret_access_key) {
            loader = loader.credentials_provider(Credentials::new(
                key.clone(),
                secret.clone(),
                None,
                None,
                "atelier-env",
            ));
        }

        let shared = loader.load().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if let Some(endpoint) = &config.endpoint {
            // Path-style addressing; S3-compatible stores rarely support
            // virtual-hosted buckets.
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            public_base: config.public_base(),
        }
    }

    /// List every key under `prefix`, following continuation tokens.
    async fn list_keys(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        let mut continuation: Option<String> = None;

        loop {
            let output = self
                .client
                .list_objects_v2()
                .bucket(&self.bucket)
                .prefix(prefix)
                .set_continuation_token(continuation.take())
                .send()
                .await
                .map_err(|e| classify_sdk_error("list objects", e))?;

            keys.extend(
                output
                    .contents()
                    .iter()
                    .filter_map(|o| o.key().map(str::to_string)),
            );

            match output.next_continuation_token() {
                Some(token) => continuation = Some(token.to_string()),
                None => break,
            }
        }

        Ok(keys)
    }

    /// Batch-delete the given keys.
    async fn delete_keys(&self, keys: Vec<String>) -> Result<u64, StorageError> {
        if keys.is_empty() {
            return Ok(0);
        }

        let count = keys.len() as u64;
        let identifiers = keys
            .into_iter()
            .map(|k| ObjectIdentifier::builder().key(k).build())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StorageError::Upstream(format!("delete request: {e}")))?;

        let delete = Delete::builder()
            .set_objects(Some(identifiers))
            .build()
            .map_err(|e| StorageError::Upstream(format!("delete request: {e}")))?;

        self.client
            .delete_objects()
            .bucket(&self.bucket)
            .delete(delete)
            .send()
            .await
            .map_err(|e| classify_sdk_error("delete objects", e))?;

        Ok(count)
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn upload(
        &self,
        folder: &str,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError> {
        let (key, public_id) = paths::new_object_key(folder, file_name, content_type);

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .content_type(content_type)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| classify_sdk_error("upload object", e))?;

        tracing::debug!(key = %key, "Uploaded object");

        Ok(StoredObject {
            secure_url: format!("{}/{key}", self.public_base),
            public_id,
        })
    }

    async fn destroy(&self, public_id: &str) -> Result<(), StorageError> {
        // The public id lacks the extension; list by prefix and match the
        // exact stem so `.../abc` does not also delete `.../abc2.png`.
        let dotted = format!("{public_id}.");
        let keys: Vec<String> = self
            .list_keys(public_id)
            .await?
            .into_iter()
            .filter(|k| k == public_id || k.starts_with(&dotted))
            .collect();

        if keys.is_empty() {
            tracing::debug!(public_id = %public_id, "Destroy matched no stored object");
            return Ok(());
        }

        self.delete_keys(keys).await?;
        tracing::debug!(public_id = %public_id, "Destroyed object");
        Ok(())
    }

    async fn destroy_prefix(&self, prefix: &str) -> Result<u64, StorageError> {
        let keys = self.list_keys(prefix).await?;
        let removed = self.delete_keys(keys).await?;
        tracing::debug!(prefix = %prefix, removed, "Destroyed objects by prefix");
        Ok(removed)
    }
}
