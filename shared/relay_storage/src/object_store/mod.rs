//! Object storage operations
//!
//! The [`ObjectStore`] trait is the write capability the upload function depends on.
//! [`S3ObjectStore`] implements it on top of `PutObject`.

mod error;
mod s3;

use async_trait::async_trait;
use bytes::Bytes;

pub use error::{ObjectStoreError, ObjectStoreResult};
pub use s3::S3ObjectStore;

/// Parameters of a single object write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadParameters {
    /// Target bucket name
    pub bucket: String,
    /// Object key inside the bucket
    pub key: String,
    /// Object contents
    pub body: Bytes,
    /// MIME type stored as the object's `Content-Type`
    pub content_type: Option<String>,
    /// Base64-encoded SHA-256 of `body`, verified by the store on write
    pub checksum_sha256: Option<String>,
}

/// Acknowledgment of a completed object write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredObject {
    /// Entity tag assigned by the store, if returned
    pub e_tag: Option<String>,
}

/// Write access to an object store
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes `params.body` under `params.key` in `params.bucket`
    ///
    /// # Errors
    ///
    /// Returns `ObjectStoreError` if the store rejects or fails the write
    async fn put_object(&self, params: UploadParameters) -> ObjectStoreResult<StoredObject>;
}
