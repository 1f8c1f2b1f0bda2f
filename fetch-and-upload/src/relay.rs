//! Fetch-then-upload of a single image

use std::sync::Arc;

use relay_storage::object_store::{ObjectStore, ObjectStoreError, UploadParameters};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::{
    fetcher::{FetchError, ImageFetcher},
    object_key::{ContentDigest, KeyStrategy},
    types::{FetchImageRequest, InvalidRequest},
};

/// Errors surfaced by [`ImageRelay::fetch_and_upload`]
#[derive(Error, Debug)]
pub enum FetchUploadError {
    /// The request was rejected before fetching
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),

    /// The image could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The image could not be written to the bucket
    #[error(transparent)]
    Store(#[from] ObjectStoreError),
}

/// Description of a completed upload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    /// Bucket the image was written to
    pub bucket: String,
    /// Key of the written object
    pub object_key: String,
    /// URL the image was fetched from
    pub source_url: String,
    /// Size of the image in bytes
    pub content_length: usize,
    /// MIME type stored with the object
    pub content_type: String,
}

/// Fetches images and writes them into a bucket
pub struct ImageRelay {
    fetcher: ImageFetcher,
    store: Arc<dyn ObjectStore>,
    bucket: String,
    key_strategy: KeyStrategy,
}

impl ImageRelay {
    /// Creates a new image relay
    ///
    /// # Arguments
    ///
    /// * `fetcher` - HTTP fetcher for source images
    /// * `store` - Object store receiving the images
    /// * `bucket` - Bucket name passed with every write
    /// * `key_strategy` - How object keys are derived
    #[must_use]
    pub fn new(
        fetcher: ImageFetcher,
        store: Arc<dyn ObjectStore>,
        bucket: String,
        key_strategy: KeyStrategy,
    ) -> Self {
        Self {
            fetcher,
            store,
            bucket,
            key_strategy,
        }
    }

    /// Fetches the requested image and uploads it, awaiting the write
    ///
    /// Nothing is written when the fetch fails.
    ///
    /// # Errors
    ///
    /// - `FetchUploadError::InvalidRequest` - the image URL is not an absolute http(s) URL
    /// - `FetchUploadError::Fetch` - non-2xx status, transport failure or oversized body
    /// - `FetchUploadError::Store` - the object store rejected the write
    #[instrument(skip_all, fields(image_url = %request.image_url))]
    pub async fn fetch_and_upload(
        &self,
        request: &FetchImageRequest,
    ) -> Result<UploadOutcome, FetchUploadError> {
        let url = request.validated_url()?;

        let image = self.fetcher.fetch(&url).await?;

        let digest = ContentDigest::of(&image.body);
        let object_key = self.key_strategy.object_key(&request.image_url, &digest);
        let content_type = image
            .content_type
            .unwrap_or(mime::APPLICATION_OCTET_STREAM)
            .to_string();
        let content_length = image.body.len();

        let stored = self
            .store
            .put_object(UploadParameters {
                bucket: self.bucket.clone(),
                key: object_key.clone(),
                body: image.body,
                content_type: Some(content_type.clone()),
                checksum_sha256: Some(digest.to_base64()),
            })
            .await?;

        info!(
            "Uploaded {} bytes to {}/{} (etag: {:?})",
            content_length, self.bucket, object_key, stored.e_tag
        );

        Ok(UploadOutcome {
            bucket: self.bucket.clone(),
            object_key,
            source_url: request.image_url.clone(),
            content_length,
            content_type,
        })
    }
}
