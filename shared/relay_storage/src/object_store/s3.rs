use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_s3::{error::SdkError, primitives::ByteStream, Client as S3Client};
use tracing::{debug, error};

use super::{ObjectStore, ObjectStoreError, ObjectStoreResult, StoredObject, UploadParameters};

/// S3-backed object store
pub struct S3ObjectStore {
    s3_client: Arc<S3Client>,
}

impl S3ObjectStore {
    /// Creates a new S3 object store
    ///
    /// # Arguments
    ///
    /// * `s3_client` - Pre-configured S3 client
    #[must_use]
    pub const fn new(s3_client: Arc<S3Client>) -> Self {
        Self { s3_client }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, params: UploadParameters) -> ObjectStoreResult<StoredObject> {
        let UploadParameters {
            bucket,
            key,
            body,
            content_type,
            checksum_sha256,
        } = params;

        debug!(
            "Putting object {} into bucket {} ({} bytes)",
            key,
            bucket,
            body.len()
        );

        let content_length = i64::try_from(body.len()).unwrap_or(i64::MAX);

        let result = self
            .s3_client
            .put_object()
            .bucket(&bucket)
            .key(&key)
            .content_length(content_length)
            .set_content_type(content_type)
            .set_checksum_sha256(checksum_sha256)
            .body(ByteStream::from(body))
            .send()
            .await;

        match result {
            Ok(output) => Ok(StoredObject {
                e_tag: output.e_tag().map(ToString::to_string),
            }),
            Err(SdkError::ServiceError(service_err))
                if service_err.raw().status().as_u16() >= 500 =>
            {
                error!("Upstream error putting object {key}: {:?}", service_err.err());
                Err(ObjectStoreError::UpstreamError(format!(
                    "{:?}",
                    service_err.err()
                )))
            }
            Err(e) => {
                error!("Failed to put object {key} into bucket {bucket}: {e}");
                Err(ObjectStoreError::from(e))
            }
        }
    }
}
