use aws_sdk_s3::{error::SdkError, operation::put_object::PutObjectError};
use thiserror::Error;

/// Result type alias for object storage operations
pub type ObjectStoreResult<T> = Result<T, ObjectStoreError>;

/// Error types for object storage operations
#[derive(Error, Debug)]
pub enum ObjectStoreError {
    /// Error writing an object to S3
    #[error("Failed to put object into bucket: {0}")]
    PutObject(#[from] SdkError<PutObjectError>),

    /// Upstream service error (5xx)
    #[error("Upstream service error: {0}")]
    UpstreamError(String),
}

impl ObjectStoreError {
    /// Checks if this error represents an upstream (5xx) error
    #[must_use]
    pub fn is_upstream_error(&self) -> bool {
        match self {
            Self::PutObject(SdkError::ServiceError(err)) => err.raw().status().as_u16() >= 500,
            Self::PutObject(_) => false,
            Self::UpstreamError(_) => true,
        }
    }
}
