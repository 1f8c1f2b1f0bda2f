use aws_sdk_sns::{error::SdkError, operation::publish::PublishError};
use thiserror::Error;

/// Result type alias for topic operations
pub type TopicResult<T> = Result<T, TopicError>;

/// Error types for topic operations
#[derive(Error, Debug)]
pub enum TopicError {
    /// Error publishing a message to SNS
    #[error("Failed to publish message to SNS: {0}")]
    Publish(#[from] SdkError<PublishError>),

    /// Error serializing the message body to JSON
    #[error("Failed to serialize message: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// A message attribute could not be built
    #[error("Invalid message attribute: {0}")]
    InvalidAttribute(String),

    /// Upstream service error (5xx)
    #[error("Upstream service error: {0}")]
    UpstreamError(String),
}

impl TopicError {
    /// Checks if this error represents an upstream (5xx) error
    #[must_use]
    pub fn is_upstream_error(&self) -> bool {
        match self {
            Self::Publish(SdkError::ServiceError(err)) => err.raw().status().as_u16() >= 500,
            Self::UpstreamError(_) => true,
            _ => false,
        }
    }
}
