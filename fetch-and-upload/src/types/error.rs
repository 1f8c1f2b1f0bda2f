//! Error responses returned through API Gateway

use aws_lambda_events::apigw::ApiGatewayProxyResponse;
use http::StatusCode;
use serde::Serialize;

use crate::{fetcher::FetchError, relay::FetchUploadError};

use super::json_response;

/// API error response envelope
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorResponse {
    /// Whether the client should retry the request
    pub allow_retry: bool,
    /// Error details
    error: ErrorBody,
}

/// Error body containing code and message
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    /// Machine-readable error code
    pub code: &'static str,
    /// Human-readable error message
    pub message: String,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: ApiErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(
        status: StatusCode,
        code: &'static str,
        msg: impl Into<String>,
        retry: bool,
    ) -> Self {
        Self {
            status,
            inner: ApiErrorResponse {
                allow_retry: retry,
                error: ErrorBody {
                    code,
                    message: msg.into(),
                },
            },
        }
    }

    /// HTTP status of the response
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code
    #[must_use]
    pub const fn code(&self) -> &'static str {
        self.inner.error.code
    }

    /// Converts the error into an API Gateway response
    #[must_use]
    pub fn into_response(self) -> ApiGatewayProxyResponse {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!(
                "Client error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            500..=599 => tracing::error!(
                "Server error: {} - {}",
                self.inner.error.code,
                self.inner.error.message
            ),
            _ => {}
        }

        json_response(self.status, &self.inner)
    }
}

/// Convert fetch-and-upload failures to application errors
impl From<FetchUploadError> for AppError {
    fn from(err: FetchUploadError) -> Self {
        match &err {
            FetchUploadError::InvalidRequest(invalid) => Self::new(
                StatusCode::BAD_REQUEST,
                "invalid_request",
                invalid.to_string(),
                false,
            ),
            FetchUploadError::Fetch(fetch) => {
                tracing::warn!("Image fetch failed: {fetch}");
                match fetch {
                    FetchError::Status { status, .. } => Self::new(
                        StatusCode::BAD_GATEWAY,
                        "fetch_failed",
                        format!("Image source responded with HTTP {status}"),
                        fetch.is_retryable(),
                    ),
                    FetchError::Transport { .. } => Self::new(
                        StatusCode::BAD_GATEWAY,
                        "fetch_failed",
                        "Image source could not be reached",
                        true,
                    ),
                    FetchError::TooLarge { limit, .. } => Self::new(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "image_too_large",
                        format!("Image exceeds the {limit} byte limit"),
                        false,
                    ),
                    FetchError::Client(_) => Self::new(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal_error",
                        "Internal server error",
                        false,
                    ),
                }
            }
            FetchUploadError::Store(store) if store.is_upstream_error() => {
                tracing::error!("Storage upstream error: {store}");
                Self::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "upstream_error",
                    "Storage service temporarily unavailable",
                    true,
                )
            }
            FetchUploadError::Store(store) => {
                tracing::error!("Storage error: {store}");
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Internal server error",
                    true,
                )
            }
        }
    }
}
