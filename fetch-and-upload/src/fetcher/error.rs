use thiserror::Error;

/// Result type alias for image fetches
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur while fetching an image
#[derive(Error, Debug)]
pub enum FetchError {
    /// The source answered with a non-success status
    #[error("Image fetch failed with HTTP {status} for {url}")]
    Status {
        /// HTTP status code returned by the source
        status: u16,
        /// Requested URL
        url: String,
    },

    /// The request or the body transfer failed
    #[error("Image fetch failed for {url}: {source}")]
    Transport {
        /// Requested URL
        url: String,
        /// Underlying client error
        source: reqwest::Error,
    },

    /// The image is larger than the configured ceiling
    #[error("Image at {url} exceeds the {limit} byte limit")]
    TooLarge {
        /// Requested URL
        url: String,
        /// Configured ceiling in bytes
        limit: u64,
    },

    /// The HTTP client could not be built
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// Whether the source may succeed if asked again
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Transport { .. } => true,
            Self::TooLarge { .. } | Self::Client(_) => false,
        }
    }
}
