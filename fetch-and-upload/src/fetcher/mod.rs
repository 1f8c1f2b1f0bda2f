//! HTTP image fetching

mod error;

use std::time::Duration;

use bytes::{Bytes, BytesMut};
use mime::Mime;
use reqwest::{header::CONTENT_TYPE, Client};
use tracing::{debug, instrument, warn};
use url::Url;

pub use error::{FetchError, FetchResult};

/// A fully buffered image
#[derive(Debug, Clone)]
pub struct FetchedImage {
    /// Image bytes
    pub body: Bytes,
    /// Content type announced by the source, if it parses
    pub content_type: Option<Mime>,
}

/// HTTP client that buffers images up to a size ceiling
#[derive(Debug, Clone)]
pub struct ImageFetcher {
    client: Client,
    max_bytes: u64,
}

impl ImageFetcher {
    /// Creates a fetcher with its own HTTP client
    ///
    /// # Arguments
    ///
    /// * `timeout` - Total timeout per fetch, body transfer included
    /// * `max_bytes` - Largest accepted image in bytes
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the HTTP client cannot be built
    pub fn new(timeout: Duration, max_bytes: u64) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self::with_client(client, max_bytes))
    }

    /// Creates a fetcher around an existing HTTP client
    #[must_use]
    pub const fn with_client(client: Client, max_bytes: u64) -> Self {
        Self { client, max_bytes }
    }

    /// Fetches `url` and buffers the whole body
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Status` when the source answers with a non-2xx status
    /// Returns `FetchError::Transport` when the connection or body transfer fails
    /// Returns `FetchError::TooLarge` when the body exceeds the size ceiling
    #[instrument(skip_all, fields(url = %url))]
    pub async fn fetch(&self, url: &Url) -> FetchResult<FetchedImage> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            warn!("Image source answered with {status}");
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let too_large = || FetchError::TooLarge {
            url: url.to_string(),
            limit: self.max_bytes,
        };

        // Reject early when the source declares the size up front
        if let Some(declared) = response.content_length() {
            if declared > self.max_bytes {
                return Err(too_large());
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<Mime>().ok());

        let mut body = BytesMut::new();
        while let Some(chunk) = response.chunk().await.map_err(transport)? {
            if (body.len() + chunk.len()) as u64 > self.max_bytes {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        debug!("Fetched {} bytes ({:?})", body.len(), content_type);

        Ok(FetchedImage {
            body: body.freeze(),
            content_type,
        })
    }
}
