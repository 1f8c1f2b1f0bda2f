use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Request body of the fetch-and-upload function
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchImageRequest {
    /// Absolute `http` or `https` URL of the image to fetch
    pub image_url: String,
}

/// Reasons a request is rejected before any fetch happens
#[derive(Error, Debug, PartialEq, Eq)]
pub enum InvalidRequest {
    /// The request carried no body
    #[error("Request body is missing")]
    MissingBody,

    /// The body is not valid base64 although flagged as encoded
    #[error("Request body is not valid base64: {0}")]
    InvalidEncoding(String),

    /// The body is not a JSON `FetchImageRequest`
    #[error("Request body is not a valid fetch request: {0}")]
    MalformedJson(String),

    /// The image URL does not parse
    #[error("Invalid image URL {url}: {reason}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
        /// Parser error message
        reason: String,
    },

    /// The image URL uses a scheme other than `http` or `https`
    #[error("Unsupported URL scheme {scheme} in {url}")]
    UnsupportedScheme {
        /// The rejected URL
        url: String,
        /// Its scheme
        scheme: String,
    },
}

impl FetchImageRequest {
    /// Parses a request from a JSON body
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest::MissingBody` for an absent or blank body
    /// Returns `InvalidRequest::MalformedJson` if the body does not deserialize
    pub fn from_body(body: Option<&str>) -> Result<Self, InvalidRequest> {
        let body = body
            .filter(|b| !b.trim().is_empty())
            .ok_or(InvalidRequest::MissingBody)?;

        serde_json::from_str(body).map_err(|e| InvalidRequest::MalformedJson(e.to_string()))
    }

    /// Parses and checks the image URL
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest::InvalidUrl` if the URL does not parse as an absolute URL
    /// Returns `InvalidRequest::UnsupportedScheme` for schemes other than `http`/`https`
    pub fn validated_url(&self) -> Result<Url, InvalidRequest> {
        let url = Url::parse(self.image_url.trim()).map_err(|e| InvalidRequest::InvalidUrl {
            url: self.image_url.clone(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(InvalidRequest::UnsupportedScheme {
                url: self.image_url.clone(),
                scheme: scheme.to_string(),
            }),
        }
    }
}
