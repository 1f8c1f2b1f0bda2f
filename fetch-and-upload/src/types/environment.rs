//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use crate::object_key::KeyStrategy;

/// Default size ceiling for fetched images: 15 MiB
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 15 * 1024 * 1024;

/// Default total timeout for the image fetch
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the bucket fetched images are uploaded to
    ///
    /// # Panics
    ///
    /// Panics if the `UPLOAD_BUCKET` environment variable is not set outside development
    #[must_use]
    pub fn upload_bucket(&self) -> String {
        match self {
            Self::Production | Self::Staging => {
                env::var("UPLOAD_BUCKET").expect("UPLOAD_BUCKET environment variable is not set")
            }
            Self::Development => {
                env::var("UPLOAD_BUCKET").unwrap_or_else(|_| "image-relay-uploads".to_string())
            }
        }
    }

    /// Returns how object keys are derived for uploaded images
    ///
    /// # Panics
    ///
    /// Panics if `UPLOAD_KEY_STRATEGY` is set to an unknown strategy
    #[must_use]
    pub fn key_strategy(&self) -> KeyStrategy {
        env::var("UPLOAD_KEY_STRATEGY").map_or_else(
            |_| KeyStrategy::default(),
            |value| {
                let value = value.trim().to_lowercase();
                value
                    .parse()
                    .unwrap_or_else(|_| panic!("Invalid key strategy: {value}"))
            },
        )
    }

    /// Returns the size ceiling for fetched images in bytes
    #[must_use]
    pub fn max_image_bytes(&self) -> u64 {
        env::var("MAX_IMAGE_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_IMAGE_BYTES)
    }

    /// Returns the total timeout for fetching an image
    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        let secs = env::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS);

        Duration::from_secs(secs)
    }

    /// Whether logs are emitted as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            // Regular AWS endpoints for production and staging
            Self::Production | Self::Staging => None,
            // LocalStack endpoint for development
            Self::Development => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        relay_storage::aws::load_sdk_config(self.override_aws_endpoint_url()).await
    }

    /// AWS S3 service configuration
    pub async fn s3_client_config(&self) -> aws_sdk_s3::Config {
        let aws_config = self.aws_config().await;
        relay_storage::aws::s3_client_config(&aws_config, matches!(self, Self::Development))
    }
}
