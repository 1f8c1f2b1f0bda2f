//! Environment configuration for different deployment stages

use std::env;

/// Topic used against `LocalStack` when `TOPIC_ARN` is unset
pub const DEVELOPMENT_TOPIC_ARN: &str = "arn:aws:sns:us-east-1:000000000000:image-uploaded";

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

    /// Returns the ARN of the topic notifications are relayed to
    ///
    /// # Panics
    ///
    /// Panics if the `TOPIC_ARN` environment variable is not set outside development
    #[must_use]
    pub fn topic_arn(&self) -> String {
        match self {
            Self::Production | Self::Staging => {
                env::var("TOPIC_ARN").expect("TOPIC_ARN environment variable is not set")
            }
            Self::Development => {
                env::var("TOPIC_ARN").unwrap_or_else(|_| DEVELOPMENT_TOPIC_ARN.to_string())
            }
        }
    }

    /// Returns how many records are published at the same time
    #[must_use]
    pub fn publish_concurrency(&self) -> usize {
        env::var("PUBLISH_CONCURRENCY")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(10)
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
            Self::Production | Self::Staging => None,
            Self::Development => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        relay_storage::aws::load_sdk_config(self.override_aws_endpoint_url()).await
    }
}
