use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, SdkConfig};

/// Maximum attempts for a single AWS operation, including the first one
pub const MAX_ATTEMPTS: u32 = 3;

/// Loads the AWS SDK configuration with retry and timeout settings
///
/// # Arguments
///
/// * `endpoint_url` - Optional endpoint override (`LocalStack` in development)
pub async fn load_sdk_config(endpoint_url: Option<&str>) -> SdkConfig {
    let retry_config = RetryConfig::standard()
        .with_max_attempts(MAX_ATTEMPTS)
        .with_initial_backoff(Duration::from_millis(50));

    let timeout_config = TimeoutConfig::builder()
        .operation_timeout(Duration::from_secs(30))
        .build();

    let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
        .await
        .to_builder()
        .retry_config(retry_config)
        .timeout_config(timeout_config);

    if let Some(endpoint_url) = endpoint_url {
        config_builder = config_builder.endpoint_url(endpoint_url);
    }

    config_builder.build()
}

/// Builds the S3 client configuration from a shared SDK configuration
///
/// Path-style addressing is forced when `force_path_style` is set, which `LocalStack`
/// requires: <https://github.com/awslabs/aws-sdk-rust/discussions/874>
#[must_use]
pub fn s3_client_config(sdk_config: &SdkConfig, force_path_style: bool) -> aws_sdk_s3::Config {
    let s3_config: aws_sdk_s3::Config = sdk_config.into();
    let mut builder = s3_config.to_builder();

    if force_path_style {
        builder.set_force_path_style(Some(true));
    }

    builder.build()
}
