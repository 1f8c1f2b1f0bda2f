use std::sync::Arc;

use anyhow::Context;
use aws_sdk_s3::Client as S3Client;
use lambda_runtime::{run, service_fn};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use fetch_and_upload::{
    fetcher::ImageFetcher, handler::function_handler, types::Environment, ImageRelay,
};
use relay_storage::object_store::S3ObjectStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // Use JSON format for staging/production, regular format for development
    if environment.json_logs() {
        fmt()
            .json()
            .with_env_filter(EnvFilter::from_default_env())
            .without_time()
            .init();
    } else {
        fmt().with_env_filter(EnvFilter::from_default_env()).init();
    }

    let s3_client = Arc::new(S3Client::from_conf(environment.s3_client_config().await));
    let fetcher = ImageFetcher::new(environment.fetch_timeout(), environment.max_image_bytes())
        .context("Failed to create image fetcher")?;

    let relay = ImageRelay::new(
        fetcher,
        Arc::new(S3ObjectStore::new(s3_client)),
        environment.upload_bucket(),
        environment.key_strategy(),
    );

    info!(
        "Starting fetch-and-upload in {:?} environment (bucket: {}, key strategy: {})",
        environment,
        environment.upload_bucket(),
        environment.key_strategy()
    );

    run(service_fn(|event| function_handler(&relay, event)))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
