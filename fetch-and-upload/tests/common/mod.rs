// Not every utils is used in every test, so we allow dead code
#![allow(unused_imports, dead_code)]

mod image_server;
pub use image_server::*;
mod recording_store;
pub use recording_store::*;

use std::sync::Arc;
use std::time::Duration;

use aws_lambda_events::apigw::ApiGatewayProxyRequest;
use fetch_and_upload::{fetcher::ImageFetcher, object_key::KeyStrategy, ImageRelay};

pub const TEST_BUCKET: &str = "image-relay-test";

/// Setup tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// Builds a relay writing into `store` with a 5 second timeout
pub fn create_relay(
    store: Arc<RecordingStore>,
    key_strategy: KeyStrategy,
    max_bytes: u64,
) -> ImageRelay {
    setup_test_env();

    let fetcher = ImageFetcher::new(Duration::from_secs(5), max_bytes)
        .expect("Failed to create image fetcher");

    ImageRelay::new(fetcher, store, TEST_BUCKET.to_string(), key_strategy)
}

/// Builds an API Gateway request with a JSON body
pub fn gateway_request(body: Option<String>) -> ApiGatewayProxyRequest {
    let mut request = ApiGatewayProxyRequest::default();
    request.body = body;
    request
}
