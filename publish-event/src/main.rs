use std::sync::Arc;

use aws_sdk_sns::Client as SnsClient;
use lambda_runtime::{run, service_fn};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use publish_event::{handler::function_handler, types::Environment, EventRelay};
use relay_storage::topic::SnsTopicPublisher;

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

    let sns_client = Arc::new(SnsClient::new(&environment.aws_config().await));
    let topic_arn = environment.topic_arn();

    info!(
        "Starting publish-event in {:?} environment (topic: {})",
        environment, topic_arn
    );

    let relay = EventRelay::new(
        Arc::new(SnsTopicPublisher::new(sns_client)),
        topic_arn,
        environment.publish_concurrency(),
    );

    run(service_fn(|event| function_handler(&relay, event)))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
