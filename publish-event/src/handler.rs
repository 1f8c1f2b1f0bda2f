use aws_lambda_events::s3::S3Event;
use lambda_runtime::{Error, LambdaEvent};
use tracing::instrument;

use crate::relay::{EventRelay, RelaySummary};

/// Handles one bucket notification
///
/// Per-record publish failures are reported in the returned summary and do not fail
/// the invocation, so the platform does not redeliver records that were published.
///
/// # Errors
///
/// Never fails at the invocation level
#[instrument(skip_all, fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    relay: &EventRelay,
    event: LambdaEvent<S3Event>,
) -> Result<RelaySummary, Error> {
    tracing::debug!("Received {} notification records", event.payload.records.len());

    Ok(relay.relay(&event.payload).await)
}
