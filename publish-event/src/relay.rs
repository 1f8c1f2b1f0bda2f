//! Relays bucket notifications to a topic, one message per record

use std::sync::Arc;

use aws_lambda_events::s3::{S3Event, S3EventRecord};
use futures::{stream, StreamExt};
use relay_storage::topic::{TopicError, TopicMessage, TopicPublisher};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::types::EventPayload;

/// Failure to relay one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordFailure {
    /// Position of the record in the notification
    pub index: usize,
    /// Object key of the record, if it had one
    pub object_key: Option<String>,
    /// Why the record was not published
    pub error: String,
}

/// Aggregated result of relaying one notification
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelaySummary {
    /// Number of records in the notification
    pub received: usize,
    /// Number of records published
    pub published: usize,
    /// Records that were not published
    pub failed: Vec<RecordFailure>,
}

/// Publishes an [`EventPayload`] per notification record
pub struct EventRelay {
    publisher: Arc<dyn TopicPublisher>,
    topic_arn: String,
    concurrency: usize,
}

impl EventRelay {
    /// Creates a new event relay
    ///
    /// # Arguments
    ///
    /// * `publisher` - Topic publisher
    /// * `topic_arn` - Destination topic
    /// * `concurrency` - Maximum publishes in flight, at least 1
    #[must_use]
    pub fn new(publisher: Arc<dyn TopicPublisher>, topic_arn: String, concurrency: usize) -> Self {
        Self {
            publisher,
            topic_arn,
            concurrency: concurrency.max(1),
        }
    }

    /// Publishes every record of `event` and waits for all of them
    ///
    /// A failed record is logged and reported in the summary; it never stops the
    /// remaining records from being published.
    #[instrument(skip_all, fields(records = event.records.len()))]
    pub async fn relay(&self, event: &S3Event) -> RelaySummary {
        let outcomes: Vec<Result<(), RecordFailure>> =
            stream::iter(event.records.iter().enumerate())
                .map(|(index, record)| self.relay_record(index, record))
                .buffered(self.concurrency)
                .collect()
                .await;

        let mut summary = RelaySummary {
            received: event.records.len(),
            ..RelaySummary::default()
        };

        for outcome in outcomes {
            match outcome {
                Ok(()) => summary.published += 1,
                Err(failure) => summary.failed.push(failure),
            }
        }

        info!(
            "Relayed {}/{} records to {}",
            summary.published, summary.received, self.topic_arn
        );

        summary
    }

    async fn relay_record(
        &self,
        index: usize,
        record: &S3EventRecord,
    ) -> Result<(), RecordFailure> {
        let Some(payload) = EventPayload::from_record(record) else {
            warn!("Record {index} has no object key, skipping");
            return Err(RecordFailure {
                index,
                object_key: None,
                error: "missing object key".to_string(),
            });
        };

        let object_key = payload.object_key.clone();

        match self.publish_payload(record, &payload).await {
            Ok(message_id) => {
                info!("Published {object_key} as message {message_id}");
                Ok(())
            }
            Err(e) => {
                error!("Failed to publish record {index} ({object_key}): {e}");
                Err(RecordFailure {
                    index,
                    object_key: Some(object_key),
                    error: e.to_string(),
                })
            }
        }
    }

    async fn publish_payload(
        &self,
        record: &S3EventRecord,
        payload: &EventPayload,
    ) -> Result<String, TopicError> {
        let mut message = TopicMessage::json(payload)?;

        if let Some(event_name) = &record.event_name {
            message = message.with_attribute("eventName", event_name.as_str());
        }
        if let Some(bucket) = &record.s3.bucket.name {
            message = message.with_attribute("bucket", bucket.as_str());
        }

        self.publisher.publish(&self.topic_arn, message).await
    }
}
