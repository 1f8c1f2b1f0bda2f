use aws_lambda_events::s3::S3EventRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Message body published for one object-write record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    /// Key of the written object, as delivered in the notification
    pub object_key: String,
    /// Size of the object in bytes, 0 when the record omits it
    pub object_size: i64,
    /// Time of the write, RFC 3339 in UTC
    pub timestamp: DateTime<Utc>,
}

impl EventPayload {
    /// Projects a notification record, or `None` when it names no object
    #[must_use]
    pub fn from_record(record: &S3EventRecord) -> Option<Self> {
        let object_key = record.s3.object.key.clone()?;

        Some(Self {
            object_key,
            object_size: record.s3.object.size.unwrap_or_default(),
            timestamp: record.event_time,
        })
    }
}
