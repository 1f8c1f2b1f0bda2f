// Not every utils is used in every test, so we allow dead code
#![allow(unused_imports, dead_code)]

mod recording_publisher;
pub use recording_publisher::*;

use aws_lambda_events::s3::S3Event;
use serde_json::json;

pub const TEST_TOPIC_ARN: &str = "arn:aws:sns:us-east-1:000000000000:image-uploaded-test";
pub const TEST_BUCKET: &str = "image-relay-uploads";

/// Setup tracing for tests
pub fn setup_test_env() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .try_init()
        .ok();
}

/// One notification record as delivered by S3
pub fn s3_record_json(key: &str, size: i64, event_time: &str) -> serde_json::Value {
    json!({
        "eventVersion": "2.1",
        "eventSource": "aws:s3",
        "awsRegion": "us-east-1",
        "eventTime": event_time,
        "eventName": "ObjectCreated:Put",
        "userIdentity": { "principalId": "AWS:AIDAINPONIXQXHT3IKHL2" },
        "requestParameters": { "sourceIPAddress": "205.255.255.255" },
        "responseElements": {
            "x-amz-request-id": "D82B88E5F771F645",
            "x-amz-id-2": "vlR7PnpV2Ce81l0PRw6jlUpck7Jo5ZsQjryTjKlc5aLWGVHPZLj5NeC6qMa0emYBDXOo6QBU0Wo="
        },
        "s3": {
            "s3SchemaVersion": "1.0",
            "configurationId": "image-uploaded",
            "bucket": {
                "name": TEST_BUCKET,
                "ownerIdentity": { "principalId": "A3I5XTEXAMAI3E" },
                "arn": format!("arn:aws:s3:::{TEST_BUCKET}")
            },
            "object": {
                "key": key,
                "size": size,
                "eTag": "b21b84d653bb07b05b1e6b33684dc11b",
                "sequencer": "0C0F6F405D6ED209E1"
            }
        }
    })
}

/// A notification event containing the given records
pub fn s3_event(records: Vec<serde_json::Value>) -> S3Event {
    serde_json::from_value(json!({ "Records": records })).expect("Event should deserialize")
}

/// A notification with one record per `(key, size)`, written a second apart
pub fn s3_event_for(objects: &[(&str, i64)]) -> S3Event {
    s3_event(
        objects
            .iter()
            .enumerate()
            .map(|(i, (key, size))| {
                s3_record_json(key, *size, &format!("2024-03-01T09:30:{i:02}.000Z"))
            })
            .collect(),
    )
}
