use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use relay_storage::topic::{TopicError, TopicMessage, TopicPublisher, TopicResult};

/// A message as received by [`RecordingPublisher`]
#[derive(Debug, Clone)]
pub struct PublishedMessage {
    pub topic_arn: String,
    pub message: TopicMessage,
}

impl PublishedMessage {
    /// The message body parsed as JSON
    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.message.body).expect("Message body should be JSON")
    }
}

/// In-memory topic publisher that records every publish attempt
#[derive(Default)]
pub struct RecordingPublisher {
    attempts: Mutex<Vec<PublishedMessage>>,
    failing_keys: HashSet<String>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// A publisher that rejects messages for the given object keys
    pub fn failing_for(keys: &[&str]) -> Self {
        Self {
            attempts: Mutex::new(Vec::new()),
            failing_keys: keys.iter().map(ToString::to_string).collect(),
        }
    }

    /// Every publish attempt, failed ones included
    pub fn attempts(&self) -> Vec<PublishedMessage> {
        self.attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TopicPublisher for RecordingPublisher {
    async fn publish(&self, topic_arn: &str, message: TopicMessage) -> TopicResult<String> {
        let published = PublishedMessage {
            topic_arn: topic_arn.to_string(),
            message,
        };
        let object_key = published.body_json()["objectKey"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        let message_id = {
            let mut attempts = self.attempts.lock().unwrap();
            attempts.push(published);
            format!("message-{}", attempts.len())
        };

        if self.failing_keys.contains(&object_key) {
            return Err(TopicError::UpstreamError(format!(
                "InternalError publishing {object_key}"
            )));
        }

        Ok(message_id)
    }
}
