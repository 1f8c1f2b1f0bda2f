//! Topic publishing operations
//!
//! This module provides the publish capability the notification relay depends on,
//! with an SNS implementation.

mod error;
mod sns;

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde::Serialize;

pub use error::{TopicError, TopicResult};
pub use sns::SnsTopicPublisher;

/// A message ready to be published to a topic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicMessage {
    /// Message body
    pub body: String,
    /// String message attributes, sorted by name
    pub attributes: BTreeMap<String, String>,
}

impl TopicMessage {
    /// Creates a message whose body is the JSON serialization of `payload`
    ///
    /// # Errors
    ///
    /// Returns `TopicError::SerializationError` if `payload` cannot be serialized
    pub fn json<T: Serialize>(payload: &T) -> TopicResult<Self> {
        Ok(Self {
            body: serde_json::to_string(payload)?,
            attributes: BTreeMap::new(),
        })
    }

    /// Adds a string attribute, replacing any previous value for `name`
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// Publish access to a topic
#[async_trait]
pub trait TopicPublisher: Send + Sync {
    /// Publishes `message` to the topic identified by `topic_arn`
    ///
    /// # Returns
    ///
    /// The message ID assigned by the topic, or an empty string
    ///
    /// # Errors
    ///
    /// Returns `TopicError` if the publish operation fails
    async fn publish(&self, topic_arn: &str, message: TopicMessage) -> TopicResult<String>;
}
