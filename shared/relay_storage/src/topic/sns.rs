use std::sync::Arc;

use async_trait::async_trait;
use aws_sdk_sns::{error::SdkError, types::MessageAttributeValue, Client as SnsClient};
use tracing::{debug, error};

use super::{TopicError, TopicMessage, TopicPublisher, TopicResult};

/// SNS-backed topic publisher
pub struct SnsTopicPublisher {
    sns_client: Arc<SnsClient>,
}

impl SnsTopicPublisher {
    /// Creates a new SNS topic publisher
    ///
    /// # Arguments
    ///
    /// * `sns_client` - Pre-configured SNS client
    #[must_use]
    pub const fn new(sns_client: Arc<SnsClient>) -> Self {
        Self { sns_client }
    }
}

#[async_trait]
impl TopicPublisher for SnsTopicPublisher {
    async fn publish(&self, topic_arn: &str, message: TopicMessage) -> TopicResult<String> {
        let mut request = self
            .sns_client
            .publish()
            .topic_arn(topic_arn)
            .message(message.body);

        for (name, value) in message.attributes {
            let attribute = MessageAttributeValue::builder()
                .data_type("String")
                .string_value(value)
                .build()
                .map_err(|e| TopicError::InvalidAttribute(format!("{name}: {e}")))?;
            request = request.message_attributes(name, attribute);
        }

        let result = request.send().await;

        match result {
            Ok(output) => {
                let message_id = output
                    .message_id()
                    .map(ToString::to_string)
                    .unwrap_or_default();
                debug!("Published message {message_id} to {topic_arn}");
                Ok(message_id)
            }
            Err(SdkError::ServiceError(service_err))
                if service_err.raw().status().as_u16() >= 500 =>
            {
                error!("Upstream error publishing to {topic_arn}: {:?}", service_err.err());
                Err(TopicError::UpstreamError(format!("{:?}", service_err.err())))
            }
            Err(e) => Err(TopicError::from(e)),
        }
    }
}
