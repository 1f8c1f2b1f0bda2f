//! LocalStack test setup utilities

#![allow(dead_code)]

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_sns::Client as SnsClient;
use uuid::Uuid;

/// Test context that provides S3 and SNS clients with a fresh bucket and topic
pub struct LocalStackContext {
    pub s3_client: Arc<S3Client>,
    pub sns_client: Arc<SnsClient>,
    pub bucket_name: String,
    pub topic_arn: String,
}

impl LocalStackContext {
    /// Creates a new test context with a unique bucket and topic
    pub async fn new(test_name: &str) -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        let bucket_name = format!("{test_name}-{suffix}");
        let topic_name = format!("{test_name}-{suffix}");

        // Setup LocalStack client with hardcoded credentials for CI
        let credentials = Credentials::from_keys(
            "test", // AWS_ACCESS_KEY_ID
            "test", // AWS_SECRET_ACCESS_KEY
            None,   // no session token
        );

        let config = aws_config::defaults(BehaviorVersion::latest())
            .endpoint_url("http://localhost:4566")
            .region(Region::new("us-east-1"))
            .credentials_provider(credentials)
            .load()
            .await;

        let s3_client = Arc::new(S3Client::from_conf(
            relay_storage::aws::s3_client_config(&config, true),
        ));
        let sns_client = Arc::new(SnsClient::new(&config));

        s3_client
            .create_bucket()
            .bucket(&bucket_name)
            .send()
            .await
            .expect("Failed to create test bucket");

        let topic_arn = sns_client
            .create_topic()
            .name(&topic_name)
            .send()
            .await
            .expect("Failed to create test topic")
            .topic_arn()
            .expect("Topic ARN not returned")
            .to_string();

        Self {
            s3_client,
            sns_client,
            bucket_name,
            topic_arn,
        }
    }
}

impl Drop for LocalStackContext {
    fn drop(&mut self) {
        let sns_client = self.sns_client.clone();
        let topic_arn = self.topic_arn.clone();

        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                let _ = sns_client.delete_topic().topic_arn(&topic_arn).send().await;
            });
        }
    }
}
