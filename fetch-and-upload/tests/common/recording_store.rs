use std::sync::Mutex;

use async_trait::async_trait;
use relay_storage::object_store::{
    ObjectStore, ObjectStoreError, ObjectStoreResult, StoredObject, UploadParameters,
};

/// In-memory object store that records every write
#[derive(Default)]
pub struct RecordingStore {
    uploads: Mutex<Vec<UploadParameters>>,
    fail_with_upstream_error: bool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes fail with a 5xx-style error
    pub fn failing() -> Self {
        Self {
            uploads: Mutex::new(Vec::new()),
            fail_with_upstream_error: true,
        }
    }

    /// Every write attempted so far
    pub fn uploads(&self) -> Vec<UploadParameters> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectStore for RecordingStore {
    async fn put_object(&self, params: UploadParameters) -> ObjectStoreResult<StoredObject> {
        self.uploads.lock().unwrap().push(params);

        if self.fail_with_upstream_error {
            return Err(ObjectStoreError::UpstreamError(
                "ServiceUnavailable".to_string(),
            ));
        }

        Ok(StoredObject {
            e_tag: Some("\"test-etag\"".to_string()),
        })
    }
}
