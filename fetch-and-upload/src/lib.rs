//! Fetches an image from a remote URL and stores it as an object in a bucket

/// HTTP image fetching
pub mod fetcher;

/// Lambda handler
pub mod handler;

/// Object key strategies
pub mod object_key;

/// Fetch-then-upload operation
pub mod relay;

/// Configuration, request and response types
pub mod types;

pub use relay::{FetchUploadError, ImageRelay, UploadOutcome};
