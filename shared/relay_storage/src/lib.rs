//! Storage services for the image relay functions
//!
//! This crate provides the object storage and topic publishing capabilities shared
//! between the `fetch-and-upload` and `publish-event` functions, backed by S3 and SNS.

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Shared AWS SDK configuration
pub mod aws;
/// Object storage (S3) operations
pub mod object_store;
/// Topic publishing (SNS) operations
pub mod topic;
