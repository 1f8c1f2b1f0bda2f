//! Relays bucket-write notifications to a topic
//!
//! Every record of an S3 notification is projected to an [`types::EventPayload`] and
//! published as its own message.

pub mod handler;
pub mod relay;
pub mod types;

pub use relay::{EventRelay, RecordFailure, RelaySummary};
