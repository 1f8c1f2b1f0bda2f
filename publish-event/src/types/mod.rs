/// Environment configuration
pub mod environment;
mod payload;

pub use environment::Environment;
pub use payload::EventPayload;
