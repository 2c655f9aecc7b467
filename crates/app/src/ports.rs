//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside
//! world. They are defined here so that both the aggregator and the adapter
//! crates can depend on them without creating circular dependencies.

pub mod message_bus;
pub mod status_log;

pub use message_bus::{PublishError, StatusPublisher};
pub use status_log::{LogError, StatusLog};
