//! # smartpark-app
//!
//! Application layer — the aggregator use-case and **port definitions**.
//!
//! ## Responsibilities
//! - Define port traits that adapters implement (outbound ports):
//!   - [`ports::StatusPublisher`] — hand status payloads to the bus
//!   - [`ports::StatusLog`] — append-only persistence of status lines
//! - Own the event-driven aggregator ([`aggregator::Aggregator`]), the sole
//!   writer of car-park state
//!
//! ## Dependency rule
//! Depends on `smartpark-domain` only. Adapters depend on *this* crate,
//! never the reverse.

pub mod aggregator;
pub mod ports;
