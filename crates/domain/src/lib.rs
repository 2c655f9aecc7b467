//! # smartpark-domain
//!
//! Pure domain model for the smartpark car-park monitor.
//!
//! ## Responsibilities
//! - Car-park state and its transitions ([`carpark`])
//! - Sensor and status event value objects ([`event`])
//! - The line-oriented `KEY: value` wire codec ([`wire`])
//! - Timestamps and wall-clock formatting ([`time`])
//!
//! ## Dependency rule
//! This crate performs no IO and has no internal dependencies.
//! The message bus and the status log are expressed as port traits in
//! `smartpark-app` and implemented by adapter crates.

pub mod carpark;
pub mod event;
pub mod time;
pub mod wire;
