//! Car-park state and its transitions.
//!
//! [`CarPark`] is exclusively owned and mutated by the aggregator. Available
//! spaces are always derived from the totals, never stored.

use crate::event::{Action, SensorEvent, StatusEvent, TemperatureReading};
use crate::time::{self, Timestamp};

/// Authoritative state of one monitored car park.
#[derive(Debug, Clone)]
pub struct CarPark {
    name: String,
    total_spaces: u32,
    total_cars: u32,
    temperature: Option<i32>,
    last_updated: Timestamp,
}

impl CarPark {
    /// Create a car park from configuration values. The temperature starts
    /// unknown until the first sensor reading arrives.
    #[must_use]
    pub fn new(name: impl Into<String>, total_spaces: u32, total_cars: u32) -> Self {
        Self {
            name: name.into(),
            total_spaces,
            total_cars,
            temperature: None,
            last_updated: time::now(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn total_spaces(&self) -> u32 {
        self.total_spaces
    }

    #[must_use]
    pub fn total_cars(&self) -> u32 {
        self.total_cars
    }

    /// Last known temperature; `None` when unknown.
    #[must_use]
    pub fn temperature(&self) -> Option<i32> {
        self.temperature
    }

    #[must_use]
    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    /// Spaces left in the car park, never negative.
    #[must_use]
    pub fn available_spaces(&self) -> u32 {
        self.total_spaces.saturating_sub(self.total_cars)
    }

    /// Apply one sensor event.
    ///
    /// Entries are accepted even when the car park is full: a vehicle may be
    /// circling without finding a spot, so `total_cars` can exceed
    /// `total_spaces`. Exits on an empty car park are silently absorbed,
    /// since not every real entry is observed.
    ///
    /// The temperature is unclamped last-value-wins; an invalid reading
    /// resets it to unknown, a missing one leaves it untouched.
    pub fn apply(&mut self, event: &SensorEvent) {
        match event.temperature {
            TemperatureReading::Reading(degrees) => self.temperature = Some(degrees),
            TemperatureReading::Invalid => self.temperature = None,
            TemperatureReading::Missing => {}
        }
        match event.action {
            Action::Entry => self.total_cars = self.total_cars.saturating_add(1),
            Action::Exit => self.total_cars = self.total_cars.saturating_sub(1),
        }
        self.last_updated = time::now();
    }

    /// Snapshot the current state as a status event stamped with `clock`.
    #[must_use]
    pub fn status(&self, clock: impl Into<String>) -> StatusEvent {
        StatusEvent {
            time: clock.into(),
            available_spaces: self.available_spaces(),
            temperature: self.temperature,
        }
    }
}
