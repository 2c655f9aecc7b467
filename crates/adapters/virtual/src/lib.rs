//! # smartpark-adapter-virtual
//!
//! Simulated car-detector sensor. Stands in for the physical entry/exit
//! detectors during demos and tests: each detection drifts the local
//! temperature by up to ±2 °C and produces an encoded sensor payload.
//!
//! Range clamping happens here, at the sensor boundary. The aggregator
//! records whatever value it is sent.

use rand::Rng;

use smartpark_domain::event::Action;
use smartpark_domain::{time, wire};

/// Coldest reading the simulated sensor will report.
pub const MIN_TEMPERATURE: i32 = 10;
/// Hottest reading the simulated sensor will report.
pub const MAX_TEMPERATURE: i32 = 35;

/// Simulated entry/exit detector with an attached temperature sensor.
#[derive(Debug)]
pub struct CarDetector {
    temperature: i32,
}

impl Default for CarDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl CarDetector {
    /// Start with a random plausible temperature.
    #[must_use]
    pub fn new() -> Self {
        let temperature = rand::thread_rng().gen_range(MIN_TEMPERATURE..=MAX_TEMPERATURE);
        Self { temperature }
    }

    #[must_use]
    pub fn temperature(&self) -> i32 {
        self.temperature
    }

    /// Record a new reading, clamped to the supported sensor range.
    pub fn set_temperature(&mut self, value: i32) {
        self.temperature = value.clamp(MIN_TEMPERATURE, MAX_TEMPERATURE);
    }

    /// Drift the temperature by up to ±2 °C.
    pub fn update_temperature(&mut self) {
        let drift = rand::thread_rng().gen_range(-2..=2);
        self.set_temperature(self.temperature + drift);
    }

    /// Produce the wire payload for a car crossing the boundary now.
    pub fn detect(&mut self, action: Action) -> String {
        self.update_temperature();
        wire::encode_sensor_event(action, &time::clock_time(), self.temperature)
    }

    /// Produce a payload for a random crossing, entry or exit at even odds.
    pub fn detect_random(&mut self) -> String {
        let action = if rand::thread_rng().gen_bool(0.5) {
            Action::Entry
        } else {
            Action::Exit
        };
        self.detect(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_within_the_sensor_range() {
        let detector = CarDetector::new();
        assert!(detector.temperature() >= MIN_TEMPERATURE);
        assert!(detector.temperature() <= MAX_TEMPERATURE);
    }

    #[test]
    fn should_clamp_readings_above_the_maximum() {
        let mut detector = CarDetector::new();
        detector.set_temperature(40);
        assert_eq!(detector.temperature(), MAX_TEMPERATURE);
    }

    #[test]
    fn should_clamp_readings_below_the_minimum() {
        let mut detector = CarDetector::new();
        detector.set_temperature(-10);
        assert_eq!(detector.temperature(), MIN_TEMPERATURE);
    }

    #[test]
    fn should_stay_in_range_while_drifting() {
        let mut detector = CarDetector::new();
        for _ in 0..100 {
            detector.update_temperature();
            assert!(detector.temperature() >= MIN_TEMPERATURE);
            assert!(detector.temperature() <= MAX_TEMPERATURE);
        }
    }

    #[test]
    fn should_produce_payloads_in_the_sensor_wire_format() {
        let mut detector = CarDetector::new();
        let payload = detector.detect(Action::Entry);
        assert!(payload.starts_with("ACTION: entry, TIME: "));
        assert!(payload.contains(", TEMPC: "));
    }

    #[test]
    fn should_classify_random_detections_as_entry_or_exit() {
        let mut detector = CarDetector::new();
        for _ in 0..20 {
            let payload = detector.detect_random();
            assert!(
                payload.starts_with("ACTION: entry") || payload.starts_with("ACTION: exit")
            );
        }
    }
}
