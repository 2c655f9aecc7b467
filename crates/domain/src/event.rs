//! Sensor and status event value objects.
//!
//! Both are immutable once constructed: every bus message decodes into a
//! fresh value that is discarded after use. Nothing here is shared or
//! mutated across components.

/// Direction of a vehicle crossing the car-park boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Entry,
    Exit,
}

impl Action {
    /// The lowercase wire representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Exit => "exit",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Temperature reading carried by a sensor event.
///
/// A reading that is present but unparseable is distinct from a missing
/// one: an invalid reading resets the last known temperature to unknown,
/// while a missing field leaves it alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureReading {
    /// Degrees Celsius as reported by the sensor.
    Reading(i32),
    /// A `TEMPC` field was present but its value is not an integer.
    Invalid,
    /// The message carried no `TEMPC` field.
    Missing,
}

/// A parsed sensor message: a vehicle crossing plus an optional reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensorEvent {
    pub action: Action,
    /// Wall-clock `HH:MM` as reported by the producer.
    pub time: String,
    pub temperature: TemperatureReading,
}

/// Derived car-park status, produced after every accepted sensor event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEvent {
    /// Wall-clock `HH:MM` at aggregation time.
    pub time: String,
    /// Always derived from the totals, never stored independently.
    pub available_spaces: u32,
    /// `None` renders as `unknown` on the wire.
    pub temperature: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_actions_in_wire_form() {
        assert_eq!(Action::Entry.to_string(), "entry");
        assert_eq!(Action::Exit.to_string(), "exit");
    }

    #[test]
    fn should_distinguish_invalid_from_missing_readings() {
        assert_ne!(TemperatureReading::Invalid, TemperatureReading::Missing);
        assert_ne!(TemperatureReading::Reading(0), TemperatureReading::Missing);
    }
}
