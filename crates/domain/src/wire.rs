//! Wire codec for the line-oriented `KEY: value` event format.
//!
//! Payloads are comma-separated `KEY: value` fields, order-independent on
//! decode. The two topics use asymmetric formats, so decode→encode is not a
//! round trip:
//!
//! - sensor → aggregator: `ACTION: <entry|exit>, TIME: <HH:MM>, TEMPC: <int>`
//! - aggregator → display: `TIME: <HH:MM>, SPACES: <int|FULL>, TEMPC: <int|unknown>`

use crate::event::{Action, SensorEvent, StatusEvent, TemperatureReading};

/// Non-fatal oddity noticed while decoding a sensor payload.
///
/// Warnings never reject a message; the event is applied regardless.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseWarning {
    /// A `TEMPC` field was present but its value is not an integer. The
    /// reading counts as invalid, which resets the known temperature.
    #[error("unable to parse temperature {value:?} as an integer")]
    Temperature { value: String },
}

/// A decoded sensor event together with any warnings raised on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSensorEvent {
    pub event: SensorEvent,
    pub warnings: Vec<ParseWarning>,
}

/// Decode a raw sensor payload.
///
/// Splits on `,`, then each field on the first `:`, trimming whitespace.
/// Unknown keys are ignored and fields without a `:` are skipped. Decoding
/// never fails: the only structural guarantee is an action classification,
/// and a message with no recognisable action defaults to an entry.
#[must_use]
pub fn decode_sensor_event(payload: &str) -> DecodedSensorEvent {
    let mut action_field = None;
    let mut time = String::new();
    let mut temperature = TemperatureReading::Missing;
    let mut warnings = Vec::new();

    for field in payload.split(',') {
        let Some((key, value)) = field.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "ACTION" => action_field = Some(value.to_string()),
            "TIME" => time = value.to_string(),
            "TEMPC" => match value.parse::<i32>() {
                Ok(degrees) => temperature = TemperatureReading::Reading(degrees),
                Err(_) => {
                    temperature = TemperatureReading::Invalid;
                    warnings.push(ParseWarning::Temperature {
                        value: value.to_string(),
                    });
                }
            },
            _ => {}
        }
    }

    let event = SensorEvent {
        action: classify_action(action_field.as_deref(), payload),
        time,
        temperature,
    };
    DecodedSensorEvent { event, warnings }
}

/// Classify the event action.
///
/// An exact `ACTION` field match wins. Legacy producers may omit or mangle
/// the field, so a payload containing `exit` anywhere still classifies as
/// an exit, and everything else defaults to entry. The fallback can misread
/// a coincidental `exit` in an unrelated field; that ambiguity is accepted
/// for wire compatibility.
fn classify_action(field: Option<&str>, payload: &str) -> Action {
    match field {
        Some("entry") => Action::Entry,
        Some("exit") => Action::Exit,
        _ if payload.contains("exit") => Action::Exit,
        _ => Action::Entry,
    }
}

/// Encode a status event for the display topic.
///
/// A full car park renders as the literal `FULL`, an unknown temperature as
/// `unknown`.
#[must_use]
pub fn encode_status_event(status: &StatusEvent) -> String {
    let spaces = if status.available_spaces == 0 {
        "FULL".to_string()
    } else {
        status.available_spaces.to_string()
    };
    let tempc = status
        .temperature
        .map_or_else(|| "unknown".to_string(), |degrees| degrees.to_string());
    format!("TIME: {}, SPACES: {spaces}, TEMPC: {tempc}", status.time)
}

/// Encode a sensor event. Producer side, used by the simulated detector.
#[must_use]
pub fn encode_sensor_event(action: Action, time: &str, temperature: i32) -> String {
    format!("ACTION: {action}, TIME: {time}, TEMPC: {temperature}")
}

/// Prefix a published status payload with the date for the persistent log.
#[must_use]
pub fn encode_log_line(date: &str, status_payload: &str) -> String {
    format!("DATE: {date}, {status_payload}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_a_well_formed_entry_event() {
        let decoded = decode_sensor_event("ACTION: entry, TIME: 08:15, TEMPC: 21");
        assert_eq!(decoded.event.action, Action::Entry);
        assert_eq!(decoded.event.time, "08:15");
        assert_eq!(decoded.event.temperature, TemperatureReading::Reading(21));
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn should_decode_a_well_formed_exit_event() {
        let decoded = decode_sensor_event("ACTION: exit, TIME: 17:40, TEMPC: -3");
        assert_eq!(decoded.event.action, Action::Exit);
        assert_eq!(decoded.event.temperature, TemperatureReading::Reading(-3));
    }

    #[test]
    fn should_decode_fields_in_any_order() {
        let decoded = decode_sensor_event("TEMPC: 30, ACTION: exit, TIME: 12:00");
        assert_eq!(decoded.event.action, Action::Exit);
        assert_eq!(decoded.event.time, "12:00");
        assert_eq!(decoded.event.temperature, TemperatureReading::Reading(30));
    }

    #[test]
    fn should_trim_whitespace_around_keys_and_values() {
        let decoded = decode_sensor_event("  ACTION :  entry ,TIME:09:05, TEMPC:  7 ");
        assert_eq!(decoded.event.action, Action::Entry);
        assert_eq!(decoded.event.time, "09:05");
        assert_eq!(decoded.event.temperature, TemperatureReading::Reading(7));
    }

    #[test]
    fn should_warn_on_an_unparseable_temperature_without_failing() {
        let decoded = decode_sensor_event("ACTION: entry, TIME: 08:15, TEMPC: banana");
        assert_eq!(decoded.event.action, Action::Entry);
        assert_eq!(decoded.event.temperature, TemperatureReading::Invalid);
        assert_eq!(
            decoded.warnings,
            vec![ParseWarning::Temperature {
                value: "banana".to_string()
            }]
        );
    }

    #[test]
    fn should_report_a_missing_temperature_field() {
        let decoded = decode_sensor_event("ACTION: exit, TIME: 08:15");
        assert_eq!(decoded.event.temperature, TemperatureReading::Missing);
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn should_prefer_the_action_field_over_a_coincidental_exit_substring() {
        let decoded = decode_sensor_event("ACTION: entry, TIME: 10:00, NOTE: exit lane closed");
        assert_eq!(decoded.event.action, Action::Entry);
    }

    #[test]
    fn should_fall_back_to_substring_matching_without_an_action_field() {
        // Regression coverage for the legacy wire ambiguity: any `exit`
        // substring classifies the message when ACTION is absent.
        let decoded = decode_sensor_event("TIME: 10:00, NOTE: parked near exit");
        assert_eq!(decoded.event.action, Action::Exit);
    }

    #[test]
    fn should_default_an_unclassifiable_message_to_entry() {
        let decoded = decode_sensor_event("complete garbage");
        assert_eq!(decoded.event.action, Action::Entry);
        assert_eq!(decoded.event.time, "");
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn should_fall_back_when_the_action_field_is_unrecognised() {
        let decoded = decode_sensor_event("ACTION: departure, TIME: 10:00");
        assert_eq!(decoded.event.action, Action::Entry);
    }

    #[test]
    fn should_encode_status_in_the_documented_format() {
        let status = StatusEvent {
            time: "14:05".to_string(),
            available_spaces: 7,
            temperature: Some(23),
        };
        assert_eq!(
            encode_status_event(&status),
            "TIME: 14:05, SPACES: 7, TEMPC: 23"
        );
    }

    #[test]
    fn should_encode_a_full_car_park_as_the_literal_full() {
        let status = StatusEvent {
            time: "14:05".to_string(),
            available_spaces: 0,
            temperature: Some(23),
        };
        assert_eq!(
            encode_status_event(&status),
            "TIME: 14:05, SPACES: FULL, TEMPC: 23"
        );
    }

    #[test]
    fn should_encode_an_unknown_temperature_as_the_literal_unknown() {
        let status = StatusEvent {
            time: "14:05".to_string(),
            available_spaces: 3,
            temperature: None,
        };
        assert_eq!(
            encode_status_event(&status),
            "TIME: 14:05, SPACES: 3, TEMPC: unknown"
        );
    }

    #[test]
    fn should_encode_sensor_events_in_the_documented_format() {
        assert_eq!(
            encode_sensor_event(Action::Exit, "08:15", 21),
            "ACTION: exit, TIME: 08:15, TEMPC: 21"
        );
    }

    #[test]
    fn should_encode_log_lines_with_a_date_prefix() {
        assert_eq!(
            encode_log_line("2026-08-27", "TIME: 14:05, SPACES: FULL, TEMPC: 23"),
            "DATE: 2026-08-27, TIME: 14:05, SPACES: FULL, TEMPC: 23"
        );
    }

    #[test]
    fn should_roundtrip_encoded_sensor_events_through_decode() {
        let payload = encode_sensor_event(Action::Exit, "23:59", -10);
        let decoded = decode_sensor_event(&payload);
        assert_eq!(decoded.event.action, Action::Exit);
        assert_eq!(decoded.event.time, "23:59");
        assert_eq!(decoded.event.temperature, TemperatureReading::Reading(-10));
    }
}
