//! MQTT transport configuration.

use serde::Deserialize;

/// Connection and topic settings for the MQTT transport.
///
/// Field names mirror the kebab-case keys of the car-park config file.
/// Every field has a default so the settings can be given partially.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MqttSettings {
    /// Broker hostname or IP address.
    pub broker: String,
    /// Broker TCP port.
    pub port: u16,
    /// MQTT client identifier.
    pub client_id: String,
    /// Topic carrying raw sensor events.
    pub sensor_topic: String,
    /// Topic carrying derived status events.
    pub status_topic: String,
    /// First segment of the device topic string.
    pub topic_root: String,
    /// Location segment of the device topic string.
    pub location: String,
    /// Trailing qualifier segment of the device topic string.
    pub topic_qualifier: String,
    /// Keep-alive interval in seconds.
    pub keep_alive_secs: u16,
}

impl Default for MqttSettings {
    fn default() -> Self {
        Self {
            broker: "localhost".to_string(),
            port: 1883,
            client_id: "smartpark".to_string(),
            sensor_topic: "sensor".to_string(),
            status_topic: "carpark".to_string(),
            topic_root: "smartpark".to_string(),
            location: "moondalup".to_string(),
            topic_qualifier: "status".to_string(),
            keep_alive_secs: 30,
        }
    }
}

impl MqttSettings {
    /// Topic string identifying one device on the bus:
    /// `<topic-root>/<location>/<name>/<topic-qualifier>`.
    #[must_use]
    pub fn device_topic(&self, name: &str) -> String {
        format!(
            "{}/{}/{name}/{}",
            self.topic_root, self.location, self.topic_qualifier
        )
    }
}
