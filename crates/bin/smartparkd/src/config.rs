//! Configuration loading — the car-park TOML settings record.
//!
//! The file holds a single `[config]` table with kebab-case keys. Unlike
//! the adapter settings, this file is required: a missing or unreadable
//! file is a fatal startup error, printed and never retried.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use smartpark_adapter_mqtt::MqttSettings;

#[derive(Debug, Deserialize)]
struct ConfigFile {
    config: Config,
}

/// Validated car-park settings record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Display name of the car park; also names the log file.
    pub name: String,
    pub total_spaces: u32,
    pub total_cars: u32,
    /// MQTT broker hostname or IP address.
    pub broker: String,
    pub port: u16,
    pub topic_root: String,
    pub location: String,
    pub topic_qualifier: String,
    /// Directory for the append-only status log, created on demand.
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from("logs")
}

impl Config {
    /// Load the settings record from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file is missing or unreadable
    /// and [`ConfigError::Parse`] when it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(file.config)
    }

    /// Build the MQTT transport settings for this car park.
    ///
    /// The device topic string (`<topic-root>/<location>/<name>/<qualifier>`)
    /// doubles as the client identifier, normalised for broker friendliness.
    #[must_use]
    pub fn mqtt_settings(&self) -> MqttSettings {
        let mut settings = MqttSettings {
            broker: self.broker.clone(),
            port: self.port,
            topic_root: self.topic_root.clone(),
            location: self.location.clone(),
            topic_qualifier: self.topic_qualifier.clone(),
            ..MqttSettings::default()
        };
        settings.client_id = settings
            .device_topic(&self.name)
            .to_lowercase()
            .replace([' ', '/'], "-");
        settings
    }
}

/// Fatal configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file is missing or unreadable.
    #[error("unable to read config file '{}'", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid TOML.
    #[error("unable to parse config file '{}'", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
