//! # detectord — simulated car-detector daemon
//!
//! Headless replacement for the sensor-simulation window: publishes random
//! entry/exit events on the sensor topic at a fixed interval, with a
//! clamped random-walk temperature. Useful for demo runs against a live
//! `smartparkd`.
//!
//! The publish interval defaults to 5 seconds and can be overridden with
//! the `DETECTORD_INTERVAL_SECS` environment variable.

use std::path::Path;
use std::time::Duration;

use smartpark_adapter_mqtt::MqttTransport;
use smartpark_adapter_virtual::CarDetector;
use smartparkd::config::Config;

const DEFAULT_CONFIG: &str = "config/city_square_parking.toml";
const DEFAULT_INTERVAL_SECS: u64 = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    smartparkd::init_tracing("detectord=info,smartpark=info");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let config = match Config::load(Path::new(&config_path)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("fatal: {err}");
            if let Some(source) = std::error::Error::source(&err) {
                eprintln!("  caused by: {source}");
            }
            std::process::exit(1);
        }
    };

    let mut settings = config.mqtt_settings();
    settings.client_id.push_str("-detector");

    let interval_secs = std::env::var("DETECTORD_INTERVAL_SECS")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_INTERVAL_SECS);

    let transport = MqttTransport::connect(&settings).await?;
    let publisher = transport.into_publisher(settings.sensor_topic.clone());

    tracing::info!(
        carpark = %config.name,
        broker = %config.broker,
        interval_secs,
        "detectord publishing simulated sensor events"
    );

    let mut detector = CarDetector::new();
    let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let payload = detector.detect_random();
                tracing::info!(%payload, "sensor event");
                if let Err(err) = publisher.publish(payload).await {
                    tracing::warn!(error = %err, "failed to publish sensor event");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("shutdown signal received");
                break;
            }
        }
    }

    Ok(())
}
