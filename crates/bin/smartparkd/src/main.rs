//! # smartparkd — car-park aggregator daemon
//!
//! Composition root that wires the adapters together and runs the receive
//! loop.
//!
//! ## Responsibilities
//! - Load the car-park config file (fatal if missing)
//! - Connect to the MQTT broker (fatal if unreachable)
//! - Construct the aggregator with its publisher and file log
//! - Announce the initial state, then run the receive loop
//! - Shut down gracefully on ctrl-c
//!
//! ## Dependency rule
//! This is the only crate that depends on all the others. It is wiring;
//! no domain logic belongs here.

use std::path::Path;

use smartpark_adapter_logfile::FileStatusLog;
use smartpark_adapter_mqtt::MqttTransport;
use smartpark_app::aggregator::{Aggregator, ApplyError};
use smartpark_domain::carpark::CarPark;
use smartparkd::config::Config;

const DEFAULT_CONFIG: &str = "config/city_square_parking.toml";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    smartparkd::init_tracing("smartparkd=info,smartpark=info");

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

    let settings = config.mqtt_settings();
    let transport = MqttTransport::connect(&settings).await?;

    let carpark = CarPark::new(config.name.clone(), config.total_spaces, config.total_cars);
    let log = FileStatusLog::new(&config.log_dir, &config.name);
    let aggregator = Aggregator::new(carpark, transport.publisher(), Some(log));

    // Announce the starting occupancy before any sensor traffic arrives.
    // A log failure here is worth knowing about but not worth dying for.
    match aggregator.publish_current().await {
        Ok(_) => {}
        Err(err @ ApplyError::Log(_)) => tracing::warn!(error = %err, "initial status not logged"),
        Err(err) => return Err(err.into()),
    }

    tracing::info!(
        carpark = %config.name,
        broker = %config.broker,
        "smartparkd aggregating sensor events"
    );

    tokio::select! {
        result = transport.run(aggregator) => result?,
        _ = tokio::signal::ctrl_c() => tracing::info!("shutdown signal received"),
    }

    Ok(())
}
