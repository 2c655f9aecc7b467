//! MQTT adapter error types.

/// Errors raised by the MQTT transport.
#[derive(Debug, thiserror::Error)]
pub enum MqttError {
    /// The broker handshake failed. Fatal at startup, never retried there.
    #[error("failed to connect to MQTT broker at {broker}:{port}")]
    Connect {
        broker: String,
        port: u16,
        #[source]
        source: rumqttc::ConnectionError,
    },
    /// A client request (subscribe or publish) could not be queued.
    #[error("MQTT client request failed")]
    Client(#[source] rumqttc::ClientError),
}
