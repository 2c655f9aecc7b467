//! # smartpark-adapter-mqtt
//!
//! MQTT transport adapter built on rumqttc.
//!
//! ## Responsibilities
//! - Connect to the broker (fatal at startup if unreachable)
//! - Subscribe to the sensor topic and deliver each arriving payload to the
//!   aggregator, one at a time, in arrival order
//! - Publish derived status payloads via the [`StatusPublisher`] port
//!
//! ## Dependency rule
//! Depends on `smartpark-app` (port traits) only.

mod config;
mod error;

pub use config::MqttSettings;
pub use error::MqttError;

use std::future::Future;
use std::time::Duration;

use rumqttc::{AsyncClient, Event, EventLoop, MqttOptions, Packet, QoS};

use smartpark_app::aggregator::Aggregator;
use smartpark_app::ports::{PublishError, StatusLog, StatusPublisher};

/// Delay before re-polling after a connection error; rumqttc reconnects on
/// the next poll.
const RECONNECT_DELAY: Duration = Duration::from_secs(2);

/// Connected MQTT transport owning the client and its event loop.
pub struct MqttTransport {
    client: AsyncClient,
    eventloop: EventLoop,
    sensor_topic: String,
    status_topic: String,
}

impl MqttTransport {
    /// Connect to the configured broker.
    ///
    /// Waits for the broker's `ConnAck` so that an unreachable broker shows
    /// up as a startup failure instead of a silent retry loop.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError::Connect`] when the broker cannot be reached.
    pub async fn connect(settings: &MqttSettings) -> Result<Self, MqttError> {
        let mut options = MqttOptions::new(
            settings.client_id.clone(),
            settings.broker.clone(),
            settings.port,
        );
        options.set_keep_alive(Duration::from_secs(u64::from(settings.keep_alive_secs)));

        let (client, mut eventloop) = AsyncClient::new(options, 64);
        loop {
            match eventloop.poll().await {
                Ok(Event::Incoming(Packet::ConnAck(_))) => break,
                Ok(_) => {}
                Err(source) => {
                    return Err(MqttError::Connect {
                        broker: settings.broker.clone(),
                        port: settings.port,
                        source,
                    });
                }
            }
        }
        tracing::info!(broker = %settings.broker, port = settings.port, "connected to MQTT broker");

        Ok(Self {
            client,
            eventloop,
            sensor_topic: settings.sensor_topic.clone(),
            status_topic: settings.status_topic.clone(),
        })
    }

    /// Handle for publishing to the status topic, for the aggregator side.
    #[must_use]
    pub fn publisher(&self) -> MqttPublisher {
        MqttPublisher {
            client: self.client.clone(),
            topic: self.status_topic.clone(),
        }
    }

    /// Run the receive loop, delivering every sensor payload to `aggregator`.
    ///
    /// Messages are handled one at a time, in arrival order; the aggregator
    /// relies on this serialisation instead of a lock. Per-message failures
    /// are logged and never stop the loop; connection drops are retried.
    /// Runs until the process terminates.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError::Client`] when the initial subscription cannot
    /// be queued.
    pub async fn run<P, L>(mut self, mut aggregator: Aggregator<P, L>) -> Result<(), MqttError>
    where
        P: StatusPublisher,
        L: StatusLog,
    {
        self.client
            .subscribe(self.sensor_topic.clone(), QoS::AtMostOnce)
            .await
            .map_err(MqttError::Client)?;

        loop {
            match self.eventloop.poll().await {
                Ok(Event::Incoming(Packet::Publish(message))) => {
                    if message.topic != self.sensor_topic {
                        continue;
                    }
                    tracing::debug!(topic = %message.topic, "sensor message received");
                    if let Err(err) = aggregator.handle_payload(&message.payload).await {
                        tracing::warn!(error = %err, "sensor event not fully processed");
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    tracing::error!(error = %err, "MQTT connection error, retrying");
                    tokio::time::sleep(RECONNECT_DELAY).await;
                }
            }
        }
    }

    /// Turn the transport into a standalone publisher on `topic`, driving
    /// the connection from a background task. For producer-only clients
    /// such as the simulated detector.
    #[must_use]
    pub fn into_publisher(self, topic: impl Into<String>) -> MqttPublisher {
        let Self {
            client,
            mut eventloop,
            ..
        } = self;
        tokio::spawn(async move {
            loop {
                if let Err(err) = eventloop.poll().await {
                    tracing::error!(error = %err, "MQTT connection error, retrying");
                    tokio::time::sleep(RECONNECT_DELAY).await;
                }
            }
        });
        MqttPublisher {
            client,
            topic: topic.into(),
        }
    }
}

/// Publishing handle bound to one topic.
#[derive(Clone)]
pub struct MqttPublisher {
    client: AsyncClient,
    topic: String,
}

impl MqttPublisher {
    /// Publish one payload.
    ///
    /// # Errors
    ///
    /// Returns [`MqttError::Client`] when the request cannot be queued.
    pub async fn publish(&self, payload: String) -> Result<(), MqttError> {
        self.client
            .publish(self.topic.clone(), QoS::AtLeastOnce, false, payload)
            .await
            .map_err(MqttError::Client)
    }
}

impl StatusPublisher for MqttPublisher {
    fn publish_status(
        &self,
        payload: String,
    ) -> impl Future<Output = Result<(), PublishError>> + Send {
        async move { self.publish(payload).await.map_err(PublishError::new) }
    }
}
