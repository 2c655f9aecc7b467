//! Car-park aggregator — the single writer of car-park state.
//!
//! Subscribed sensor payloads are decoded, applied to the [`CarPark`], and
//! answered with exactly one derived status publication plus one log append.
//! The aggregator performs no concurrency of its own: it relies on the
//! transport delivering messages one at a time, in arrival order (see
//! [`Aggregator::apply`]).

use smartpark_domain::carpark::CarPark;
use smartpark_domain::event::{SensorEvent, StatusEvent};
use smartpark_domain::{time, wire};

use crate::ports::{LogError, PublishError, StatusLog, StatusPublisher};

/// Failure modes of a single [`Aggregator::apply`] call.
///
/// Both side effects are attempted for every accepted event; the variant
/// names the one that failed. `Log` means the status *was* handed to the
/// bus. Neither variant interrupts the event stream: the state change is
/// retained and the receive loop carries on.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    /// The status payload could not be handed to the bus.
    #[error("failed to publish status update")]
    Publish(#[source] PublishError),
    /// The status was published but could not be appended to the log.
    #[error("status published but not logged")]
    Log(#[source] LogError),
}

/// Owns the [`CarPark`] state and applies incoming sensor events.
///
/// Constructed explicitly at startup; there is no process-wide instance.
/// `log` is `None` in run modes with logging disabled, which also makes the
/// aggregator usable headlessly without any IO beyond the publisher.
pub struct Aggregator<P, L> {
    carpark: CarPark,
    publisher: P,
    log: Option<L>,
}

impl<P: StatusPublisher, L: StatusLog> Aggregator<P, L> {
    pub fn new(carpark: CarPark, publisher: P, log: Option<L>) -> Self {
        Self {
            carpark,
            publisher,
            log,
        }
    }

    #[must_use]
    pub fn carpark(&self) -> &CarPark {
        &self.carpark
    }

    /// Decode a raw sensor payload and apply it.
    ///
    /// Decoding never rejects a message: unparseable optional fields are
    /// surfaced as warnings and the event is still applied.
    ///
    /// # Errors
    ///
    /// Same as [`apply`](Self::apply).
    pub async fn handle_payload(&mut self, payload: &[u8]) -> Result<StatusEvent, ApplyError> {
        let text = String::from_utf8_lossy(payload);
        let decoded = wire::decode_sensor_event(&text);
        for warning in &decoded.warnings {
            tracing::warn!(payload = %text, "{warning}");
        }
        self.apply(decoded.event).await
    }

    /// Apply one sensor event and publish the derived status.
    ///
    /// Callers must not invoke this concurrently. Message delivery for one
    /// subscription is serialized by the transport; a transport that moves
    /// to parallel workers must put an exclusive lock around the whole
    /// aggregator.
    ///
    /// # Errors
    ///
    /// [`ApplyError::Publish`] when the bus rejects the payload,
    /// [`ApplyError::Log`] when the append fails after publication.
    pub async fn apply(&mut self, event: SensorEvent) -> Result<StatusEvent, ApplyError> {
        self.carpark.apply(&event);
        self.publish_current().await
    }

    /// Publish (and log) the current state without applying an event.
    ///
    /// Used once at startup to announce the initial occupancy.
    ///
    /// # Errors
    ///
    /// Same as [`apply`](Self::apply).
    pub async fn publish_current(&self) -> Result<StatusEvent, ApplyError> {
        let status = self.carpark.status(time::clock_time());
        let payload = wire::encode_status_event(&status);
        tracing::info!(carpark = %self.carpark.name(), %payload, "status update");

        // Both side effects are attempted regardless of the other's outcome;
        // only then is the first failure reported.
        let published = self.publisher.publish_status(payload.clone()).await;
        let logged = match &self.log {
            Some(log) => log.append(&payload).await,
            None => Ok(()),
        };
        published.map_err(ApplyError::Publish)?;
        logged.map_err(ApplyError::Log)?;
        Ok(status)
    }
}
