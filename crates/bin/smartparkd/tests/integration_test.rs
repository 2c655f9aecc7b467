//! End-to-end aggregator flow without a broker: raw sensor payloads go in
//! through the same entry point the MQTT receive loop uses, statuses come
//! out through an in-memory bus, and the real file log writes to a
//! temporary directory.

use std::future::Future;
use std::sync::{Arc, Mutex};

use smartpark_adapter_logfile::FileStatusLog;
use smartpark_app::aggregator::{Aggregator, ApplyError};
use smartpark_app::ports::{PublishError, StatusPublisher};
use smartpark_domain::carpark::CarPark;

#[derive(Default)]
struct MemoryBus {
    published: Mutex<Vec<String>>,
}

impl StatusPublisher for MemoryBus {
    fn publish_status(
        &self,
        payload: String,
    ) -> impl Future<Output = Result<(), PublishError>> + Send {
        self.published.lock().unwrap().push(payload);
        async { Ok(()) }
    }
}

#[tokio::test]
async fn should_aggregate_a_sequence_of_sensor_payloads() {
    let dir = tempfile::tempdir().unwrap();
    let bus = Arc::new(MemoryBus::default());
    let log = FileStatusLog::new(dir.path(), "Tiny Car Park");
    let carpark = CarPark::new("Tiny Car Park", 2, 0);
    let mut aggregator = Aggregator::new(carpark, Arc::clone(&bus), Some(log));

    aggregator
        .handle_payload(b"ACTION: entry, TIME: 08:00, TEMPC: 21")
        .await
        .unwrap();
    aggregator
        .handle_payload(b"ACTION: entry, TIME: 08:05, TEMPC: 22")
        .await
        .unwrap();
    aggregator
        .handle_payload(b"ACTION: exit, TIME: 08:30, TEMPC: banana")
        .await
        .unwrap();

    let published = bus.published.lock().unwrap();
    assert_eq!(published.len(), 3);
    assert!(published[0].contains("SPACES: 1, TEMPC: 21"));
    assert!(published[1].contains("SPACES: FULL, TEMPC: 22"));
    assert!(published[2].contains("SPACES: 1, TEMPC: unknown"));

    let contents = std::fs::read_to_string(dir.path().join("tiny-car-park.log")).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.starts_with("DATE: ")));
    assert!(lines[1].ends_with(&published[1][..]));
}

#[tokio::test]
async fn should_keep_publishing_when_the_log_is_unwritable() {
    let dir = tempfile::tempdir().unwrap();
    // A file where the log directory should be makes every append fail.
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, b"not a directory").unwrap();

    let bus = Arc::new(MemoryBus::default());
    let log = FileStatusLog::new(blocker.join("logs"), "Tiny Car Park");
    let carpark = CarPark::new("Tiny Car Park", 2, 0);
    let mut aggregator = Aggregator::new(carpark, Arc::clone(&bus), Some(log));

    let result = aggregator
        .handle_payload(b"ACTION: entry, TIME: 08:00, TEMPC: 21")
        .await;

    assert!(matches!(result, Err(ApplyError::Log(_))));
    let published = bus.published.lock().unwrap();
    assert_eq!(published.len(), 1);
    assert!(published[0].contains("SPACES: 1, TEMPC: 21"));
}

#[tokio::test]
async fn should_survive_a_legacy_payload_without_an_action_field() {
    let dir = tempfile::tempdir().unwrap();
    let bus = Arc::new(MemoryBus::default());
    let log = FileStatusLog::new(dir.path(), "Tiny Car Park");
    let carpark = CarPark::new("Tiny Car Park", 2, 1);
    let mut aggregator = Aggregator::new(carpark, Arc::clone(&bus), Some(log));

    // Substring fallback: classifies as an exit despite the mangled field.
    aggregator
        .handle_payload(b"MOVE: exit, TIME: 09:00")
        .await
        .unwrap();

    assert_eq!(aggregator.carpark().total_cars(), 0);
    assert!(bus.published.lock().unwrap()[0].contains("SPACES: 2"));
}
