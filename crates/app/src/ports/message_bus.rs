//! Message bus port — outbound publishing of derived status payloads.

use std::future::Future;

/// Failure to hand a payload to the underlying transport.
#[derive(Debug, thiserror::Error)]
#[error("failed to publish status payload")]
pub struct PublishError(#[source] Box<dyn std::error::Error + Send + Sync>);

impl PublishError {
    /// Wrap a transport-specific error.
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }
}

/// Publishes encoded status payloads to the status topic.
///
/// Implemented by transport adapters. The aggregator calls this exactly
/// once per accepted sensor event and never blocks on network IO beyond
/// handing the payload over.
pub trait StatusPublisher {
    /// Publish one encoded status payload.
    fn publish_status(
        &self,
        payload: String,
    ) -> impl Future<Output = Result<(), PublishError>> + Send;
}

impl<T: StatusPublisher + Send + Sync> StatusPublisher for std::sync::Arc<T> {
    fn publish_status(
        &self,
        payload: String,
    ) -> impl Future<Output = Result<(), PublishError>> + Send {
        (**self).publish_status(payload)
    }
}
