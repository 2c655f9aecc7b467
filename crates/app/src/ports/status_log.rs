//! Status log port — append-only persistence of published status lines.

use std::future::Future;

/// Failure to append a line to the persistent status log.
#[derive(Debug, thiserror::Error)]
#[error("failed to append to the status log")]
pub struct LogError(#[from] pub std::io::Error);

/// Append-only sink for published status lines.
///
/// Every accepted sensor event produces one appended line. Appends are
/// scoped acquisitions: the underlying file is opened, written, and closed
/// on all paths, including failure.
pub trait StatusLog {
    /// Append one published status payload as a date-stamped line.
    fn append(&self, status_payload: &str) -> impl Future<Output = Result<(), LogError>> + Send;
}

impl<T: StatusLog + Send + Sync> StatusLog for std::sync::Arc<T> {
    fn append(&self, status_payload: &str) -> impl Future<Output = Result<(), LogError>> + Send {
        (**self).append(status_payload)
    }
}
