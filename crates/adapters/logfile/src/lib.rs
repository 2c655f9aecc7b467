//! # smartpark-adapter-logfile
//!
//! Append-only file log for published car-park status lines.
//!
//! One date-stamped line per published status:
//!
//! ```text
//! DATE: 2026-08-27, TIME: 14:05, SPACES: FULL, TEMPC: 23
//! ```
//!
//! The log directory is created on demand and the file is named after the
//! car park (lower-cased, spaces to hyphens). Each append opens, writes and
//! closes the file, so a failure never leaves a handle behind.

use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use smartpark_app::ports::{LogError, StatusLog};
use smartpark_domain::{time, wire};

/// Derive the log file stem from a car-park name.
#[must_use]
pub fn file_slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// [`StatusLog`] implementation backed by one append-only text file.
pub struct FileStatusLog {
    directory: PathBuf,
    path: PathBuf,
}

impl FileStatusLog {
    /// Log into `directory` (created on demand) under a file named after
    /// the car park.
    pub fn new(directory: impl Into<PathBuf>, carpark_name: &str) -> Self {
        let directory = directory.into();
        let path = directory.join(format!("{}.log", file_slug(carpark_name)));
        Self { directory, path }
    }

    /// Full path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatusLog for FileStatusLog {
    fn append(&self, status_payload: &str) -> impl Future<Output = Result<(), LogError>> + Send {
        async move {
            tokio::fs::create_dir_all(&self.directory).await?;
            let line = wire::encode_log_line(&time::clock_date(), status_payload);
            let mut file = tokio::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&self.path)
                .await?;
            file.write_all(line.as_bytes()).await?;
            file.write_all(b"\n").await?;
            Ok(())
        }
    }
}
