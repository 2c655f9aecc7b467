//! Time and timestamp helpers.

use chrono::{DateTime, Local, Utc};

/// UTC timestamp used for `last_updated`.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Local wall-clock time as `HH:MM`, the format used on the wire.
#[must_use]
pub fn clock_time() -> String {
    Local::now().format("%H:%M").to_string()
}

/// Local date as `YYYY-MM-DD`, used to stamp log lines.
#[must_use]
pub fn clock_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
