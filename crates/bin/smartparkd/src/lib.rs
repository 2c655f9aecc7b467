//! Shared pieces of the smartpark binaries: configuration loading and
//! tracing setup. The daemons themselves live in `main.rs` (`smartparkd`)
//! and `bin/detectord.rs` (`detectord`).

pub mod config;

use tracing_subscriber::EnvFilter;

/// Initialise tracing with an env-filter, honouring `RUST_LOG`.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
