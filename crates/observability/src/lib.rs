//! Tracing and logging setup shared by hosts embedding the ledger crates.
//!
//! The domain crates only emit `tracing` events; a host calls [`init`] (or
//! [`init_with`]) once to decide where they go.

pub mod config;
pub mod subscriber;

pub use config::{ConfigError, LogFormat, TracingConfig};
pub use subscriber::init_with;

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    subscriber::init_with(&TracingConfig::from_env());
}
