//! Structured logging for the hosted process launcher shim.
//!
//! Wraps `tracing-subscriber` setup so every binary in the workspace logs the
//! same way: JSON by default, pretty output for development, filtered with
//! `EnvFilter` directives.

#![warn(missing_docs)]

pub mod error;
pub mod logging;

pub use error::TelemetryError;
pub use logging::{create_env_filter, init_logging, LogConfig};

/// Result type for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;
