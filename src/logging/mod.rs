//! Logging and observability
//!
//! Structured logging with JSON formatting, configurable log levels, and
//! local file logging with rotation. Degraded hybrid detections are logged
//! at `warn` so reduced coverage stays observable.
//!
//! # Example
//!
//! ```no_run
//! use veil::logging::init_logging;
//! use veil::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};
