//! Configuration management for Veil.
//!
//! TOML-based configuration loading, parsing, and validation with
//! environment variable substitution and overrides.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use veil::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("veil.toml")?;
//!
//! if let Some(remote) = &config.remote {
//!     println!("Remote detector: {}", remote.base_url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [detection]
//! confidence_threshold = 0.7
//!
//! [detection.audit]
//! enabled = true
//! log_path = "./audit/detections.log"
//!
//! [remote]
//! base_url = "http://localhost:5000"
//! api_key = "${VEIL_REMOTE_API_KEY}"
//! timeout_seconds = 3
//! ```
//!
//! # Environment Variables
//!
//! Use `${VAR_NAME}` syntax in the TOML file for substitution, or
//! `VEIL_<SECTION>_<KEY>` variables to override loaded values
//! (e.g. `VEIL_REMOTE_BASE_URL`, `VEIL_APPLICATION_LOG_LEVEL`).

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::load_config;
pub use schema::{ApplicationConfig, LoggingConfig, RemoteConfig, VeilConfig};
pub use secret::{secret_string, secret_string_opt, SecretString, SecretValue};
