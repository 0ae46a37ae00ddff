//! Domain error types
//!
//! This module defines the error hierarchy for Veil. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Veil error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum VeilError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern library errors (invalid TOML, bad regex, unknown category)
    #[error("Pattern library error: {0}")]
    Pattern(String),

    /// Remote detector errors
    #[error("Remote detector error: {0}")]
    Remote(#[from] RemoteError),

    /// Audit logging errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Remote detector errors
///
/// Errors that occur when calling the external PII detection service.
/// These errors don't expose third-party HTTP client types. All of them
/// are recoverable: the detection aggregator degrades to local-only
/// results instead of surfacing them to the caller.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// Failed to connect to the remote detector
    #[error("Failed to connect to remote detector: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout after {0}s")]
    Timeout(u64),

    /// Server error (5xx)
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    /// Client error (4xx)
    #[error("Client error: {status} - {message}")]
    ClientError { status: u16, message: String },

    /// Response body did not match the expected shape
    #[error("Invalid response from remote detector: {0}")]
    InvalidResponse(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for VeilError {
    fn from(err: std::io::Error) -> Self {
        VeilError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for VeilError {
    fn from(err: serde_json::Error) -> Self {
        VeilError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for VeilError {
    fn from(err: toml::de::Error) -> Self {
        VeilError::Configuration(format!("TOML parse error: {err}"))
    }
}
