//! Error types for tickoff.
//!
//! The todo core itself never fails: invalid input is a silent no-op or is
//! clamped. [`TickoffError`] covers the surfaces around it, namely loading
//! configuration and decoding events fed to the headless host.

use thiserror::Error;

/// The main error type for tickoff operations.
///
/// # Examples
///
/// ```
/// use tickoff::TickoffError;
///
/// fn validate() -> Result<(), TickoffError> {
///     Err(TickoffError::Config("arm_threshold must be below max_offset".to_string()))
/// }
///
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum TickoffError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from reading a configuration file or writing logs.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or malformed.
    ///
    /// Raised by the strict TOML loader. The lenient key/value loader falls
    /// back to defaults instead.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An event line could not be decoded.
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<toml::de::Error> for TickoffError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TickoffError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

/// A specialized `Result` type for tickoff operations.
pub type Result<T> = std::result::Result<T, TickoffError>;
