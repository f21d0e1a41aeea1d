//! Error handling for the PepMix web service
//!
//! The calculation core is total over its inputs and never fails; the only
//! errors this service can hit are operational ones around startup.

use thiserror::Error;

/// Web service error type
#[derive(Error, Debug)]
pub enum WebSrvError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Input/Output operation errors
    #[error("IO error: {0}")]
    IoError(String),

    /// Listener address errors
    #[error("Address error: {0}")]
    AddressError(String),
}

/// Result type alias for the web service
pub type Result<T> = std::result::Result<T, WebSrvError>;

impl WebSrvError {
    pub fn config(msg: impl Into<String>) -> Self {
        WebSrvError::ConfigError(msg.into())
    }

    pub fn address(msg: impl Into<String>) -> Self {
        WebSrvError::AddressError(msg.into())
    }
}

impl From<std::io::Error> for WebSrvError {
    fn from(err: std::io::Error) -> Self {
        WebSrvError::IoError(err.to_string())
    }
}
