//! Domain error types

use thiserror::Error;

/// Errors surfaced synchronously to the caller of a bridge method
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The caller passed a payload with the wrong shape or types
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The method name is not handled by the bridge
    #[error("Method not implemented: {0}")]
    NotImplemented(String),
}

impl BridgeError {
    /// Wire code reported in error responses
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidArguments(_) => "INVALID_ARGUMENTS",
            Self::NotImplemented(_) => "NOT_IMPLEMENTED",
        }
    }
}

/// Error when an empty channel name is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid channel name: \"{input}\". Channel names must not be empty")]
pub struct InvalidChannelNameError {
    pub input: String,
}

/// Error when an unknown notifier backend is requested
#[derive(Debug, Clone, Error)]
#[error("Invalid notifier: \"{input}\". Valid notifiers are: notify-rust, notify-send, none")]
pub struct InvalidNotifierError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
