//! Observability error types.

use thiserror::Error;

/// Errors raised while configuring logging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObservabilityError {
    /// A global subscriber is already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),

    /// Unknown log level name.
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}
