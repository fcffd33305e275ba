//! Observability for the sentiscope client.
//!
//! This crate provides:
//! - `init_logging` - Installs the `tracing` subscriber (JSON or human output)
//! - `LoggingConfig` / `LogLevel` / `LogFormat` - Logging configuration
//! - `RequestId` - Per-request correlation identifier

mod error;
mod logging;
mod request_id;

pub use error::ObservabilityError;
pub use logging::*;
pub use request_id::RequestId;
