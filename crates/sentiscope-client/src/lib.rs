//! Client for the product search and review sentiment API.
//!
//! This crate provides:
//! - `SentimentApi` - The async contract the controllers depend on
//! - `HttpClient` - reqwest implementation with per-endpoint timeouts
//! - `Endpoint` - The three remote calls and their defaults
//! - `ApiError` - Normalized failures whose `Display` is the user-facing message
//! - `ClientConfig` - Base address and timeout, from env or a config file
//!
//! # Example
//!
//! ```rust,ignore
//! use sentiscope_client::{ClientConfig, HttpClient, SentimentApi};
//!
//! let client = HttpClient::new(ClientConfig::from_env()?)?;
//!
//! match client.search("wireless headphones").await {
//!     Ok(products) => println!("Found {} products", products.len()),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

mod api;
mod client;
mod config;
mod endpoint;
mod envelope;
mod error;

pub use api::SentimentApi;
pub use client::{HttpClient, REQUEST_ID_HEADER};
pub use config::*;
pub use endpoint::Endpoint;
pub use envelope::*;
pub use error::{ApiError, ApiResult, NETWORK_ERROR_MESSAGE};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        ApiError, ApiResult, ClientConfig, Endpoint, HealthState, HealthStatus, HttpClient,
        SentimentApi,
    };
}
