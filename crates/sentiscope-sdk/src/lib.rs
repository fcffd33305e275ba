//! Public SDK for the sentiscope client.
//!
//! This crate re-exports all client functionality:
//!
//! ```ignore
//! use sentiscope_sdk::prelude::*;
//! use std::sync::Arc;
//!
//! init_logging(&LoggingConfig::default())?;
//!
//! let client = Arc::new(HttpClient::from_env()?);
//! let search = SearchSession::new(client.clone());
//! let analyze = AnalyzeSession::new(client);
//!
//! search.submit("wireless earbuds").await;
//! let picked = search.controller().products().first().cloned();
//! if let Some(product) = picked {
//!     analyze.open(product).await;
//!     for slice in analyze.controller().chart() {
//!         println!("{} {} {}", slice.label, slice.value, slice.color.hex());
//!     }
//! }
//! ```

pub use sentiscope_client;
pub use sentiscope_core;
pub use sentiscope_observability;
pub use sentiscope_state;

/// Prelude for convenient imports.
pub mod prelude {
    pub use sentiscope_client::prelude::*;
    pub use sentiscope_core::prelude::*;
    pub use sentiscope_observability::*;
    pub use sentiscope_state::prelude::*;
}
