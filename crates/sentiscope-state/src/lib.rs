//! Search and analyze controllers for the sentiscope client.
//!
//! Each controller is a single-owner state machine driven through
//! `apply(event) -> Transition`. A submit or open stamps the outgoing request
//! with a fresh `Generation`; a completion is applied only if it carries the
//! latest generation, so superseded or post-close responses are discarded.
//!
//! - `SearchController` - `Idle → Searching → (Success | Failure)`
//! - `AnalyzeController` - `Closed → Loading → (Loaded | Failed)`
//! - `SearchView` / `AnalyzeView` - What a view should show for the current state
//! - `SearchSession` / `AnalyzeSession` - Async drivers bound to a `SentimentApi`
//!
//! # Example
//!
//! ```rust,ignore
//! use sentiscope_client::HttpClient;
//! use sentiscope_state::prelude::*;
//!
//! let client = std::sync::Arc::new(HttpClient::from_env()?);
//! let search = SearchSession::new(client.clone());
//! let analyze = AnalyzeSession::new(client);
//!
//! search.submit("headphones").await;
//! if let Some(product) = search.controller().products().first().cloned() {
//!     analyze.open(product).await;
//!     println!("{:?}", analyze.controller().chart());
//! }
//! ```

mod analyze;
mod generation;
mod search;
mod session;
mod transition;
mod view;

#[cfg(test)]
mod fake;

pub use analyze::{AnalyzeController, AnalyzeEvent, AnalyzePhase, ReviewsRequest};
pub use generation::{Generation, GenerationCounter};
pub use search::{SearchController, SearchEvent, SearchPhase, SearchRequest};
pub use session::{AnalyzeSession, SearchSession};
pub use transition::Transition;
pub use view::{AnalyzeView, ReviewSummary, SearchView};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        AnalyzeController, AnalyzeEvent, AnalyzePhase, AnalyzeSession, AnalyzeView, Generation,
        ReviewSummary, SearchController, SearchEvent, SearchPhase, SearchSession, SearchView,
        Transition,
    };
}
