//! Domain types for the sentiscope client.
//!
//! - **Catalog**: `Product` search results and their identifiers
//! - **Reviews**: `ReviewSet`, `Review`, `SentimentCounts`
//! - **Chart**: `sentiment_series`, the zero-filtered projection of counts
//!   used for visualization
//!
//! # Example
//!
//! ```rust
//! use sentiscope_core::prelude::*;
//!
//! let counts = SentimentCounts::new(3, 0, 1);
//! let series = sentiment_series(&counts);
//!
//! let labels: Vec<_> = series.iter().map(|slice| slice.label).collect();
//! assert_eq!(labels, vec![Sentiment::Positive, Sentiment::Negative]);
//! ```

pub mod chart;
pub mod ids;
pub mod product;
pub mod review;
pub mod sentiment;

mod de;

pub use chart::{sentiment_series, ChartColor, ChartSlice, SentimentSeries};
pub use ids::{Asin, ProductUrl};
pub use product::Product;
pub use review::{Review, ReviewSet};
pub use sentiment::{Sentiment, SentimentCounts};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::chart::{sentiment_series, ChartColor, ChartSlice, SentimentSeries};
    pub use crate::ids::{Asin, ProductUrl};
    pub use crate::product::Product;
    pub use crate::review::{Review, ReviewSet};
    pub use crate::sentiment::{Sentiment, SentimentCounts};
}
