//! Customer reviews and the per-product review set.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::ids::Asin;
use crate::sentiment::{Sentiment, SentimentCounts};

/// One customer review. Reviews carry no identifier and are addressed by
/// position within their `ReviewSet`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating; `0` on the wire means no rating.
    #[serde(default, deserialize_with = "de::zero_as_none", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "de::blank_as_none", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de::blank_as_none", skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default)]
    pub sentiment: Sentiment,
}

impl Review {
    /// Create an empty review with the given sentiment.
    pub fn new(sentiment: Sentiment) -> Self {
        Self {
            sentiment,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = (rating > 0.0).then_some(rating);
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Title and body joined for single-line display.
    pub fn headline(&self) -> String {
        match (&self.title, &self.body) {
            (Some(title), Some(body)) => format!("{}. {}", title, body),
            (Some(title), None) => title.clone(),
            (None, Some(body)) => body.clone(),
            (None, None) => String::new(),
        }
    }
}

/// Review analysis for one product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewSet {
    #[serde(default, deserialize_with = "de::blank_as_none", skip_serializing_if = "Option::is_none")]
    pub asin: Option<Asin>,
    pub counts: SentimentCounts,
    pub total: u32,
    /// Most recent first, as returned by the backend. May be truncated
    /// relative to `total`.
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl ReviewSet {
    /// Build a set whose counts and total are derived from `reviews`.
    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let counts = SentimentCounts::tally(&reviews);
        Self {
            asin: None,
            counts,
            total: counts.total(),
            reviews,
        }
    }

    /// Whether `total` agrees with the per-class counts.
    pub fn is_consistent(&self) -> bool {
        self.counts.total() == self.total && self.reviews.len() <= self.total as usize
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
