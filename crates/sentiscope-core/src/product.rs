//! Search-result products.

use serde::{Deserialize, Serialize};

use crate::de;
use crate::ids::{Asin, ProductUrl};
use crate::sentiment::Sentiment;

/// A product returned by a search.
///
/// Products are created fresh for each search response and never mutated.
/// `url` is the identity used for review lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "de::blank_as_none", skip_serializing_if = "Option::is_none")]
    pub asin: Option<Asin>,
    pub title: String,
    pub url: ProductUrl,
    #[serde(default, deserialize_with = "de::blank_as_none", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Display price, e.g. `₹1,299`.
    #[serde(default, deserialize_with = "de::blank_as_none", skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "de::zero_as_none", skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    /// Title sentiment, computed by the backend.
    #[serde(default)]
    pub sentiment: Sentiment,
}

impl Product {
    /// Create a product with only the required fields set.
    pub fn new(title: impl Into<String>, url: impl Into<ProductUrl>) -> Self {
        Self {
            asin: None,
            title: title.into(),
            url: url.into(),
            image: None,
            price: None,
            rating: None,
            sentiment: Sentiment::default(),
        }
    }

    pub fn with_asin(mut self, asin: impl Into<Asin>) -> Self {
        self.asin = Some(asin.into());
        self
    }

    pub fn with_sentiment(mut self, sentiment: Sentiment) -> Self {
        self.sentiment = sentiment;
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = (rating > 0.0).then_some(rating);
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Whether two products share the review lookup identity.
    pub fn same_identity(&self, other: &Product) -> bool {
        self.url == other.url
    }
}
