//! The remote API contract.

use std::sync::Arc;

use async_trait::async_trait;
use sentiscope_core::{Product, ProductUrl, ReviewSet};

use crate::envelope::HealthStatus;
use crate::error::ApiResult;

/// Remote search, review and health calls.
///
/// Implementations never panic and never leave an error for the caller to
/// catch: every failure is folded into the returned value.
#[async_trait]
pub trait SentimentApi: Send + Sync {
    /// Search products. `query` is expected to be trimmed and non-empty.
    async fn search(&self, query: &str) -> ApiResult<Vec<Product>>;

    /// Fetch and classify reviews for a product, keyed by its full URL.
    async fn reviews(&self, url: &ProductUrl) -> ApiResult<ReviewSet>;

    /// Probe the backend. Failures become `HealthState::Error`.
    async fn health(&self) -> HealthStatus;
}

#[async_trait]
impl<T: SentimentApi + ?Sized> SentimentApi for Arc<T> {
    async fn search(&self, query: &str) -> ApiResult<Vec<Product>> {
        (**self).search(query).await
    }

    async fn reviews(&self, url: &ProductUrl) -> ApiResult<ReviewSet> {
        (**self).reviews(url).await
    }

    async fn health(&self) -> HealthStatus {
        (**self).health().await
    }
}
