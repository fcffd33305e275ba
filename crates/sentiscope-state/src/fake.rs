//! Scripted `SentimentApi` for driving sessions in tests.
//!
//! Each call waits on a gate the test holds; the test decides when and in
//! which order calls complete. Unscripted calls fail with a connection error.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use async_trait::async_trait;
use futures::channel::oneshot;
use sentiscope_client::{ApiError, ApiResult, Endpoint, HealthStatus, SentimentApi};
use sentiscope_core::{Product, ProductUrl, ReviewSet};

type Gate<T> = oneshot::Sender<ApiResult<T>>;
type Pending<T> = oneshot::Receiver<ApiResult<T>>;

#[derive(Default)]
pub struct ScriptedApi {
    search: Mutex<HashMap<String, VecDeque<Pending<Vec<Product>>>>>,
    reviews: Mutex<HashMap<ProductUrl, VecDeque<Pending<ReviewSet>>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the next search for `query`.
    pub fn gate_search(&self, query: &str) -> Gate<Vec<Product>> {
        let (tx, rx) = oneshot::channel();
        self.search
            .lock()
            .unwrap()
            .entry(query.to_string())
            .or_default()
            .push_back(rx);
        tx
    }

    /// Script the next reviews fetch for `url`.
    pub fn gate_reviews(&self, url: &str) -> Gate<ReviewSet> {
        let (tx, rx) = oneshot::channel();
        self.reviews
            .lock()
            .unwrap()
            .entry(ProductUrl::new(url))
            .or_default()
            .push_back(rx);
        tx
    }

    /// Calls received so far, as `search:<query>` or `reviews:<url>`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn unscripted(endpoint: Endpoint) -> ApiError {
    ApiError::Connection {
        endpoint,
        detail: "unscripted call".to_string(),
    }
}

async fn settle<T>(endpoint: Endpoint, pending: Option<Pending<T>>) -> ApiResult<T> {
    match pending {
        Some(rx) => rx.await.unwrap_or_else(|_| Err(unscripted(endpoint))),
        None => Err(unscripted(endpoint)),
    }
}

#[async_trait]
impl SentimentApi for ScriptedApi {
    async fn search(&self, query: &str) -> ApiResult<Vec<Product>> {
        self.record(format!("search:{}", query));
        let pending = self
            .search
            .lock()
            .unwrap()
            .get_mut(query)
            .and_then(VecDeque::pop_front);
        settle(Endpoint::Search, pending).await
    }

    async fn reviews(&self, url: &ProductUrl) -> ApiResult<ReviewSet> {
        self.record(format!("reviews:{}", url));
        let pending = self
            .reviews
            .lock()
            .unwrap()
            .get_mut(url)
            .and_then(VecDeque::pop_front);
        settle(Endpoint::Reviews, pending).await
    }

    async fn health(&self) -> HealthStatus {
        HealthStatus::unreachable()
    }
}
