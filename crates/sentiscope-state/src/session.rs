//! Async drivers that bind a controller to a `SentimentApi`.
//!
//! A session applies the user event, issues the request the controller asks
//! for, and feeds the completion back. Several operations may be in flight on
//! one session; the controller's generation check decides which completion
//! wins. The controller borrow is released before every await.

use std::cell::{Ref, RefCell};

use sentiscope_client::SentimentApi;
use sentiscope_core::Product;

use crate::analyze::{AnalyzeController, AnalyzeEvent, ReviewsRequest};
use crate::search::{SearchController, SearchEvent, SearchRequest};
use crate::transition::Transition;

/// Drives a `SearchController`.
pub struct SearchSession<A> {
    api: A,
    controller: RefCell<SearchController>,
}

impl<A: SentimentApi> SearchSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            controller: RefCell::new(SearchController::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Current controller state. Do not hold across an await.
    pub fn controller(&self) -> Ref<'_, SearchController> {
        self.controller.borrow()
    }

    /// Submit `query` and wait for its result.
    ///
    /// Returns `Ignored` for a blank query, otherwise the outcome of applying
    /// the completion (`Applied` or `Stale`).
    pub async fn submit(&self, query: &str) -> Transition<SearchRequest> {
        let transition = self
            .controller
            .borrow_mut()
            .apply(SearchEvent::Submit(query.to_string()));
        let Transition::Request(request) = transition else {
            return transition;
        };

        let result = self.api.search(&request.query).await;

        self.controller.borrow_mut().apply(SearchEvent::Resolved {
            generation: request.generation,
            result,
        })
    }
}

/// Drives an `AnalyzeController`.
pub struct AnalyzeSession<A> {
    api: A,
    controller: RefCell<AnalyzeController>,
}

impl<A: SentimentApi> AnalyzeSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            controller: RefCell::new(AnalyzeController::new()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Current controller state. Do not hold across an await.
    pub fn controller(&self) -> Ref<'_, AnalyzeController> {
        self.controller.borrow()
    }

    /// Open the panel for `product` and wait for its reviews.
    pub async fn open(&self, product: Product) -> Transition<ReviewsRequest> {
        self.dispatch(AnalyzeEvent::Open(product)).await
    }

    /// Refetch reviews for the current product.
    pub async fn retry(&self) -> Transition<ReviewsRequest> {
        self.dispatch(AnalyzeEvent::Retry).await
    }

    /// Close the panel. Any fetch still in flight is discarded on arrival.
    pub fn close(&self) -> Transition<ReviewsRequest> {
        self.controller.borrow_mut().apply(AnalyzeEvent::Close)
    }

    async fn dispatch(&self, event: AnalyzeEvent) -> Transition<ReviewsRequest> {
        let transition = self.controller.borrow_mut().apply(event);
        let Transition::Request(request) = transition else {
            return transition;
        };

        let result = self.api.reviews(&request.url).await;

        self.controller.borrow_mut().apply(AnalyzeEvent::Resolved {
            generation: request.generation,
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::AnalyzePhase;
    use crate::fake::ScriptedApi;
    use crate::search::SearchPhase;
    use crate::view::{AnalyzeView, SearchView};
    use httpmock::prelude::*;
    use sentiscope_client::{
        ApiError, ClientConfig, Endpoint, HttpClient, NETWORK_ERROR_MESSAGE,
    };
    use sentiscope_core::{Review, ReviewSet, Sentiment, SentimentCounts};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::task::yield_now;

    fn product(url: &str) -> Product {
        Product::new(format!("Product at {}", url), url)
    }

    fn reviews(positive: u32, negative: u32) -> ReviewSet {
        let mut reviews = Vec::new();
        reviews.extend((0..positive).map(|_| Review::new(Sentiment::Positive)));
        reviews.extend((0..negative).map(|_| Review::new(Sentiment::Negative)));
        ReviewSet::from_reviews(reviews)
    }

    #[tokio::test]
    async fn test_search_session_applies_result() {
        let api = ScriptedApi::new();
        let gate = api.gate_search("laptop");
        gate.send(Ok(vec![product("https://x/B1")])).unwrap();

        let session = SearchSession::new(api);
        let transition = session.submit("  laptop ").await;

        assert_eq!(transition, Transition::Applied);
        assert_eq!(session.api().calls(), vec!["search:laptop".to_string()]);
        assert_eq!(session.controller().phase(), SearchPhase::Success);
        assert_eq!(session.controller().view().result_count(), 1);
    }

    #[tokio::test]
    async fn test_search_session_blank_query_issues_nothing() {
        let session = SearchSession::new(ScriptedApi::new());
        assert_eq!(session.submit("   ").await, Transition::Ignored);
        assert!(session.api().calls().is_empty());
        assert_eq!(session.controller().view(), SearchView::Idle);
    }

    #[tokio::test]
    async fn test_search_session_later_submit_wins() {
        let api = ScriptedApi::new();
        let laptop = api.gate_search("laptop");
        let phone = api.gate_search("phone");
        let session = SearchSession::new(api);

        let (first, second, ()) = tokio::join!(
            session.submit("laptop"),
            session.submit("phone"),
            async {
                yield_now().await;
                phone.send(Ok(vec![product("https://x/P1")])).unwrap();
                yield_now().await;
                laptop.send(Ok(vec![product("https://x/L1")])).unwrap();
            }
        );

        assert_eq!(first, Transition::Stale);
        assert_eq!(second, Transition::Applied);
        let controller = session.controller();
        assert_eq!(controller.query(), "phone");
        assert_eq!(controller.products()[0].url.as_str(), "https://x/P1");
    }

    #[tokio::test]
    async fn test_analyze_session_switch_discards_slow_first_product() {
        let api = ScriptedApi::new();
        let first = api.gate_reviews("https://x/P1");
        let second = api.gate_reviews("https://x/P2");
        let session = AnalyzeSession::new(api);

        let (t1, t2, ()) = tokio::join!(
            session.open(product("https://x/P1")),
            session.open(product("https://x/P2")),
            async {
                yield_now().await;
                second.send(Ok(reviews(0, 2))).unwrap();
                yield_now().await;
                first.send(Ok(reviews(5, 0))).unwrap();
            }
        );

        assert_eq!(t1, Transition::Stale);
        assert_eq!(t2, Transition::Applied);
        let controller = session.controller();
        assert_eq!(controller.target().unwrap().url.as_str(), "https://x/P2");
        assert_eq!(
            controller.review_set().unwrap().counts,
            SentimentCounts::new(0, 0, 2)
        );
    }

    #[tokio::test]
    async fn test_analyze_session_close_while_loading() {
        let api = ScriptedApi::new();
        let gate = api.gate_reviews("https://x/B1");
        let session = AnalyzeSession::new(api);

        let (opened, ()) = tokio::join!(session.open(product("https://x/B1")), async {
            yield_now().await;
            assert!(session.controller().is_loading());
            assert_eq!(session.close(), Transition::Applied);
            gate.send(Ok(reviews(1, 1))).unwrap();
        });

        assert_eq!(opened, Transition::Stale);
        assert_eq!(session.controller().phase(), AnalyzePhase::Closed);
        assert_eq!(session.controller().view(), AnalyzeView::Closed);
    }

    #[tokio::test]
    async fn test_analyze_session_retry_after_failure() {
        let api = ScriptedApi::new();
        api.gate_reviews("https://x/B1")
            .send(Err(ApiError::Timeout {
                endpoint: Endpoint::Reviews,
            }))
            .unwrap();
        api.gate_reviews("https://x/B1")
            .send(Ok(reviews(3, 1)))
            .unwrap();
        let session = AnalyzeSession::new(api);

        session.open(product("https://x/B1")).await;
        assert_eq!(session.controller().error(), NETWORK_ERROR_MESSAGE);

        assert_eq!(session.retry().await, Transition::Applied);
        assert_eq!(session.controller().phase(), AnalyzePhase::Loaded);
        assert_eq!(session.controller().chart().len(), 2);
        assert_eq!(
            session.api().calls(),
            vec!["reviews:https://x/B1".to_string(), "reviews:https://x/B1".to_string()]
        );
    }

    #[tokio::test]
    async fn test_analyze_session_retry_while_closed() {
        let session = AnalyzeSession::new(ScriptedApi::new());
        assert_eq!(session.retry().await, Transition::Ignored);
        assert_eq!(session.close(), Transition::Ignored);
        assert!(session.api().calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_then_analyze_over_http() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/search").query_param("q", "laptop");
                then.status(200).json_body(json!({
                    "success": true,
                    "count": 1,
                    "products": [
                        {"asin": "B1", "title": "Acme Laptop", "url": "https://x/B1", "rating": 4.4, "sentiment": "Positive"}
                    ]
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/reviews").query_param("url", "https://x/B1");
                then.status(200).json_body(json!({
                    "success": true,
                    "data": {
                        "asin": "B1",
                        "counts": {"Positive": 3, "Neutral": 1, "Negative": 0},
                        "total": 4,
                        "reviews": [
                            {"rating": 5, "title": "Great", "body": "Love it", "sentiment": "Positive"}
                        ]
                    }
                }));
            })
            .await;

        let client = Arc::new(
            HttpClient::new(ClientConfig::default().with_base_url(server.base_url())).unwrap(),
        );
        let search = SearchSession::new(client.clone());
        let analyze = AnalyzeSession::new(client);

        assert_eq!(search.submit("laptop").await, Transition::Applied);
        let picked = search.controller().products()[0].clone();
        assert_eq!(analyze.open(picked).await, Transition::Applied);

        let controller = analyze.controller();
        match controller.view() {
            AnalyzeView::Loaded {
                product,
                summary,
                chart,
                reviews,
            } => {
                assert_eq!(product.title, "Acme Laptop");
                assert_eq!(summary.total, 4);
                assert_eq!(chart.len(), 2);
                assert_eq!(chart.as_slice()[1].color.hex(), "#6b7280");
                assert_eq!(reviews[0].headline(), "Great. Love it");
            }
            other => panic!("expected loaded view, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_search_over_http_timeout() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/search");
                then.status(200)
                    .delay(Duration::from_millis(800))
                    .json_body(json!({"success": true, "products": [], "count": 0}));
            })
            .await;

        let config = ClientConfig::default()
            .with_base_url(server.base_url())
            .with_timeout(Duration::from_millis(100));
        let session = SearchSession::new(HttpClient::new(config).unwrap());

        assert_eq!(session.submit("laptop").await, Transition::Applied);
        assert_eq!(session.controller().error(), NETWORK_ERROR_MESSAGE);
        assert!(!session.controller().is_loading());
    }
}
