//! Search controller state machine.

use sentiscope_client::{ApiResult, Endpoint};
use sentiscope_core::Product;
use tracing::debug;

use crate::generation::{Generation, GenerationCounter};
use crate::transition::Transition;
use crate::view::SearchView;

/// Phases of the search controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchPhase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// Waiting on the latest request.
    Searching,
    /// Latest request returned products (possibly none).
    Success,
    /// Latest request failed.
    Failure,
}

impl SearchPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchPhase::Idle => "idle",
            SearchPhase::Searching => "searching",
            SearchPhase::Success => "success",
            SearchPhase::Failure => "failure",
        }
    }
}

/// A search the caller must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub generation: Generation,
    /// Trimmed, non-empty query.
    pub query: String,
}

/// Inputs to the search controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// User submitted a query.
    Submit(String),
    /// A search issued under `generation` completed.
    Resolved {
        generation: Generation,
        result: ApiResult<Vec<Product>>,
    },
}

/// Owns the query and result list for the search view.
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    query: String,
    products: Vec<Product>,
    loading: bool,
    error: String,
    phase: SearchPhase,
    generations: GenerationCounter,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    pub fn apply(&mut self, event: SearchEvent) -> Transition<SearchRequest> {
        match event {
            SearchEvent::Submit(query) => self.on_submit(&query),
            SearchEvent::Resolved { generation, result } => self.on_resolved(generation, result),
        }
    }

    /// Submit a query. Returns the request to issue, or `None` for a blank
    /// query, which leaves the state untouched.
    pub fn submit(&mut self, query: &str) -> Option<SearchRequest> {
        self.apply(SearchEvent::Submit(query.to_string())).request()
    }

    /// Feed back a completion. Returns whether it was applied.
    pub fn resolve(&mut self, generation: Generation, result: ApiResult<Vec<Product>>) -> bool {
        self.apply(SearchEvent::Resolved { generation, result })
            .is_applied()
    }

    fn on_submit(&mut self, query: &str) -> Transition<SearchRequest> {
        let query = query.trim();
        if query.is_empty() {
            return Transition::Ignored;
        }

        let generation = self.generations.advance();
        self.query = query.to_string();
        self.products.clear();
        self.error.clear();
        self.loading = true;
        self.phase = SearchPhase::Searching;

        debug!(query = %self.query, generation = generation.value(), "Search submitted");

        Transition::Request(SearchRequest {
            generation,
            query: self.query.clone(),
        })
    }

    fn on_resolved(
        &mut self,
        generation: Generation,
        result: ApiResult<Vec<Product>>,
    ) -> Transition<SearchRequest> {
        if !self.loading || !self.generations.is_current(generation) {
            debug!(
                generation = generation.value(),
                current = self.generations.current().value(),
                "Discarding stale search completion"
            );
            return Transition::Stale;
        }

        self.loading = false;
        match result {
            Ok(products) => {
                debug!(query = %self.query, count = products.len(), "Search succeeded");
                self.products = products;
                self.error.clear();
                self.phase = SearchPhase::Success;
            }
            Err(err) => {
                debug!(query = %self.query, error = %err, "Search failed");
                self.products.clear();
                self.error = err.to_string();
                if self.error.is_empty() {
                    self.error = Endpoint::Search.fallback_message().to_string();
                }
                self.phase = SearchPhase::Failure;
            }
        }
        Transition::Applied
    }

    /// Last submitted query, trimmed.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Results of the latest successful search, in backend order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error message, empty when there is none.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// Generation of the most recent submit.
    pub fn generation(&self) -> Generation {
        self.generations.current()
    }

    /// What the search view should show.
    pub fn view(&self) -> SearchView<'_> {
        match self.phase {
            SearchPhase::Idle => SearchView::Idle,
            SearchPhase::Searching => SearchView::Searching { query: &self.query },
            SearchPhase::Failure => SearchView::Failed { error: &self.error },
            SearchPhase::Success if self.products.is_empty() => {
                SearchView::NoResults { query: &self.query }
            }
            SearchPhase::Success => SearchView::Results {
                query: &self.query,
                products: &self.products,
            },
        }
    }
}
