//! Analyze controller: the review-sentiment panel for one product.

use sentiscope_client::{ApiResult, Endpoint};
use sentiscope_core::{sentiment_series, Product, ProductUrl, Review, ReviewSet, SentimentSeries};
use tracing::debug;

use crate::generation::{Generation, GenerationCounter};
use crate::transition::Transition;
use crate::view::{AnalyzeView, ReviewSummary};

/// Phases of the analyze controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalyzePhase {
    /// Panel hidden, no target.
    #[default]
    Closed,
    Loading,
    Loaded,
    Failed,
}

impl AnalyzePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalyzePhase::Closed => "closed",
            AnalyzePhase::Loading => "loading",
            AnalyzePhase::Loaded => "loaded",
            AnalyzePhase::Failed => "failed",
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, AnalyzePhase::Closed)
    }
}

/// A reviews fetch the caller must issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewsRequest {
    pub generation: Generation,
    pub url: ProductUrl,
}

/// Inputs to the analyze controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeEvent {
    /// User chose to analyze a product.
    Open(Product),
    /// User asked to refetch after a failure.
    Retry,
    /// User dismissed the panel.
    Close,
    /// A reviews fetch issued under `generation` completed.
    Resolved {
        generation: Generation,
        result: ApiResult<ReviewSet>,
    },
}

/// Owns the analysis target and its fetched reviews.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeController {
    target: Option<Product>,
    review_set: Option<ReviewSet>,
    loading: bool,
    error: String,
    phase: AnalyzePhase,
    generations: GenerationCounter,
}

impl AnalyzeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event.
    pub fn apply(&mut self, event: AnalyzeEvent) -> Transition<ReviewsRequest> {
        match event {
            AnalyzeEvent::Open(product) => self.on_open(product),
            AnalyzeEvent::Retry => self.on_retry(),
            AnalyzeEvent::Close => self.on_close(),
            AnalyzeEvent::Resolved { generation, result } => self.on_resolved(generation, result),
        }
    }

    /// Open the panel for `product`. Returns the fetch to issue, if any.
    pub fn open(&mut self, product: Product) -> Option<ReviewsRequest> {
        self.apply(AnalyzeEvent::Open(product)).request()
    }

    /// Refetch reviews for the current target.
    pub fn retry(&mut self) -> Option<ReviewsRequest> {
        self.apply(AnalyzeEvent::Retry).request()
    }

    pub fn close(&mut self) {
        self.apply(AnalyzeEvent::Close);
    }

    /// Feed back a completion. Returns whether it was applied.
    pub fn resolve(&mut self, generation: Generation, result: ApiResult<ReviewSet>) -> bool {
        self.apply(AnalyzeEvent::Resolved { generation, result })
            .is_applied()
    }

    fn on_open(&mut self, product: Product) -> Transition<ReviewsRequest> {
        if let Some(current) = &self.target {
            if self.phase.is_open() && current.url == product.url {
                self.target = Some(product);
                return Transition::Unchanged;
            }
        }

        let url = product.url.clone();
        self.target = Some(product);
        Transition::Request(self.begin_fetch(url))
    }

    fn on_retry(&mut self) -> Transition<ReviewsRequest> {
        match (&self.target, self.phase.is_open()) {
            (Some(target), true) => {
                let url = target.url.clone();
                Transition::Request(self.begin_fetch(url))
            }
            _ => Transition::Ignored,
        }
    }

    fn on_close(&mut self) -> Transition<ReviewsRequest> {
        if !self.phase.is_open() {
            return Transition::Ignored;
        }

        let generation = self.generations.advance();
        debug!(generation = generation.value(), "Analyze panel closed");

        self.target = None;
        self.review_set = None;
        self.loading = false;
        self.error.clear();
        self.phase = AnalyzePhase::Closed;
        Transition::Applied
    }

    fn begin_fetch(&mut self, url: ProductUrl) -> ReviewsRequest {
        let generation = self.generations.advance();
        self.review_set = None;
        self.error.clear();
        self.loading = true;
        self.phase = AnalyzePhase::Loading;

        debug!(url = %url, generation = generation.value(), "Fetching reviews");

        ReviewsRequest { generation, url }
    }

    fn on_resolved(
        &mut self,
        generation: Generation,
        result: ApiResult<ReviewSet>,
    ) -> Transition<ReviewsRequest> {
        if !self.loading || !self.generations.is_current(generation) {
            debug!(
                generation = generation.value(),
                current = self.generations.current().value(),
                phase = self.phase.as_str(),
                "Discarding stale reviews completion"
            );
            return Transition::Stale;
        }

        self.loading = false;
        match result {
            Ok(set) => {
                debug!(
                    total = set.total,
                    positive = set.counts.positive,
                    neutral = set.counts.neutral,
                    negative = set.counts.negative,
                    "Reviews loaded"
                );
                self.review_set = Some(set);
                self.phase = AnalyzePhase::Loaded;
            }
            Err(err) => {
                debug!(error = %err, "Reviews fetch failed");
                self.error = err.to_string();
                if self.error.is_empty() {
                    self.error = Endpoint::Reviews.fallback_message().to_string();
                }
                self.phase = AnalyzePhase::Failed;
            }
        }
        Transition::Applied
    }

    /// Product being analyzed, if the panel is open.
    pub fn target(&self) -> Option<&Product> {
        self.target.as_ref()
    }

    pub fn review_set(&self) -> Option<&ReviewSet> {
        self.review_set.as_ref()
    }

    /// Reviews to list, empty until loaded.
    pub fn reviews(&self) -> &[Review] {
        self.review_set
            .as_ref()
            .map(|set| set.reviews.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error message, empty when there is none.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn phase(&self) -> AnalyzePhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    /// Generation of the most recent fetch or close.
    pub fn generation(&self) -> Generation {
        self.generations.current()
    }

    /// Pie-chart series for the loaded counts; empty until loaded.
    pub fn chart(&self) -> SentimentSeries {
        self.review_set
            .as_ref()
            .map(|set| sentiment_series(&set.counts))
            .unwrap_or_default()
    }

    /// What the analysis panel should show.
    pub fn view(&self) -> AnalyzeView<'_> {
        let Some(product) = self.target.as_ref() else {
            return AnalyzeView::Closed;
        };
        match (self.phase, self.review_set.as_ref()) {
            (AnalyzePhase::Closed, _) => AnalyzeView::Closed,
            (AnalyzePhase::Failed, _) => AnalyzeView::Failed {
                product,
                error: &self.error,
            },
            (AnalyzePhase::Loaded, Some(set)) => AnalyzeView::Loaded {
                product,
                summary: ReviewSummary {
                    counts: set.counts,
                    total: set.total,
                },
                chart: sentiment_series(&set.counts),
                reviews: &set.reviews,
            },
            _ => AnalyzeView::Loading { product },
        }
    }
}
