//! Render-ready projections of controller state.

use sentiscope_core::{Product, Review, SentimentCounts, SentimentSeries};

/// What the search area should show.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchView<'a> {
    /// Nothing searched yet.
    Idle,
    Searching { query: &'a str },
    Results {
        query: &'a str,
        products: &'a [Product],
    },
    /// The search succeeded but matched nothing.
    NoResults { query: &'a str },
    Failed { error: &'a str },
}

impl SearchView<'_> {
    pub fn is_loading(&self) -> bool {
        matches!(self, SearchView::Searching { .. })
    }

    /// Count for the "Found N products" headline.
    pub fn result_count(&self) -> usize {
        match self {
            SearchView::Results { products, .. } => products.len(),
            _ => 0,
        }
    }
}

/// Header numbers for the analysis panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewSummary {
    pub counts: SentimentCounts,
    /// Reviews analyzed, as reported by the backend.
    pub total: u32,
}

/// What the analysis panel should show.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalyzeView<'a> {
    /// Panel hidden.
    Closed,
    Loading { product: &'a Product },
    Failed {
        product: &'a Product,
        error: &'a str,
    },
    Loaded {
        product: &'a Product,
        summary: ReviewSummary,
        chart: SentimentSeries,
        reviews: &'a [Review],
    },
}

impl<'a> AnalyzeView<'a> {
    pub fn is_open(&self) -> bool {
        !matches!(self, AnalyzeView::Closed)
    }

    /// Product the panel is showing, if open.
    pub fn product(&self) -> Option<&'a Product> {
        match self {
            AnalyzeView::Closed => None,
            AnalyzeView::Loading { product }
            | AnalyzeView::Failed { product, .. }
            | AnalyzeView::Loaded { product, .. } => Some(product),
        }
    }
}
