//! Remote endpoints and their per-call defaults.

use std::time::Duration;

/// The remote calls the client issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Keyword product search.
    Search,
    /// Review scrape and sentiment analysis for one product.
    Reviews,
    /// Liveness probe.
    Health,
}

impl Endpoint {
    pub const ALL: [Endpoint; 3] = [Endpoint::Search, Endpoint::Reviews, Endpoint::Health];

    /// Request path relative to the base address.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Search => "/api/search",
            Self::Reviews => "/api/reviews",
            Self::Health => "/api/health",
        }
    }

    /// Default timeout. Search and reviews scrape upstream pages, which is slow.
    pub fn default_timeout(&self) -> Duration {
        Duration::from_secs(30)
    }

    /// Message shown when the backend fails without saying why.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::Search => "Search failed",
            Self::Reviews => "Failed to fetch reviews",
            Self::Health => "Backend not reachable",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Reviews => "reviews",
            Self::Health => "health",
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
