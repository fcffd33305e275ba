//! API error types.

use thiserror::Error;

use crate::endpoint::Endpoint;

/// Message shown for any transport failure or timeout.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check if the backend is running.";

/// Result of a remote call.
pub type ApiResult<T> = Result<T, ApiError>;

/// Normalized failure of a remote call.
///
/// `Display` yields the message meant for the user: the generic network
/// message for transport failures, otherwise the backend's own message or the
/// endpoint fallback.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request did not complete within its timeout.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Timeout { endpoint: Endpoint },

    /// The request could not be sent or the response could not be read.
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Connection { endpoint: Endpoint, detail: String },

    /// The backend answered with an error.
    #[error("{message}")]
    Api {
        endpoint: Endpoint,
        status: u16,
        message: String,
    },

    /// The backend answered 2xx with a body that does not match the contract.
    #[error("{message}")]
    Malformed {
        endpoint: Endpoint,
        message: String,
        detail: String,
    },
}

impl ApiError {
    /// Build an API error, falling back to the endpoint message when the
    /// backend supplied none.
    pub fn api(endpoint: Endpoint, status: u16, message: Option<String>) -> Self {
        let message = message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| endpoint.fallback_message().to_string());
        Self::Api {
            endpoint,
            status,
            message,
        }
    }

    pub fn malformed(endpoint: Endpoint, detail: impl Into<String>) -> Self {
        Self::Malformed {
            endpoint,
            message: endpoint.fallback_message().to_string(),
            detail: detail.into(),
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Timeout { endpoint }
            | Self::Connection { endpoint, .. }
            | Self::Api { endpoint, .. }
            | Self::Malformed { endpoint, .. } => *endpoint,
        }
    }

    /// Whether this is a transport failure rather than a backend answer.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }

    /// HTTP status, when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_errors_share_message() {
        let timeout = ApiError::Timeout {
            endpoint: Endpoint::Search,
        };
        let refused = ApiError::Connection {
            endpoint: Endpoint::Reviews,
            detail: "connection refused".to_string(),
        };
        assert_eq!(timeout.to_string(), NETWORK_ERROR_MESSAGE);
        assert_eq!(refused.to_string(), NETWORK_ERROR_MESSAGE);
        assert!(timeout.is_network());
        assert!(refused.is_network());
    }

    #[test]
    fn test_api_error_uses_backend_message() {
        let err = ApiError::api(Endpoint::Search, 500, Some("ScraperAPI 403".to_string()));
        assert_eq!(err.to_string(), "ScraperAPI 403");
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_network());
    }

    #[test]
    fn test_api_error_fallbacks() {
        assert_eq!(ApiError::api(Endpoint::Search, 500, None).to_string(), "Search failed");
        assert_eq!(
            ApiError::api(Endpoint::Reviews, 502, Some("  ".to_string())).to_string(),
            "Failed to fetch reviews"
        );
        assert_eq!(
            ApiError::malformed(Endpoint::Reviews, "missing field `counts`").to_string(),
            "Failed to fetch reviews"
        );
    }
}
