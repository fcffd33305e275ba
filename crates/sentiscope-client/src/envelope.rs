//! Wire envelopes for the remote API.

use serde::{Deserialize, Serialize};

use sentiscope_core::{Product, ReviewSet};

use crate::endpoint::Endpoint;
use crate::error::{ApiError, ApiResult};

/// `GET /api/search` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchEnvelope {
    pub fn into_result(self, status: u16) -> ApiResult<Vec<Product>> {
        if self.success {
            Ok(self.products)
        } else {
            Err(ApiError::api(Endpoint::Search, status, self.error))
        }
    }
}

/// `GET /api/reviews` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReviewsEnvelope {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<ReviewSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ReviewsEnvelope {
    pub fn into_result(self, status: u16) -> ApiResult<ReviewSet> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(ApiError::malformed(Endpoint::Reviews, "success without data")),
            (false, _) => Err(ApiError::api(Endpoint::Reviews, status, self.error)),
        }
    }
}

/// Error body sent with non-2xx statuses. Anything else is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// Reported backend state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Ok,
    Error,
}

/// `GET /api/health` body, or a locally synthesized failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: HealthState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    /// Result used when the backend cannot be reached or answers badly.
    pub fn unreachable() -> Self {
        Self {
            status: HealthState::Error,
            message: Some(Endpoint::Health.fallback_message().to_string()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == HealthState::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_envelope_success() {
        let envelope: SearchEnvelope = serde_json::from_str(
            r#"{"success": true, "count": 1, "products": [
                {"asin": "B1", "title": "Acme Laptop", "url": "https://x/B1", "sentiment": "Positive"}
            ]}"#,
        )
        .unwrap();
        let products = envelope.into_result(200).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].title, "Acme Laptop");
    }

    #[test]
    fn test_search_envelope_failure_without_message() {
        let envelope: SearchEnvelope = serde_json::from_str(r#"{"success": false}"#).unwrap();
        let err = envelope.into_result(200).unwrap_err();
        assert_eq!(err.to_string(), "Search failed");
    }

    #[test]
    fn test_reviews_envelope_success_requires_data() {
        let envelope: ReviewsEnvelope = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let err = envelope.into_result(200).unwrap_err();
        assert!(matches!(err, ApiError::Malformed { .. }));
    }

    #[test]
    fn test_reviews_envelope_failure_message() {
        let envelope: ReviewsEnvelope =
            serde_json::from_str(r#"{"success": false, "error": "Invalid Amazon product URL"}"#).unwrap();
        let err = envelope.into_result(500).unwrap_err();
        assert_eq!(err.to_string(), "Invalid Amazon product URL");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_health_status() {
        let ok: HealthStatus =
            serde_json::from_str(r#"{"status": "ok", "message": "API is running"}"#).unwrap();
        assert!(ok.is_ok());

        let down = HealthStatus::unreachable();
        assert!(!down.is_ok());
        assert_eq!(down.message.as_deref(), Some("Backend not reachable"));
    }
}
