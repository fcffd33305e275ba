//! reqwest-backed implementation of `SentimentApi`.

use std::time::Instant;

use async_trait::async_trait;
use http::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use sentiscope_core::{Product, ProductUrl, ReviewSet};
use sentiscope_observability::RequestId;

use crate::api::SentimentApi;
use crate::config::{ClientConfig, ConfigError};
use crate::endpoint::Endpoint;
use crate::envelope::{ErrorBody, HealthStatus, ReviewsEnvelope, SearchEnvelope};
use crate::error::{ApiError, ApiResult};

/// Header carrying the per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Raw response: status plus the fully read body.
struct Fetched {
    status: StatusCode,
    body: Vec<u8>,
}

/// HTTP client for the sentiment API.
///
/// Each call is a single GET with the configured timeout. There are no
/// retries; retrying is left to the user.
#[derive(Debug, Clone)]
pub struct HttpClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpClient {
    /// Create a client from a validated configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn fetch(&self, endpoint: Endpoint, params: &[(&str, &str)]) -> ApiResult<Fetched> {
        let request_id = RequestId::generate();
        let started = Instant::now();
        let url = self.config.url_for(endpoint.path());

        debug!(endpoint = endpoint.name(), request_id = %request_id, url = %url, "Issuing request");

        let response = self
            .http
            .get(&url)
            .query(params)
            .header(REQUEST_ID_HEADER, request_id.as_str())
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| transport_error(endpoint, &request_id, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| transport_error(endpoint, &request_id, e))?
            .to_vec();

        info!(
            endpoint = endpoint.name(),
            request_id = %request_id,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Request finished"
        );

        Ok(Fetched { status, body })
    }

    /// Decode a 2xx body into its envelope, or turn a non-2xx response into
    /// an `ApiError` carrying the backend's message.
    fn decode<E: DeserializeOwned>(endpoint: Endpoint, fetched: Fetched) -> ApiResult<E> {
        if !fetched.status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&fetched.body)
                .ok()
                .and_then(|body| body.error);
            let err = ApiError::api(endpoint, fetched.status.as_u16(), message);
            warn!(endpoint = endpoint.name(), status = fetched.status.as_u16(), error = %err, "Backend returned an error");
            return Err(err);
        }

        serde_json::from_slice(&fetched.body).map_err(|e| {
            warn!(endpoint = endpoint.name(), error = %e, "Malformed response body");
            ApiError::malformed(endpoint, e.to_string())
        })
    }
}

fn transport_error(endpoint: Endpoint, request_id: &RequestId, err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        warn!(endpoint = endpoint.name(), request_id = %request_id, "Request timed out");
        ApiError::Timeout { endpoint }
    } else {
        warn!(endpoint = endpoint.name(), request_id = %request_id, error = %err, "Request failed");
        ApiError::Connection {
            endpoint,
            detail: err.to_string(),
        }
    }
}

#[async_trait]
impl SentimentApi for HttpClient {
    async fn search(&self, query: &str) -> ApiResult<Vec<Product>> {
        let fetched = self.fetch(Endpoint::Search, &[("q", query)]).await?;
        let status = fetched.status.as_u16();
        Self::decode::<SearchEnvelope>(Endpoint::Search, fetched)?.into_result(status)
    }

    async fn reviews(&self, url: &ProductUrl) -> ApiResult<ReviewSet> {
        let fetched = self.fetch(Endpoint::Reviews, &[("url", url.as_str())]).await?;
        let status = fetched.status.as_u16();
        Self::decode::<ReviewsEnvelope>(Endpoint::Reviews, fetched)?.into_result(status)
    }

    async fn health(&self) -> HealthStatus {
        let fetched = match self.fetch(Endpoint::Health, &[]).await {
            Ok(fetched) => fetched,
            Err(_) => return HealthStatus::unreachable(),
        };
        Self::decode::<HealthStatus>(Endpoint::Health, fetched)
            .unwrap_or_else(|_| HealthStatus::unreachable())
    }
}
