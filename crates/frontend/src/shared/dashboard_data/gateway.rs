//! Endpoint gateway: the only place that talks HTTP.
//!
//! The orchestrator depends on the [`EndpointGateway`] trait so dashboards can
//! be exercised against scripted gateways in tests.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde_json::Value;
use thiserror::Error;

use crate::shared::api_utils::api_url;

/// Failure of a single endpoint fetch.
///
/// Every variant carries the endpoint path (relative to `/api/`) that failed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Transport failure, no response received
    #[error("{endpoint}: request failed: {message}")]
    Network { endpoint: String, message: String },
    /// Non-2xx response
    #[error("{endpoint}: API error: {status}")]
    HttpStatus { endpoint: String, status: u16 },
    /// Body is not valid JSON or does not match the endpoint's row shape
    #[error("{endpoint}: failed to parse response: {message}")]
    Decode { endpoint: String, message: String },
    /// 2xx response carrying an `{"error": "..."}` envelope
    #[error("{endpoint}: {message}")]
    Backend { endpoint: String, message: String },
}

impl FetchError {
    pub fn network(endpoint: &str, message: impl ToString) -> Self {
        Self::Network {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub fn http_status(endpoint: &str, status: u16) -> Self {
        Self::HttpStatus {
            endpoint: endpoint.to_string(),
            status,
        }
    }

    pub fn decode(endpoint: &str, message: impl ToString) -> Self {
        Self::Decode {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub fn backend(endpoint: &str, message: impl ToString) -> Self {
        Self::Backend {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        match self {
            Self::Network { endpoint, .. }
            | Self::HttpStatus { endpoint, .. }
            | Self::Decode { endpoint, .. }
            | Self::Backend { endpoint, .. } => endpoint,
        }
    }

    /// HTTP status for `HttpStatus` failures
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// "Fetch JSON from a named endpoint".
///
/// Futures are not `Send`: in the browser everything runs on one event loop.
#[async_trait(?Send)]
pub trait EndpointGateway {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError>;

    /// POST `body` as JSON and decode the JSON reply, with the same error
    /// mapping as [`EndpointGateway::fetch_json`]. The dashboards only read,
    /// so load cycles never call it; it is the write half of the gateway.
    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<Value, FetchError>;
}

/// Gateway backed by the browser `fetch` API.
#[derive(Debug, Clone, Default)]
pub struct HttpGateway;

impl HttpGateway {
    pub fn new() -> Self {
        Self
    }

    async fn read_json(endpoint: &str, response: Response) -> Result<Value, FetchError> {
        if !response.ok() {
            return Err(FetchError::http_status(endpoint, response.status()));
        }
        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::decode(endpoint, e))
    }
}

#[async_trait(?Send)]
impl EndpointGateway for HttpGateway {
    async fn fetch_json(&self, endpoint: &str) -> Result<Value, FetchError> {
        let url = api_url(endpoint);
        log::debug!("GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::network(endpoint, e))?;

        Self::read_json(endpoint, response).await
    }

    async fn post_json(&self, endpoint: &str, body: &Value) -> Result<Value, FetchError> {
        let url = api_url(endpoint);
        log::debug!("POST {}", url);

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| FetchError::network(endpoint, format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| FetchError::network(endpoint, e))?;

        Self::read_json(endpoint, response).await
    }
}
