//! HTTP transport abstraction.
//!
//! The default path goes through `reqwest`. An injected transport can
//! observe the final URL/headers/body and return a synthetic response
//! without touching the network, which keeps dispatch testable end to end.

use crate::error::RequestError;
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::HeaderMap;

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: Method,
    /// Absolute request URL.
    pub url: String,
    /// Effective request headers.
    pub headers: HeaderMap,
    /// JSON body, when the endpoint carries one.
    pub body: Option<serde_json::Value>,
}

/// Transport-level response data.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Raw response body.
    pub body: Vec<u8>,
}

/// Custom HTTP transport for non-multipart requests.
///
/// Multipart uploads always go through `reqwest` because the form body is
/// owned by the HTTP client.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue the request and return the raw outcome: bytes on success, an
    /// error otherwise.
    async fn issue(&self, request: TransportRequest) -> Result<TransportResponse, RequestError>;
}
