//! HTTP header construction.
//!
//! Headers are rebuilt from the client configuration on every call, so a
//! token update takes effect on the next request without touching in-flight
//! calls.

use crate::config::ClientConfig;
use crate::error::RequestError;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

/// Name of the auth header carried when a token is configured.
pub const TOKEN_HEADER: &str = "token";

/// Build the base headers for one call from the current configuration.
///
/// Always sets `Content-Type: application/json`; adds `token` when a
/// non-empty token is configured; then applies config-level extra headers.
pub fn build_headers(config: &ClientConfig) -> Result<HeaderMap, RequestError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    if let Some(token) = config.token.as_deref()
        && !token.is_empty()
    {
        headers.insert(
            HeaderName::from_static(TOKEN_HEADER),
            HeaderValue::from_str(token).map_err(|e| {
                RequestError::ConfigurationError(format!("Invalid token value: {e}"))
            })?,
        );
    }
    if config.extra_headers.is_empty() {
        return Ok(headers);
    }
    Ok(merge_headers(headers, &config.extra_headers))
}

/// Merge extra headers into base headers (immutable version).
///
/// Extra headers override base headers with the same name; entries with
/// invalid names or values are skipped.
pub fn merge_headers(mut base: HeaderMap, extra: &HashMap<String, String>) -> HeaderMap {
    for (k, v) in extra {
        if let (Ok(name), Ok(val)) = (
            HeaderName::from_bytes(k.as_bytes()),
            HeaderValue::from_str(v),
        ) {
            base.insert(name, val);
        }
    }
    base
}
