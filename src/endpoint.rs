//! Declarative endpoint descriptors.
//!
//! An `Endpoint` describes one HTTP call: path, method, and body. Defaults
//! cover the common case so a unit struct only has to implement `path()`;
//! headers come from the client configuration at dispatch time.

use crate::config::ClientConfig;
use crate::error::RequestError;
use reqwest::{Method, Url};
use std::collections::HashMap;

/// Request body attached to an endpoint.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// JSON body.
    Json(serde_json::Value),
}

/// Declarative description of one HTTP call.
pub trait Endpoint {
    /// Path relative to the configured base URL (e.g. `/ping`).
    fn path(&self) -> String;

    /// HTTP method (GET unless overridden).
    fn method(&self) -> Method {
        Method::GET
    }

    /// Request body (empty unless overridden).
    fn body(&self) -> RequestBody {
        RequestBody::Empty
    }

    /// Per-request header overrides, merged over the config-derived headers.
    fn extra_headers(&self) -> HashMap<String, String> {
        HashMap::new()
    }

    /// Absolute URL for this call.
    ///
    /// Fails with `ConfigurationError` when the configured base URL is empty
    /// or unparseable; the call cannot be constructed at all in that case.
    fn url(&self, config: &ClientConfig) -> Result<Url, RequestError> {
        if config.base_url.trim().is_empty() {
            return Err(RequestError::ConfigurationError(
                "base URL is empty".to_string(),
            ));
        }
        let joined = format!(
            "{}/{}",
            config.base_url.trim_end_matches('/'),
            self.path().trim_start_matches('/')
        );
        Url::parse(&joined)
            .map_err(|e| RequestError::ConfigurationError(format!("invalid base URL: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Ping;

    impl Endpoint for Ping {
        fn path(&self) -> String {
            "/ping".to_string()
        }
    }

    #[test]
    fn method_defaults_to_get() {
        assert_eq!(Ping.method(), Method::GET);
        assert!(matches!(Ping.body(), RequestBody::Empty));
        assert!(Ping.extra_headers().is_empty());
    }

    #[test]
    fn url_joins_base_and_path() {
        let config = ClientConfig::new("https://api.example.com/");
        let url = Ping.url(&config).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/ping");
    }

    #[test]
    fn empty_base_url_is_a_configuration_error() {
        let config = ClientConfig::new("");
        match Ping.url(&config) {
            Err(RequestError::ConfigurationError(_)) => {}
            other => panic!("expected ConfigurationError, got: {other:?}"),
        }
    }

    #[test]
    fn unparseable_base_url_is_a_configuration_error() {
        let config = ClientConfig::new("not a url");
        match Ping.url(&config) {
            Err(RequestError::ConfigurationError(_)) => {}
            other => panic!("expected ConfigurationError, got: {other:?}"),
        }
    }
}
