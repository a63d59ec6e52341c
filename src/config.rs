//! Client configuration.
//!
//! An explicit configuration value replaces ambient process-wide state: the
//! application constructs one at startup, updates the token on login/logout,
//! and every call reads it fresh when building headers. Multiple configs can
//! coexist (e.g. one per backend in tests).

use std::collections::HashMap;

/// Configuration read by every call: base URL, optional auth token, and
/// extra headers applied to all requests.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    /// Base URL all endpoint paths are resolved against.
    pub base_url: String,
    /// Auth token sent as the `token` header when present and non-empty.
    pub token: Option<String>,
    /// Extra headers applied to all requests (header-name -> value).
    pub extra_headers: HashMap<String, String>,
}

impl ClientConfig {
    /// Create a configuration for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            extra_headers: HashMap::new(),
        }
    }

    /// Set the auth token at construction time.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set extra headers at construction time.
    pub fn with_extra_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.extra_headers = headers;
        self
    }

    /// Store the token after a successful login. Takes effect on the next
    /// call; headers already sent are unaffected.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drop the token on logout.
    pub fn clear_token(&mut self) {
        self.token = None;
    }
}
