//! Client construction.
//!
//! A `Client` pairs a `reqwest::Client` with the configuration every call
//! reads. The builder exposes the HTTP knobs that matter for API calls
//! (timeouts, user agent) and two escape hatches: a caller-supplied
//! `reqwest::Client` and an injectable transport.

use crate::config::ClientConfig;
use crate::error::RequestError;
use crate::transport::Transport;
use std::sync::Arc;
use std::time::Duration;

/// HTTP client wrapper holding the configuration every call reads.
#[derive(Clone)]
pub struct Client {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) transport: Option<Arc<dyn Transport>>,
}

impl Client {
    /// Create a client with default HTTP settings.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            transport: None,
        }
    }

    /// Start building a client with custom HTTP settings.
    pub fn builder(config: ClientConfig) -> ClientBuilder {
        ClientBuilder::new(config)
    }

    /// Current configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Mutable configuration, for the token lifecycle: set on login, clear
    /// on logout. Changes apply to calls issued afterwards.
    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }
}

/// Builder for [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    http_client: Option<reqwest::Client>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Create a builder for the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Use a caller-supplied `reqwest::Client` (takes precedence over all
    /// other HTTP settings).
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Connection timeout.
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = Some(connect_timeout);
        self
    }

    /// User-Agent header value.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Route non-multipart requests through a custom transport.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client, RequestError> {
        let http = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(connect_timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(connect_timeout);
                }
                if let Some(user_agent) = &self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder.build().map_err(|e| {
                    RequestError::ConfigurationError(format!("failed to build HTTP client: {e}"))
                })?
            }
        };
        Ok(Client {
            http,
            config: self.config,
            transport: self.transport,
        })
    }
}
