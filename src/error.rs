//! Error types for wonton.
//!
//! Every failure a call can hit maps to one variant; the `Display` output is
//! the description handed to failure callbacks.

use thiserror::Error;

/// Errors surfaced by request dispatch.
#[derive(Debug, Error)]
pub enum RequestError {
    /// Network/connection-level failure reported by the transport. The
    /// transport's own text is surfaced verbatim.
    #[error("{0}")]
    HttpError(String),

    /// Non-2xx HTTP status from the server.
    #[error("HTTP {code}: {message}")]
    ApiError {
        /// HTTP status code.
        code: u16,
        /// Response body text, or the status' canonical reason when empty.
        message: String,
    },

    /// Response bytes are not valid JSON. Only raised by the dynamic decode
    /// strategy, before model construction.
    #[error("JSON parse error: {0}")]
    ParseError(String),

    /// Response bytes do not match the expected model shape. Only raised by
    /// the schema decode strategy.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Empty or invalid base URL, or an unusable header value. The call
    /// cannot be constructed; this is a programming error, not a runtime
    /// condition, and is never routed through failure callbacks.
    #[error("configuration error: {0}")]
    ConfigurationError(String),
}

impl RequestError {
    /// Construct an `ApiError` from a status code and message.
    pub fn api_error(code: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            code,
            message: message.into(),
        }
    }

    /// HTTP status code carried by this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::ApiError { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type for wonton operations.
pub type Result<T> = std::result::Result<T, RequestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_displays_transport_text_verbatim() {
        let err = RequestError::HttpError("timeout".to_string());
        assert_eq!(err.to_string(), "timeout");
    }

    #[test]
    fn api_error_carries_status() {
        let err = RequestError::api_error(500, "server error");
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.to_string(), "HTTP 500: server error");
    }
}
