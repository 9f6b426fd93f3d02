//! Client error type.

use thiserror::Error;

/// Errors surfaced by the client and its executors.
///
/// The user operations add nothing of their own: whatever an executor
/// produces is what the caller sees. `Api` only appears when a caller opts
/// into envelope classification.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying transport failed (connect, timeout, TLS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A request payload could not be serialized to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A response body could not be deserialized from JSON.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The configured base URL is not a valid URL.
    #[error("invalid base URL '{0}'")]
    InvalidUrl(String),

    /// The server answered with a non-success business code.
    #[error("server rejected request: [{code}] {message}")]
    Api { code: i64, message: String },
}

impl ClientError {
    /// Create an encode error.
    pub fn encode(err: serde_json::Error) -> Self {
        ClientError::Encode(err)
    }

    /// Create a decode error.
    pub fn decode(err: serde_json::Error) -> Self {
        ClientError::Decode(err)
    }

    /// Create an invalid URL error.
    pub fn invalid_url(url: impl Into<String>) -> Self {
        ClientError::InvalidUrl(url.into())
    }

    /// Create an error from a server business code and message.
    pub fn api(code: i64, message: impl Into<String>) -> Self {
        ClientError::Api {
            code,
            message: message.into(),
        }
    }
}
