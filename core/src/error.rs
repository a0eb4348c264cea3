//! Error types for the server request helper.
//!
//! # Design
//! Transport and JSON failures are passed through untouched (`transparent`),
//! so the caller sees the original error's message and source chain. A
//! non-success status is the only error the helper synthesizes, and it
//! carries nothing but a fixed message: the status code and body are dropped.

/// Error type produced by `Transport` implementations.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by `ServerClient::request` and `parse_response`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connection refused, ...).
    #[error(transparent)]
    Transport(BoxError),

    /// The server answered with a status outside `200..=299`.
    #[error("Server request failed")]
    ServerRequestFailed,

    /// The response body is not valid JSON for the requested type.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, FetchError::Decode(_))
    }
}
