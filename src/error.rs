//! Error type shared by the transport, the retailer clients and the service.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while parsing a retailer category.
#[derive(Debug, Error)]
pub enum Error {
    /// A required input is missing or blank.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never produced a response (connection, TLS, IO).
    #[error("request failed: {0}")]
    Transport(#[from] wreq::Error),

    /// The provider answered with something other than 200 OK.
    #[error("server returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not have the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No catalog category matched the requested name.
    #[error("category not found: {0}")]
    CategoryNotFound(String),
}

impl Error {
    /// True for failures of the request itself, as opposed to decoding or lookup.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Error::Transport(_) | Error::Status { .. })
    }

    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
