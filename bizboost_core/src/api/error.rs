use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while processing requests
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We couldn't reach the server or read what it sent back.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request (4xx). The message is safe to show to
    /// the person using the client.
    #[error("{0}")]
    Client(String),

    /// The server failed to process the request (5xx).
    #[error("server error")]
    Server,

    /// The server returned a status we don't know how to interpret.
    #[error("unexpected status: {0}")]
    Unexpected(reqwest::StatusCode),
}

/// The body of every failed JSON response.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResp {
    /// Always `false`.
    pub success: bool,

    /// What went wrong, in words suitable for the person signing up or
    /// logging in.
    pub message: String,
}

impl ErrorResp {
    /// Construct a failure body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
