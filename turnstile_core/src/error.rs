use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while calling the API
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't parse a URL, for example if the base URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We couldn't talk to the server or decode what it sent back.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server rejected the request (4xx.) The message comes from the
    /// server's error body.
    #[error("client error: {0}")]
    Client(String),

    /// The server failed to handle the request (5xx.) The server does not
    /// expose details about these.
    #[error("server error")]
    Server,

    /// The server responded with a status we don't expect it to use.
    #[error("unexpected status: {0}")]
    Unexpected(reqwest::StatusCode),
}

/// The body the server sends along with any non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResp {
    /// Human-readable description of what went wrong.
    pub error: String,
}
