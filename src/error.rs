//! Error types for the mwdict crate.

use thiserror::Error;

/// The error type for every fallible operation in this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The request never produced a response (DNS, TLS, connection reset, ...).
    #[error("request to dictionary API failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status code.
    #[error("Error fetching data from MW API: {0}")]
    Status(u16),

    #[error("invalid JSON from dictionary API: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// `MW_API_KEY` is unset or empty.
    #[error("no API key configured, set {0}")]
    MissingApiKey(&'static str),

    /// The response parsed as JSON but was not a top-level array.
    #[error("unexpected response shape: {0}")]
    UnexpectedResponse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
