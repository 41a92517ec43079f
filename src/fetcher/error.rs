//! Fetch error taxonomy.

use thiserror::Error;

/// Errors that can occur while fetching from the hospital backend.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Base URL and route did not form a valid URL.
    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Connection, DNS, TLS, or configured timeout failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success status with a body that could not be decoded.
    #[error("Backend returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Malformed body or missing required fields.
    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short label used for log fields and metric outcomes.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidUrl { .. } => "invalid_url",
            FetchError::Transport(e) if e.is_timeout() => "timeout",
            FetchError::Transport(_) => "transport",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
