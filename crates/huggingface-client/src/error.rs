//! Error types for the Hugging Face Hub client

use std::fmt;

/// Errors that can occur when interacting with the Hub API
#[derive(Debug)]
pub enum HfHubError {
    /// HTTP request failed (includes timeouts)
    Http(reqwest::Error),
    /// The API returned a non-success status
    Api(String),
}

impl HfHubError {
    /// Whether the underlying failure was a request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

impl fmt::Display for HfHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Hub HTTP error: {e}"),
            Self::Api(msg) => write!(f, "Hub API error: {msg}"),
        }
    }
}

impl std::error::Error for HfHubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Api(_) => None,
        }
    }
}

impl From<reqwest::Error> for HfHubError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

/// Result type for Hub API operations
pub type Result<T> = std::result::Result<T, HfHubError>;
