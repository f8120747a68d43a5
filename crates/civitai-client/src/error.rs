//! Error types for the Civitai API client

use std::fmt;

/// Errors that can occur when interacting with the Civitai API
#[derive(Debug)]
pub enum CivitaiError {
    /// HTTP request failed (includes timeouts)
    Http(reqwest::Error),
    /// The API returned a non-success status
    Api(String),
}

impl CivitaiError {
    /// Whether the underlying failure was a request timeout
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

impl fmt::Display for CivitaiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Civitai HTTP error: {e}"),
            Self::Api(msg) => write!(f, "Civitai API error: {msg}"),
        }
    }
}

impl std::error::Error for CivitaiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Api(_) => None,
        }
    }
}

impl From<reqwest::Error> for CivitaiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

/// Result type for Civitai API operations
pub type Result<T> = std::result::Result<T, CivitaiError>;
