//! Hugging Face Hub API HTTP client

use crate::error::{HfHubError, Result};
use crate::types::ModelInfo;
use reqwest::StatusCode;
use std::time::Duration;

/// Client for the Hugging Face Hub model API
///
/// An optional access token grants visibility into gated or private
/// repositories; anonymous access works for public models.
pub struct HfHubClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HfHubClient {
    /// Base URL for the Hub API
    pub const BASE_URL: &'static str = "https://huggingface.co/api";

    const USER_AGENT: &'static str = "huggingface-client-rs/0.1";

    /// Create a new client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_options(Self::BASE_URL, timeout, None)
    }

    /// Create a new client with a custom base URL, timeout, and token
    ///
    /// The timeout and token are fixed for the lifetime of the client.
    pub fn with_options(base_url: &str, timeout: Duration, token: Option<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(Self::USER_AGENT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Get repository metadata for a model
    ///
    /// `repo_id` is the canonical `owner/name` form; it is passed through
    /// as a path, not encoded. Returns `None` if the repository does not
    /// exist or is not visible to the caller.
    pub async fn get_model(&self, repo_id: &str) -> Result<Option<ModelInfo>> {
        let url = format!("{}/models/{}", self.base_url, repo_id);

        let mut request = self.http.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        // The Hub answers 401 for gated/private repos an anonymous caller
        // cannot see; treat that the same as absent
        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::UNAUTHORIZED {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(HfHubError::Api(format!("Hub returned status {status}")));
        }

        Ok(Some(response.json().await?))
    }
}

impl Default for HfHubClient {
    fn default() -> Self {
        Self::new()
    }
}
