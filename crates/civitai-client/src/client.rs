//! Civitai API HTTP client

use crate::error::{CivitaiError, Result};
use crate::types::*;
use reqwest::StatusCode;
use std::time::Duration;

/// Client for interacting with the Civitai model registry API
///
/// Provides access to model details, version lookup by file hash, and
/// model search. An optional API token raises the rate limits Civitai
/// applies to anonymous callers.
pub struct CivitaiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl CivitaiClient {
    /// Base URL for the Civitai v1 API
    pub const BASE_URL: &'static str = "https://civitai.com/api/v1";

    const USER_AGENT: &'static str = "civitai-client-rs/0.1";

    /// Create a new client with default settings (30 second timeout)
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new client with a custom timeout
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_options(Self::BASE_URL, timeout, None)
    }

    /// Create a new client with a custom base URL, timeout, and API token
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

    /// Get detailed model information, including all published versions
    ///
    /// Returns `None` if no model exists for the given id.
    pub async fn get_model(&self, id: u64) -> Result<Option<ModelDetail>> {
        let url = format!("{}/models/{}", self.base_url, id);
        self.get_json(&url).await
    }

    /// Resolve a local file's SHA-256 digest to the model version it
    /// belongs to
    ///
    /// This is the primary lookup path for locally-discovered assets:
    /// Civitai indexes every uploaded file by its hash.
    pub async fn get_model_version_by_hash(&self, sha256: &str) -> Result<Option<ModelVersion>> {
        let url = format!("{}/model-versions/by-hash/{}", self.base_url, sha256);
        self.get_json(&url).await
    }

    /// Search models by name
    ///
    /// # Arguments
    /// * `query` - Search string matched against model names
    /// * `limit` - Maximum number of results to return
    pub async fn search_models(&self, query: &str, limit: u32) -> Result<Vec<ModelDetail>> {
        let url = format!(
            "{}/models?query={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        );
        let response: Option<ModelSearchResponse> = self.get_json(&url).await?;
        Ok(response.map(|r| r.items).unwrap_or_default())
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<Option<T>> {
        let mut request = self.http.get(url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(CivitaiError::Api(format!(
                "Civitai returned status {}",
                response.status()
            )));
        }

        Ok(Some(response.json().await?))
    }
}

impl Default for CivitaiClient {
    fn default() -> Self {
        Self::new()
    }
}
