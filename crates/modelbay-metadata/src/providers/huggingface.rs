//! Hugging Face Hub-backed metadata provider

use async_trait::async_trait;
use huggingface_client::{HfHubClient, ModelInfo};
use serde_json::{json, Map, Value};

use crate::provider::{MetadataProvider, ProviderError, ProviderResult};

const PROVIDER_ID: &str = "huggingface";

/// Resolves asset identifiers against the Hugging Face Hub
///
/// Asset identifiers are treated as `owner/name` repository ids.
/// Identifiers that cannot be a repo id (no slash) are skipped without a
/// network round trip.
pub struct HuggingFaceProvider {
    client: HfHubClient,
}

impl HuggingFaceProvider {
    pub fn new(client: HfHubClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetadataProvider for HuggingFaceProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn fetch(&self, asset_id: &str) -> Result<ProviderResult, ProviderError> {
        if !looks_like_repo_id(asset_id) {
            return Err(ProviderError::NotFound);
        }
        match self.client.get_model(asset_id).await {
            Ok(Some(info)) => Ok(ProviderResult::found(PROVIDER_ID, flatten_model_info(&info))),
            Ok(None) => Err(ProviderError::NotFound),
            Err(e) if e.is_timeout() => Err(ProviderError::Timeout),
            Err(e) => Err(ProviderError::Unavailable(e.to_string())),
        }
    }
}

/// A Hub repo id is `owner/name`, one slash, no empty halves
fn looks_like_repo_id(asset_id: &str) -> bool {
    match asset_id.split_once('/') {
        Some((owner, name)) => {
            !owner.is_empty() && !name.is_empty() && !name.contains('/')
        }
        None => false,
    }
}

/// Flatten a repository response into provider-agnostic metadata fields
fn flatten_model_info(info: &ModelInfo) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("name".into(), json!(info.id));
    if let Some(author) = &info.author {
        fields.insert("author".into(), json!(author));
    }
    if let Some(pipeline_tag) = &info.pipeline_tag {
        fields.insert("pipeline_tag".into(), json!(pipeline_tag));
    }
    if let Some(library_name) = &info.library_name {
        fields.insert("library_name".into(), json!(library_name));
    }
    if let Some(last_modified) = &info.last_modified {
        fields.insert("last_modified".into(), json!(last_modified));
    }
    if !info.tags.is_empty() {
        fields.insert("tags".into(), json!(info.tags));
    }
    if let Some(downloads) = info.downloads {
        fields.insert("downloads".into(), json!(downloads));
    }
    if let Some(likes) = info.likes {
        fields.insert("likes".into(), json!(likes));
    }
    if let Some(sha) = &info.sha {
        fields.insert("revision".into(), json!(sha));
    }
    fields
}
