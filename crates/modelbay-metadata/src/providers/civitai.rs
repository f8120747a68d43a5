//! Civitai-backed metadata provider

use async_trait::async_trait;
use civitai_client::{CivitaiClient, ModelVersion};
use serde_json::{json, Map, Value};

use crate::provider::{MetadataProvider, ProviderError, ProviderResult};

const PROVIDER_ID: &str = "civitai";

/// Resolves asset identifiers against Civitai
///
/// Asset identifiers are SHA-256 digests of local model files; Civitai
/// indexes every uploaded file by hash, so this is a direct lookup.
pub struct CivitaiProvider {
    client: CivitaiClient,
}

impl CivitaiProvider {
    pub fn new(client: CivitaiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MetadataProvider for CivitaiProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn fetch(&self, asset_id: &str) -> Result<ProviderResult, ProviderError> {
        match self.client.get_model_version_by_hash(asset_id).await {
            Ok(Some(version)) => Ok(ProviderResult::found(PROVIDER_ID, flatten_version(&version))),
            Ok(None) => Err(ProviderError::NotFound),
            Err(e) if e.is_timeout() => Err(ProviderError::Timeout),
            Err(e) => Err(ProviderError::Unavailable(e.to_string())),
        }
    }
}

/// Flatten a version response into provider-agnostic metadata fields
fn flatten_version(version: &ModelVersion) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("version_id".into(), json!(version.id));
    fields.insert("version_name".into(), json!(version.name));
    if let Some(model_id) = version.model_id {
        fields.insert("model_id".into(), json!(model_id));
    }
    if let Some(model) = &version.model {
        fields.insert("name".into(), json!(model.name));
        if let Some(model_type) = &model.model_type {
            fields.insert("model_type".into(), json!(model_type));
        }
        fields.insert("nsfw".into(), json!(model.nsfw));
    }
    if let Some(base_model) = &version.base_model {
        fields.insert("base_model".into(), json!(base_model));
    }
    if !version.trained_words.is_empty() {
        fields.insert("trained_words".into(), json!(version.trained_words));
    }
    if let Some(download_url) = &version.download_url {
        fields.insert("download_url".into(), json!(download_url));
    }
    if let Some(url) = version.images.first().map(|i| &i.url) {
        fields.insert("preview_url".into(), json!(url));
    }
    if let Some(sha256) = version
        .files
        .iter()
        .find_map(|f| f.hashes.get("SHA256"))
    {
        fields.insert("sha256".into(), json!(sha256));
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_version() {
        let version: ModelVersion = serde_json::from_value(json!({
            "id": 128713,
            "modelId": 4384,
            "name": "v8.0",
            "baseModel": "SD 1.5",
            "trainedWords": ["dreamy"],
            "downloadUrl": "https://civitai.com/api/download/models/128713",
            "files": [{"name": "m.safetensors", "hashes": {"SHA256": "879DB523C3"}}],
            "images": [{"url": "https://image.civitai.com/a.jpeg"}],
            "model": {"name": "DreamShaper", "type": "Checkpoint", "nsfw": false}
        }))
        .unwrap();

        let fields = flatten_version(&version);
        assert_eq!(fields["name"], json!("DreamShaper"));
        assert_eq!(fields["model_type"], json!("Checkpoint"));
        assert_eq!(fields["version_id"], json!(128713));
        assert_eq!(fields["base_model"], json!("SD 1.5"));
        assert_eq!(fields["trained_words"], json!(["dreamy"]));
        assert_eq!(fields["preview_url"], json!("https://image.civitai.com/a.jpeg"));
        assert_eq!(fields["sha256"], json!("879DB523C3"));
    }

    #[test]
    fn test_flatten_sparse_version() {
        let version: ModelVersion =
            serde_json::from_value(json!({"id": 1, "name": "v1"})).unwrap();
        let fields = flatten_version(&version);
        assert_eq!(fields["version_id"], json!(1));
        assert!(!fields.contains_key("name"));
        assert!(!fields.contains_key("trained_words"));
        assert!(!fields.contains_key("sha256"));
    }
}
