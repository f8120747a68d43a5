//! Data types for Civitai API responses
//!
//! These structs mirror the Civitai API responses. Some fields may not be
//! used but are kept for completeness and future use.

use serde::Deserialize;
use std::collections::HashMap;

/// Model detail from `/models/{id}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDetail {
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub model_type: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub nsfw: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    pub creator: Option<ModelCreator>,
    #[serde(default)]
    pub model_versions: Vec<ModelVersion>,
}

/// Model author information
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelCreator {
    pub username: Option<String>,
    pub image: Option<String>,
}

/// A single published version of a model, also returned standalone by
/// `/model-versions/by-hash/{hash}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelVersion {
    pub id: u64,
    pub model_id: Option<u64>,
    pub name: String,
    pub base_model: Option<String>,
    #[serde(default)]
    pub trained_words: Vec<String>,
    pub download_url: Option<String>,
    #[serde(default)]
    pub files: Vec<ModelFile>,
    #[serde(default)]
    pub images: Vec<ModelImage>,
    /// Summary of the owning model, present in by-hash responses
    pub model: Option<ModelSummary>,
}

/// Compact model summary embedded in a version response
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSummary {
    pub name: String,
    #[serde(rename = "type")]
    pub model_type: Option<String>,
    #[serde(default)]
    pub nsfw: bool,
}

/// A downloadable file attached to a model version
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelFile {
    pub name: String,
    #[serde(rename = "sizeKB")]
    pub size_kb: Option<f64>,
    /// Digest algorithm name to hex digest, e.g. "SHA256"
    #[serde(default)]
    pub hashes: HashMap<String, String>,
}

/// A preview image attached to a model version
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelImage {
    pub url: String,
    pub nsfw_level: Option<u32>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Paged response from `/models`
#[derive(Debug, Clone, Deserialize)]
pub struct ModelSearchResponse {
    #[serde(default)]
    pub items: Vec<ModelDetail>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_by_hash_deserialization() {
        let json = r#"{
            "id": 128713,
            "modelId": 4384,
            "name": "v8.0",
            "baseModel": "SD 1.5",
            "trainedWords": [],
            "downloadUrl": "https://civitai.com/api/download/models/128713",
            "files": [
                {
                    "name": "dreamshaper_8.safetensors",
                    "sizeKB": 2082642.6,
                    "hashes": {"SHA256": "879DB523C3", "AutoV2": "879DB523C3"}
                }
            ],
            "images": [
                {"url": "https://image.civitai.com/x.jpeg", "nsfwLevel": 1, "width": 512, "height": 768}
            ],
            "model": {"name": "DreamShaper", "type": "Checkpoint", "nsfw": false}
        }"#;

        let version: ModelVersion = serde_json::from_str(json).unwrap();
        assert_eq!(version.id, 128713);
        assert_eq!(version.model_id, Some(4384));
        assert_eq!(version.base_model.as_deref(), Some("SD 1.5"));
        assert_eq!(version.files[0].hashes["SHA256"], "879DB523C3");
        assert_eq!(version.model.unwrap().name, "DreamShaper");
    }

    #[test]
    fn test_model_detail_tolerates_missing_fields() {
        let json = r#"{"id": 4384, "name": "DreamShaper", "type": "Checkpoint"}"#;
        let model: ModelDetail = serde_json::from_str(json).unwrap();
        assert_eq!(model.id, 4384);
        assert!(model.tags.is_empty());
        assert!(model.model_versions.is_empty());
    }
}
