//! Data types for Hub API responses
//!
//! The Hub mixes snake_case and camelCase field names, so renames are
//! spelled out per field rather than set crate-wide.

use serde::Deserialize;

/// Model repository metadata from `/api/models/{repo_id}`
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub sha: Option<String>,
    pub author: Option<String>,
    pub pipeline_tag: Option<String>,
    pub library_name: Option<String>,
    #[serde(rename = "lastModified")]
    pub last_modified: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub downloads: Option<u64>,
    pub likes: Option<u64>,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub gated: serde_json::Value,
    #[serde(default)]
    pub siblings: Vec<Sibling>,
}

/// A file within a model repository
#[derive(Debug, Clone, Deserialize)]
pub struct Sibling {
    pub rfilename: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_info_deserialization() {
        let json = r#"{
            "id": "stabilityai/stable-diffusion-xl-base-1.0",
            "sha": "462165984030d82259a11f4367a4eed129e94a7b",
            "author": "stabilityai",
            "pipeline_tag": "text-to-image",
            "library_name": "diffusers",
            "lastModified": "2023-10-30T16:03:47.000Z",
            "tags": ["diffusers", "text-to-image"],
            "downloads": 2219365,
            "likes": 5458,
            "private": false,
            "gated": false,
            "siblings": [{"rfilename": "model_index.json"}, {"rfilename": "unet/config.json"}]
        }"#;

        let info: ModelInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.id, "stabilityai/stable-diffusion-xl-base-1.0");
        assert_eq!(info.pipeline_tag.as_deref(), Some("text-to-image"));
        assert_eq!(info.siblings.len(), 2);
    }

    #[test]
    fn test_model_info_tolerates_sparse_response() {
        let json = r#"{"id": "someone/some-model"}"#;
        let info: ModelInfo = serde_json::from_str(json).unwrap();
        assert!(info.tags.is_empty());
        assert!(!info.private);
        // "gated" can be false or a string like "auto"
        assert!(info.gated.is_null());
    }

    #[test]
    fn test_gated_string_variant() {
        let json = r#"{"id": "m", "gated": "auto"}"#;
        let info: ModelInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.gated.as_str(), Some("auto"));
    }
}
