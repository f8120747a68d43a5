//! Provider capability contract

use async_trait::async_trait;
use std::fmt;

/// Outcome of a single provider lookup
#[derive(Debug, Clone)]
pub struct ProviderResult {
    /// Whether the provider recognizes the asset
    pub found: bool,
    /// Flattened metadata fields; empty when `found` is false
    pub metadata: serde_json::Map<String, serde_json::Value>,
    /// Identifier of the provider that produced this result
    pub provider_id: String,
}

impl ProviderResult {
    /// A successful lookup with metadata
    pub fn found(
        provider_id: impl Into<String>,
        metadata: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self {
            found: true,
            metadata,
            provider_id: provider_id.into(),
        }
    }

    /// The provider answered but had nothing for this asset
    pub fn not_found(provider_id: impl Into<String>) -> Self {
        Self {
            found: false,
            metadata: serde_json::Map::new(),
            provider_id: provider_id.into(),
        }
    }
}

/// Distinguished provider failures
///
/// Every failure mode of a provider collapses into one of these variants so
/// the aggregator can treat any non-success uniformly; providers never
/// surface an unhandled fault.
#[derive(Debug)]
pub enum ProviderError {
    /// The registry could not be reached or answered with a server error
    Unavailable(String),
    /// The request exceeded the provider's configured timeout
    Timeout,
    /// The registry answered authoritatively that the asset is unknown
    NotFound,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "provider unavailable: {msg}"),
            Self::Timeout => write!(f, "provider timed out"),
            Self::NotFound => write!(f, "asset not known to provider"),
        }
    }
}

impl std::error::Error for ProviderError {}

/// A single external metadata registry
///
/// Implementations own their network session, timeout, and credentials,
/// all fixed at construction. A disabled provider is represented by not
/// registering it at all, never by a runtime flag.
#[async_trait]
pub trait MetadataProvider: Send + Sync {
    /// Stable identifier used for provenance and cache records
    fn id(&self) -> &str;

    /// Fetch metadata for an asset identifier
    async fn fetch(&self, asset_id: &str) -> Result<ProviderResult, ProviderError>;
}
