//! Cache-first metadata aggregation with ordered provider fallback

use std::sync::Arc;
use std::time::Duration;

use file_metadata_cache::MetadataCache;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::provider::{MetadataProvider, ProviderError};

/// Default TTL for cached metadata (24 hours)
const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(86400);

/// Enriched metadata for one asset, annotated with which provider answered
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMetadata {
    pub provider_id: String,
    pub fields: serde_json::Map<String, serde_json::Value>,
}

/// Queries an ordered list of providers, returning the first success
///
/// Lookups are cache-first: a cache hit never contacts a provider. On a
/// miss, providers are tried in registration order; the first `found`
/// result is written through to the cache (best-effort) and returned.
/// Providers are never merged; first success wins, keeping provenance
/// unambiguous.
///
/// Works without a cache; in that mode every lookup walks the chain.
pub struct MetadataAggregator {
    providers: Vec<Arc<dyn MetadataProvider>>,
    cache: Option<Arc<MetadataCache>>,
    cache_ttl: Option<Duration>,
}

impl MetadataAggregator {
    /// Create an aggregator over providers in priority order, uncached
    pub fn new(providers: Vec<Arc<dyn MetadataProvider>>) -> Self {
        Self {
            providers,
            cache: None,
            cache_ttl: None,
        }
    }

    /// Attach a cache using the default TTL for write-through entries
    pub fn with_cache(self, cache: Arc<MetadataCache>) -> Self {
        self.with_cache_ttl(cache, Some(DEFAULT_CACHE_TTL))
    }

    /// Attach a cache with an explicit TTL; `ttl = None` caches results
    /// permanently
    pub fn with_cache_ttl(mut self, cache: Arc<MetadataCache>, ttl: Option<Duration>) -> Self {
        self.cache = Some(cache);
        self.cache_ttl = ttl;
        self
    }

    /// Look up metadata for an asset
    ///
    /// Returns `None` when every provider failed or reported the asset
    /// unknown; absence is an expected outcome, not an error. Cache
    /// faults never propagate: a failed read falls through to the
    /// providers and a failed write still returns the fetched result.
    pub async fn get_metadata(&self, asset_id: &str) -> Option<AssetMetadata> {
        let cache_key = cache_key(asset_id);

        if let Some(cache) = &self.cache {
            if let Some(cached) = cache.get::<AssetMetadata>(&cache_key).await {
                debug!(asset_id, provider = %cached.provider_id, "metadata cache hit");
                return Some(cached);
            }
        }

        for provider in &self.providers {
            match provider.fetch(asset_id).await {
                Ok(result) if result.found => {
                    debug!(asset_id, provider = %result.provider_id, "provider answered");
                    let metadata = AssetMetadata {
                        provider_id: result.provider_id,
                        fields: result.metadata,
                    };
                    if let Some(cache) = &self.cache {
                        cache.set(&cache_key, &metadata, self.cache_ttl).await;
                    }
                    return Some(metadata);
                }
                Ok(_) | Err(ProviderError::NotFound) => {
                    debug!(asset_id, provider = provider.id(), "asset unknown to provider");
                }
                Err(e) => {
                    warn!(asset_id, provider = provider.id(), error = %e, "provider failed, trying next");
                }
            }
        }

        debug!(asset_id, "no provider returned metadata");
        None
    }

    /// Providers in priority order, for diagnostics
    pub fn provider_ids(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.id()).collect()
    }
}

fn cache_key(asset_id: &str) -> String {
    format!("metadata:{asset_id}")
}
