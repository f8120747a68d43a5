//! Metadata aggregation for locally-discovered models
//!
//! Enriches local model/asset identifiers with metadata fetched from
//! external registries. Providers are tried in registration order and the
//! first success wins; successful results are written through to a
//! persistent cache so repeated lookups never touch the network.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use civitai_client::CivitaiClient;
//! use file_metadata_cache::MetadataCache;
//! use modelbay_metadata::{CivitaiProvider, MetadataAggregator, MetadataProvider};
//!
//! # async fn example() -> std::io::Result<()> {
//! let cache = Arc::new(MetadataCache::new("/var/cache/modelbay").await?);
//! let providers: Vec<Arc<dyn MetadataProvider>> =
//!     vec![Arc::new(CivitaiProvider::new(CivitaiClient::new()))];
//! let aggregator = MetadataAggregator::new(providers).with_cache(cache);
//!
//! if let Some(metadata) = aggregator.get_metadata("879db523c3...").await {
//!     println!("answered by {}", metadata.provider_id);
//! }
//! # Ok(())
//! # }
//! ```

mod aggregator;
mod provider;
mod providers;

pub use aggregator::{AssetMetadata, MetadataAggregator};
pub use provider::{MetadataProvider, ProviderError, ProviderResult};
pub use providers::{CivitaiProvider, HuggingFaceProvider};
