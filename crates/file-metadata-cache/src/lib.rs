//! File-based metadata cache with TTL expiration
//!
//! Stores JSON records on disk, one file per key, with per-entry TTL,
//! atomic replacement on write, and self-healing removal of corrupt
//! records on read.

mod store;
mod types;

pub use store::MetadataCache;
pub use types::CacheStats;
