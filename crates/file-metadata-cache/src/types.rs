//! Cache types

use serde::{Deserialize, Serialize};

/// On-disk representation of a single cache entry
///
/// `created_at` is epoch seconds with float precision; `ttl` is a duration
/// in seconds, absent for entries that never expire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct CacheRecord {
    pub value: serde_json::Value,
    pub created_at: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttl: Option<f64>,
}

impl CacheRecord {
    /// An entry without a TTL is permanent until explicitly deleted
    pub fn is_expired(&self, now: f64) -> bool {
        matches!(self.ttl, Some(ttl) if now > self.created_at + ttl)
    }
}

/// Statistics about the cache, recomputed on demand by a full scan
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CacheStats {
    pub total_entries: usize,
    pub expired_entries: usize,
    pub size_bytes: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_stats_default() {
        let stats = CacheStats::default();
        assert_eq!(stats.total_entries, 0);
        assert_eq!(stats.expired_entries, 0);
        assert_eq!(stats.size_bytes, 0);
    }

    #[test]
    fn test_record_without_ttl_never_expires() {
        let record = CacheRecord {
            value: serde_json::json!({"name": "model"}),
            created_at: 0.0,
            ttl: None,
        };
        assert!(!record.is_expired(1e12));
    }

    #[test]
    fn test_record_expiry_boundary() {
        let record = CacheRecord {
            value: serde_json::Value::Null,
            created_at: 100.0,
            ttl: Some(10.0),
        };
        assert!(!record.is_expired(105.0));
        assert!(!record.is_expired(110.0));
        assert!(record.is_expired(110.5));
    }

    #[test]
    fn test_record_serialization_omits_absent_ttl() {
        let record = CacheRecord {
            value: serde_json::json!(42),
            created_at: 1700000000.5,
            ttl: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("ttl"));

        let with_ttl = CacheRecord {
            ttl: Some(3600.0),
            ..record
        };
        let json = serde_json::to_string(&with_ttl).unwrap();
        assert!(json.contains("\"ttl\":3600.0"));

        let parsed: CacheRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.ttl, Some(3600.0));
        assert_eq!(parsed.created_at, 1700000000.5);
    }
}
