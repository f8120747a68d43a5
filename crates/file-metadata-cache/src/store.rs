//! Persistent key/value store backed by one JSON file per key

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde::Serialize;
use sha2::{Digest, Sha256};
use tokio::fs;
use tracing::{debug, warn};

use crate::types::{CacheRecord, CacheStats};

/// Sanitized keys longer than this are truncated and hash-suffixed
const MAX_KEY_LEN: usize = 200;
const TRUNCATED_KEY_LEN: usize = 190;

/// Counter used to keep temp file names unique within the process
static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Outcome of reading a persisted record
///
/// Corruption is kept distinct from a clean miss so callers can heal the
/// entry and log a diagnostic; both surface to the public API as absent.
enum ReadOutcome {
    Hit(CacheRecord),
    Miss,
    Corrupt,
}

/// Persistent metadata cache rooted at a directory
///
/// Each key maps to a single JSON file; writes replace the file atomically
/// so concurrent readers observe either the old or the new record, never a
/// partial one. All failures on the read path collapse to "absent" and all
/// failures on the write path are logged and swallowed: a cache fault must
/// never break the caller's primary operation.
pub struct MetadataCache {
    root: PathBuf,
}

impl MetadataCache {
    /// Create a cache rooted at `root`, creating the directory if needed
    pub async fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    /// Get the cached value for `key` if present and unexpired
    ///
    /// Expired and corrupt entries are removed before returning `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.read_record(key).await {
            ReadOutcome::Hit(record) => match serde_json::from_value(record.value) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(key, error = %e, "cached value does not match requested type");
                    None
                }
            },
            ReadOutcome::Miss | ReadOutcome::Corrupt => None,
        }
    }

    /// Persist `value` under `key`, replacing any prior entry
    ///
    /// `ttl = None` means the entry never expires. Best-effort: persistence
    /// failures are logged and swallowed.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T, ttl: Option<Duration>) {
        let value = match serde_json::to_value(value) {
            Ok(v) => v,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize value for cache");
                return;
            }
        };
        let record = CacheRecord {
            value,
            created_at: now_epoch_secs(),
            ttl: ttl.map(|d| d.as_secs_f64()),
        };
        if let Err(e) = self.write_record(&self.entry_path(key), &record).await {
            warn!(key, error = %e, "failed to persist cache entry");
        }
    }

    /// Remove the entry for `key`, returning whether one existed
    pub async fn delete(&self, key: &str) -> bool {
        match fs::remove_file(self.entry_path(key)).await {
            Ok(()) => true,
            Err(e) if e.kind() == ErrorKind::NotFound => false,
            Err(e) => {
                warn!(key, error = %e, "failed to delete cache entry");
                false
            }
        }
    }

    /// Whether an unexpired entry exists for `key`
    ///
    /// Same expiry and self-healing semantics as [`get`](Self::get).
    pub async fn exists(&self, key: &str) -> bool {
        matches!(self.read_record(key).await, ReadOutcome::Hit(_))
    }

    /// Remove all entries, best-effort
    pub async fn clear(&self) {
        let mut dir = match fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(e) if e.kind() == ErrorKind::NotFound => return,
            Err(e) => {
                warn!(error = %e, "failed to scan cache directory");
                return;
            }
        };
        loop {
            match dir.next_entry().await {
                Ok(Some(entry)) if is_record_file(&entry.path()) => {
                    if let Err(e) = fs::remove_file(entry.path()).await {
                        warn!(path = %entry.path().display(), error = %e, "failed to remove cache entry");
                    }
                }
                Ok(Some(_)) => {}
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "cache directory scan failed");
                    break;
                }
            }
        }
    }

    /// Remove every expired or corrupt entry, returning the count removed
    ///
    /// Full scan; intended for periodic background invocation rather than
    /// the request path.
    pub async fn cleanup_expired(&self) -> usize {
        let now = now_epoch_secs();
        let mut removed = 0;
        for path in self.record_paths().await {
            let stale = match read_record_file(&path).await {
                ReadOutcome::Hit(record) => record.is_expired(now),
                ReadOutcome::Miss => false,
                ReadOutcome::Corrupt => true,
            };
            if stale && fs::remove_file(&path).await.is_ok() {
                removed += 1;
            }
        }
        debug!(removed, "cache cleanup finished");
        removed
    }

    /// Compute cache statistics with a full scan
    ///
    /// Corrupt records count as expired for reporting purposes. The scan
    /// holds no lock; the result is a best-effort snapshot.
    pub async fn stats(&self) -> CacheStats {
        let now = now_epoch_secs();
        let mut stats = CacheStats::default();
        for path in self.record_paths().await {
            if let Ok(meta) = fs::metadata(&path).await {
                stats.size_bytes += meta.len();
            }
            stats.total_entries += 1;
            match read_record_file(&path).await {
                ReadOutcome::Hit(record) if record.is_expired(now) => stats.expired_entries += 1,
                ReadOutcome::Corrupt => stats.expired_entries += 1,
                _ => {}
            }
        }
        stats
    }

    /// Translate a caller-supplied key into the path of its record file
    ///
    /// Non-alphanumeric characters other than `-`, `_` and `.` become `_`;
    /// over-long keys are truncated and suffixed with a hash of the
    /// original key to stay collision-free.
    fn entry_path(&self, key: &str) -> PathBuf {
        let mut sanitized: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        if sanitized.len() > MAX_KEY_LEN {
            let digest = hex::encode(Sha256::digest(key.as_bytes()));
            sanitized.truncate(TRUNCATED_KEY_LEN);
            sanitized.push('_');
            sanitized.push_str(&digest[..8]);
        }
        self.root.join(format!("{sanitized}.json"))
    }

    async fn read_record(&self, key: &str) -> ReadOutcome {
        let path = self.entry_path(key);
        let outcome = read_record_file(&path).await;
        match &outcome {
            ReadOutcome::Hit(record) if record.is_expired(now_epoch_secs()) => {
                debug!(key, "cache entry expired");
                remove_quietly(&path).await;
                return ReadOutcome::Miss;
            }
            ReadOutcome::Corrupt => {
                warn!(key, "removing corrupt cache entry");
                remove_quietly(&path).await;
            }
            _ => {}
        }
        outcome
    }

    /// Write via a unique temp file then rename, so a concurrent reader or
    /// an interrupted process never observes a half-written record
    async fn write_record(&self, path: &Path, record: &CacheRecord) -> std::io::Result<()> {
        let data = serde_json::to_vec(record)
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;
        let tmp = self.root.join(format!(
            ".tmp-{}-{}",
            std::process::id(),
            TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::write(&tmp, &data).await?;
        if let Err(e) = fs::rename(&tmp, path).await {
            remove_quietly(&tmp).await;
            return Err(e);
        }
        Ok(())
    }

    async fn record_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        let mut dir = match fs::read_dir(&self.root).await {
            Ok(dir) => dir,
            Err(e) => {
                if e.kind() != ErrorKind::NotFound {
                    warn!(error = %e, "failed to scan cache directory");
                }
                return paths;
            }
        };
        while let Ok(Some(entry)) = dir.next_entry().await {
            let path = entry.path();
            if is_record_file(&path) {
                paths.push(path);
            }
        }
        paths
    }
}

fn is_record_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

fn now_epoch_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0)
}

async fn read_record_file(path: &Path) -> ReadOutcome {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return ReadOutcome::Miss,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read cache entry");
            return ReadOutcome::Corrupt;
        }
    };
    match serde_json::from_slice::<CacheRecord>(&bytes) {
        Ok(record) => ReadOutcome::Hit(record),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "malformed cache entry");
            ReadOutcome::Corrupt
        }
    }
}

async fn remove_quietly(path: &Path) {
    if let Err(e) = fs::remove_file(path).await {
        if e.kind() != ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "failed to remove cache entry");
        }
    }
}
