//! Package details caching with TTL support
//!
//! Only single-package lookups are cached; search results are too
//! volatile to be worth keeping. Stale entries read as a miss but stay
//! in place until the next successful fetch overwrites them, so a
//! failed refresh never evicts data that could still be shown.

use std::time::{Duration, SystemTime};

use dashmap::DashMap;
use serde::{Deserialize, Serialize};

use spyglass_core::types::PackageDetails;

#[cfg(test)]
mod tests;

/// Freshness window applied to cached lookups (5 minutes)
pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

/// One cached lookup with its storage timestamp and freshness window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Cached package details
    pub details: PackageDetails,
    /// Insertion timestamp
    pub stored_at: SystemTime,
    /// Freshness window for this entry
    pub ttl: Duration,
}

impl CacheEntry {
    /// Stamp `details` with the current time and the given TTL
    pub fn new(details: PackageDetails, ttl: Duration) -> Self {
        Self {
            details,
            stored_at: SystemTime::now(),
            ttl,
        }
    }

    /// Whether the entry is still inside its freshness window.
    ///
    /// A clock that reports a time before `stored_at` reads as stale.
    pub fn is_fresh(&self) -> bool {
        self.stored_at
            .elapsed()
            .map(|elapsed| elapsed < self.ttl)
            .unwrap_or(false)
    }

    /// Time since the entry was stored, if the clock agrees one exists
    pub fn age(&self) -> Option<Duration> {
        self.stored_at.elapsed().ok()
    }
}

/// In-memory package details cache with TTL.
///
/// There is no in-flight de-duplication: concurrent misses for the same
/// name may each fetch, and the last write wins with equivalent data.
#[derive(Debug)]
pub struct DetailsCache {
    /// Cache storage keyed by package name
    entries: DashMap<String, CacheEntry>,
    /// TTL stamped onto new entries
    ttl: Duration,
}

impl DetailsCache {
    /// Create a cache with the default freshness window
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Create a cache with a custom freshness window
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Get cached details if fresh. Stale entries are left in place
    /// for the next insert to overwrite.
    pub fn get(&self, package_name: &str) -> Option<PackageDetails> {
        let entry = self.entries.get(package_name)?;
        entry.is_fresh().then(|| entry.details.clone())
    }

    /// Store details, replacing any previous entry wholesale
    pub fn insert(&self, package_name: String, details: PackageDetails) {
        self.entries
            .insert(package_name, CacheEntry::new(details, self.ttl));
    }

    /// Check if a package is cached and fresh
    pub fn contains_fresh(&self, package_name: &str) -> bool {
        self.entries
            .get(package_name)
            .is_some_and(|entry| entry.is_fresh())
    }

    /// Count entries by freshness
    pub fn stats(&self) -> CacheStats {
        let mut stats = CacheStats::default();
        for entry in self.entries.iter() {
            stats.total_entries += 1;
            if entry.is_fresh() {
                stats.fresh_entries += 1;
            } else {
                stats.stale_entries += 1;
            }
        }
        stats
    }

    /// Remove every entry, fresh or not
    pub fn clear(&self) {
        self.entries.clear();
    }
}

impl Default for DetailsCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry counts by freshness
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Entries currently stored
    pub total_entries: usize,
    /// Entries inside their freshness window
    pub fresh_entries: usize,
    /// Entries past their freshness window
    pub stale_entries: usize,
}
