//! Cache Statistics Module
//!
//! Counters kept by the track cache engine. Only [`TrackCache::get`] counts
//! hits and misses; `contains` and slot listings never do.
//!
//! [`TrackCache::get`]: crate::cache::TrackCache::get

use serde::Serialize;

// == Cache Stats ==
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// `get` calls that found a cached track
    pub hits: u64,
    /// `get` calls for a title with no occupied slot
    pub misses: u64,
    /// Tracks dropped to make room, either for a put or for a shrink
    pub evictions: u64,
    /// Puts handed back because no slot could be freed (zero capacity)
    pub failed_inserts: u64,
    /// Occupied slots at the time of the snapshot
    pub total_entries: usize,
}

impl CacheStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// hits / (hits + misses); 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_failed_insert(&mut self) {
        self.failed_inserts += 1;
    }

    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
