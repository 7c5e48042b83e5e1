//! Cache Service Module
//!
//! Makes tracks cache-ready: clones the source track, prepares the clone and
//! hands it to the cache engine, reporting what happened.

use serde::Serialize;
use tracing::{error, info, warn};

use crate::cache::{CacheStats, CacheStatus, PutOutcome, TrackCache};
use crate::track::AudioTrack;

// == Load Outcome ==
/// What [`CacheService::load_track_to_cache`] did with a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOutcome {
    /// Already cached; recency refreshed
    Hit,
    /// Prepared and stored without displacing anything
    MissInserted,
    /// Prepared and stored after evicting another track
    MissEvicted,
    /// Not cached: the clone failed or there was no room
    MissFailed,
}

impl LoadOutcome {
    /// Stable numeric code for display and logs.
    pub fn code(self) -> i8 {
        match self {
            LoadOutcome::Hit => 1,
            LoadOutcome::MissInserted => 0,
            LoadOutcome::MissEvicted => -1,
            LoadOutcome::MissFailed => -2,
        }
    }
}

// == Cache Service ==
/// Owns the cache engine and drives the clone, prepare, insert workflow.
#[derive(Debug)]
pub struct CacheService {
    cache: TrackCache,
}

impl CacheService {
    // == Constructor ==
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: TrackCache::new(capacity),
        }
    }

    // == Load Track To Cache ==
    /// Ensures a prepared copy of `track` is cached.
    ///
    /// The source track is never modified; on a failed clone or a rejected
    /// insert the cache is left exactly as it was.
    pub fn load_track_to_cache(&mut self, track: &dyn AudioTrack) -> LoadOutcome {
        let title = track.title();

        if self.cache.get(title).is_some() {
            info!(title, "Cache hit");
            return LoadOutcome::Hit;
        }

        let mut prepared = match track.try_clone() {
            Ok(clone) => clone,
            Err(err) => {
                error!(title, error = %err, "Track failed to clone");
                return LoadOutcome::MissFailed;
            }
        };

        prepared.load();
        prepared.analyze_beatgrid();

        let outcome = self.cache.put(prepared);
        self.report_put(title, outcome)
    }

    /// Logs a put result and maps it to the caller-facing outcome.
    fn report_put(&self, title: &str, outcome: PutOutcome) -> LoadOutcome {
        match outcome {
            PutOutcome::Inserted => {
                info!(title, "Track loaded into cache");
                LoadOutcome::MissInserted
            }
            // A miss was observed just before the put, so a same-title slot
            // should not exist
            PutOutcome::Updated => {
                warn!(title, "Miss followed by an in-place update of a cached track");
                LoadOutcome::MissInserted
            }
            PutOutcome::InsertedWithEviction { evicted } => {
                info!(title, %evicted, "Track loaded into cache after eviction");
                LoadOutcome::MissEvicted
            }
            PutOutcome::Failed(rejected) => {
                error!(
                    title = rejected.title(),
                    capacity = self.cache.capacity(),
                    "Cache has no room, dropping prepared track"
                );
                LoadOutcome::MissFailed
            }
        }
    }

    // == Get Track From Cache ==
    /// Returns the cached track with this title, refreshing its recency.
    pub fn get_track_from_cache(&mut self, title: &str) -> Option<&dyn AudioTrack> {
        self.cache.get(title)
    }

    // == Set Cache Size ==
    pub fn set_cache_size(&mut self, capacity: usize) {
        self.cache.set_capacity(capacity);
    }

    // == Display Cache Status ==
    /// Logs the slot listing and returns the snapshot.
    pub fn display_cache_status(&self) -> CacheStatus {
        let status = self.cache.status();
        info!("Cache status\n{}", status);
        status
    }

    pub fn stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn cache(&self) -> &TrackCache {
        &self.cache
    }
}
