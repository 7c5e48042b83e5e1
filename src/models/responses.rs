//! Response DTOs for the track cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::library::Playlist;
use crate::service::LoadOutcome;
use crate::track::{AudioTrack, BeatGrid, PrepState};

/// Response body for POST /cache/load/:title
#[derive(Debug, Clone, Serialize)]
pub struct LoadResponse {
    pub title: String,
    pub outcome: LoadOutcome,
    /// Numeric form of the outcome
    pub code: i8,
}

impl LoadResponse {
    pub fn new(title: impl Into<String>, outcome: LoadOutcome) -> Self {
        Self {
            title: title.into(),
            outcome,
            code: outcome.code(),
        }
    }
}

/// A track as exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct TrackResponse {
    pub title: String,
    pub artists: Vec<String>,
    pub duration_seconds: u32,
    pub bpm: u32,
    pub format: String,
    pub state: PrepState,
    pub beatgrid: Option<BeatGrid>,
}

impl TrackResponse {
    pub fn from_track(track: &dyn AudioTrack) -> Self {
        Self {
            title: track.title().to_string(),
            artists: track.artists().to_vec(),
            duration_seconds: track.duration_seconds(),
            bpm: track.bpm(),
            format: track.format(),
            state: track.state(),
            beatgrid: track.beatgrid(),
        }
    }
}

/// Response body for GET /library
#[derive(Debug, Clone, Serialize)]
pub struct LibraryResponse {
    pub count: usize,
    pub tracks: Vec<TrackResponse>,
}

/// Response body for PUT and GET /playlist
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistResponse {
    pub name: String,
    pub titles: Vec<String>,
    /// Total duration in seconds
    pub total_duration: u64,
}

impl From<&Playlist> for PlaylistResponse {
    fn from(playlist: &Playlist) -> Self {
        Self {
            name: playlist.name().to_string(),
            titles: playlist.titles(),
            total_duration: playlist.total_duration(),
        }
    }
}

/// Response body for PUT /cache/capacity
#[derive(Debug, Clone, Serialize)]
pub struct CapacityResponse {
    pub capacity: usize,
    pub used: usize,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
    pub failed_inserts: u64,
    /// Current number of cached tracks
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            failed_inserts: stats.failed_inserts,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
