//! API Handlers
//!
//! HTTP request handlers for each track cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::CacheStatus;
use crate::error::{CacheError, Result};
use crate::library::Library;
use crate::models::{
    CapacityRequest, CapacityResponse, HealthResponse, LibraryResponse, LoadResponse,
    PlaylistRequest, PlaylistResponse, StatsResponse, TrackResponse,
};
use crate::service::CacheService;

/// Application state shared across all handlers.
///
/// The cache service sits behind a single lock, so at most one request
/// mutates the slot sequence or advances the recency clock at a time.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<RwLock<CacheService>>,
    pub library: Arc<RwLock<Library>>,
}

impl AppState {
    /// Creates a new AppState from a cache service and a library.
    pub fn new(service: CacheService, library: Library) -> Self {
        Self {
            service: Arc::new(RwLock::new(service)),
            library: Arc::new(RwLock::new(library)),
        }
    }

    /// Creates a new AppState from configuration and an already built library.
    pub fn from_config(config: &crate::config::Config, library: Library) -> Self {
        Self::new(CacheService::new(config.cache_capacity), library)
    }
}

/// Handler for POST /cache/load/:title
///
/// Loads the library track with this title into the cache.
pub async fn load_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<LoadResponse>> {
    let library = state.library.read().await;
    let track = library
        .find(&title)
        .ok_or_else(|| CacheError::NotFound(title.clone()))?;

    let mut service = state.service.write().await;
    let outcome = service.load_track_to_cache(track);

    Ok(Json(LoadResponse::new(title, outcome)))
}

/// Handler for GET /cache/track/:title
///
/// Returns a cached track. Counts as a cache hit and refreshes recency.
pub async fn get_track_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<TrackResponse>> {
    // Write lock: a hit touches the slot
    let mut service = state.service.write().await;
    let track = service
        .get_track_from_cache(&title)
        .ok_or(CacheError::NotFound(title.clone()))?;

    Ok(Json(TrackResponse::from_track(track)))
}

/// Handler for PUT /cache/capacity
pub async fn capacity_handler(
    State(state): State<AppState>,
    Json(req): Json<CapacityRequest>,
) -> Json<CapacityResponse> {
    let mut service = state.service.write().await;
    service.set_cache_size(req.capacity);

    Json(CapacityResponse {
        capacity: service.cache().capacity(),
        used: service.cache().size(),
    })
}

/// Handler for GET /cache/status
pub async fn status_handler(State(state): State<AppState>) -> Json<CacheStatus> {
    let service = state.service.read().await;
    Json(service.display_cache_status())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let service = state.service.read().await;
    Json(StatsResponse::from(service.stats()))
}

/// Handler for GET /library
pub async fn library_handler(State(state): State<AppState>) -> Json<LibraryResponse> {
    let library = state.library.read().await;
    let tracks: Vec<TrackResponse> = library.tracks().map(TrackResponse::from_track).collect();

    Json(LibraryResponse {
        count: tracks.len(),
        tracks,
    })
}

/// Handler for PUT /playlist
///
/// Replaces the current playlist with tracks picked from the library.
pub async fn playlist_handler(
    State(state): State<AppState>,
    Json(req): Json<PlaylistRequest>,
) -> Result<Json<PlaylistResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let mut library = state.library.write().await;
    let playlist = library.load_playlist_from_indices(&req.name, &req.indices);

    Ok(Json(PlaylistResponse::from(playlist)))
}

/// Handler for GET /playlist
///
/// Returns the playlist loaded last. 404 until one has been loaded.
pub async fn get_playlist_handler(State(state): State<AppState>) -> Result<Json<PlaylistResponse>> {
    let library = state.library.read().await;
    let playlist = library
        .playlist()
        .ok_or_else(|| CacheError::NotFound("No playlist loaded".to_string()))?;

    Ok(Json(PlaylistResponse::from(playlist)))
}

/// Handler for GET /playlist/track/:title
///
/// Returns a prepared track from the current playlist.
pub async fn playlist_track_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<TrackResponse>> {
    let library = state.library.read().await;
    let track = library
        .find_track(&title)
        .ok_or(CacheError::NotFound(title.clone()))?;

    Ok(Json(TrackResponse::from_track(track)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::LoadOutcome;
    use crate::track::{PrepState, TrackRecord};

    fn test_state(capacity: usize) -> AppState {
        let records: Vec<TrackRecord> = ["Alpha", "Beta"]
            .iter()
            .map(|title| TrackRecord {
                kind: "MP3".to_string(),
                title: title.to_string(),
                artists: vec![],
                duration_seconds: 120,
                bpm: 120,
                extra_param1: 256,
                extra_param2: 0,
            })
            .collect();
        AppState::new(CacheService::new(capacity), Library::build(&records))
    }

    #[tokio::test]
    async fn test_load_and_get_handler() {
        let state = test_state(2);

        let result = load_handler(State(state.clone()), Path("Alpha".to_string())).await;
        assert_eq!(result.unwrap().outcome, LoadOutcome::MissInserted);

        let result = load_handler(State(state.clone()), Path("Alpha".to_string())).await;
        assert_eq!(result.unwrap().outcome, LoadOutcome::Hit);

        let track = get_track_handler(State(state), Path("Alpha".to_string()))
            .await
            .unwrap();
        assert_eq!(track.title, "Alpha");
    }

    #[tokio::test]
    async fn test_load_unknown_title() {
        let state = test_state(2);
        let result = load_handler(State(state), Path("Missing".to_string())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_uncached_track() {
        let state = test_state(2);
        let result = get_track_handler(State(state), Path("Beta".to_string())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_capacity_handler() {
        let state = test_state(2);
        load_handler(State(state.clone()), Path("Alpha".to_string()))
            .await
            .unwrap();
        load_handler(State(state.clone()), Path("Beta".to_string()))
            .await
            .unwrap();

        let response =
            capacity_handler(State(state.clone()), Json(CapacityRequest { capacity: 1 })).await;
        assert_eq!(response.capacity, 1);
        assert_eq!(response.used, 1);
    }

    #[tokio::test]
    async fn test_playlist_handler_rejects_empty_name() {
        let state = test_state(2);
        let req = PlaylistRequest {
            name: "".to_string(),
            indices: vec![1],
        };
        let result = playlist_handler(State(state), Json(req)).await;
        assert!(matches!(result, Err(CacheError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_get_playlist_before_and_after_load() {
        let state = test_state(2);
        let result = get_playlist_handler(State(state.clone())).await;
        assert!(matches!(result, Err(CacheError::NotFound(_))));

        let req = PlaylistRequest {
            name: "Warmup".to_string(),
            indices: vec![2, 1],
        };
        playlist_handler(State(state.clone()), Json(req)).await.unwrap();

        let playlist = get_playlist_handler(State(state.clone())).await.unwrap();
        assert_eq!(playlist.name, "Warmup");
        assert_eq!(playlist.titles, vec!["Beta", "Alpha"]);
        assert_eq!(playlist.total_duration, 240);

        let track = playlist_track_handler(State(state), Path("Beta".to_string()))
            .await
            .unwrap();
        assert_eq!(track.state, PrepState::Analyzed);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
