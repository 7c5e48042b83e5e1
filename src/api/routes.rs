//! API Routes
//!
//! Configures the Axum router with all track cache endpoints.

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    capacity_handler, get_playlist_handler, get_track_handler, health_handler, library_handler,
    load_handler, playlist_handler, playlist_track_handler, stats_handler, status_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /cache/load/:title` - Load a library track into the cache
/// - `GET /cache/track/:title` - Retrieve a cached track
/// - `PUT /cache/capacity` - Resize the cache
/// - `GET /cache/status` - Slot-by-slot cache listing
/// - `GET /stats` - Cache statistics
/// - `GET /library` - List library tracks
/// - `PUT /playlist` - Load a playlist from library indices
/// - `GET /playlist` - Current playlist, 404 if none was loaded
/// - `GET /playlist/track/:title` - A prepared track from the current playlist
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/cache/load/:title", post(load_handler))
        .route("/cache/track/:title", get(get_track_handler))
        .route("/cache/capacity", put(capacity_handler))
        .route("/cache/status", get(status_handler))
        .route("/stats", get(stats_handler))
        .route("/library", get(library_handler))
        .route("/playlist", put(playlist_handler).get(get_playlist_handler))
        .route("/playlist/track/:title", get(playlist_track_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
