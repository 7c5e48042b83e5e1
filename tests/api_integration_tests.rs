//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use track_cache::{api::create_router, track::TrackRecord, AppState, CacheService, Library};

// == Helper Functions ==

fn record(kind: &str, title: &str) -> TrackRecord {
    TrackRecord {
        kind: kind.to_string(),
        title: title.to_string(),
        artists: vec!["Orbital".to_string()],
        duration_seconds: 240,
        bpm: 130,
        extra_param1: 44_100,
        extra_param2: 16,
    }
}

fn create_test_app(capacity: usize) -> Router {
    let library = Library::build(&[
        record("WAV", "Halcyon"),
        record("MP3", "Chime"),
        record("MP3", "Belfast"),
        record("MP3", "Impact"),
        record("FLAC", "Lush"),
    ]);
    let state = AppState::new(CacheService::new(capacity), library);
    create_router(state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

async fn load(app: &Router, title: &str) -> Value {
    let (status, json) = send(app, "POST", &format!("/cache/load/{}", title), None).await;
    assert_eq!(status, StatusCode::OK);
    json
}

// == Load Endpoint Tests ==

#[tokio::test]
async fn test_load_miss_then_hit() {
    let app = create_test_app(3);

    let json = load(&app, "Halcyon").await;
    assert_eq!(json["outcome"], "miss_inserted");
    assert_eq!(json["code"], 0);

    let json = load(&app, "Halcyon").await;
    assert_eq!(json["outcome"], "hit");
    assert_eq!(json["code"], 1);
}

#[tokio::test]
async fn test_load_reports_eviction() {
    let app = create_test_app(1);

    load(&app, "Halcyon").await;
    let json = load(&app, "Chime").await;
    assert_eq!(json["outcome"], "miss_evicted");
    assert_eq!(json["code"], -1);
}

#[tokio::test]
async fn test_load_with_zero_capacity_fails() {
    let app = create_test_app(0);

    let json = load(&app, "Halcyon").await;
    assert_eq!(json["outcome"], "miss_failed");

    let (_, stats) = send(&app, "GET", "/stats", None).await;
    assert_eq!(stats["failed_inserts"], 1);
    assert_eq!(stats["total_entries"], 0);
}

#[tokio::test]
async fn test_load_unknown_track() {
    let app = create_test_app(3);

    let (status, json) = send(&app, "POST", "/cache/load/Lush", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("Lush"));
}

// == LRU Behavior ==

#[tokio::test]
async fn test_lru_eviction_over_http() {
    let app = create_test_app(3);

    load(&app, "Halcyon").await;
    load(&app, "Chime").await;
    load(&app, "Belfast").await;

    // Touch Halcyon so Chime becomes least recently used
    let (status, _) = send(&app, "GET", "/cache/track/Halcyon", None).await;
    assert_eq!(status, StatusCode::OK);

    let json = load(&app, "Impact").await;
    assert_eq!(json["outcome"], "miss_evicted");

    let (status, _) = send(&app, "GET", "/cache/track/Chime", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for title in ["Halcyon", "Belfast", "Impact"] {
        let (status, json) = send(&app, "GET", &format!("/cache/track/{}", title), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["title"], title);
        assert_eq!(json["state"], "analyzed");
    }
}

// == Capacity and Status ==

#[tokio::test]
async fn test_shrink_capacity() {
    let app = create_test_app(3);

    load(&app, "Halcyon").await;
    load(&app, "Chime").await;
    load(&app, "Belfast").await;

    let (status, json) = send(&app, "PUT", "/cache/capacity", Some(r#"{"capacity":1}"#)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["capacity"], 1);
    assert_eq!(json["used"], 1);

    let (_, status_json) = send(&app, "GET", "/cache/status", None).await;
    assert_eq!(status_json["capacity"], 1);
    assert_eq!(status_json["slots"][0]["title"], "Belfast");
}

#[tokio::test]
async fn test_status_lists_empty_slots() {
    let app = create_test_app(2);
    load(&app, "Chime").await;

    let (status, json) = send(&app, "GET", "/cache/status", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["used"], 1);
    assert_eq!(json["clock"], 1);
    assert_eq!(json["slots"][0]["title"], "Chime");
    assert!(json["slots"][1]["title"].is_null());
}

// == Library and Playlist ==

#[tokio::test]
async fn test_library_listing_skips_unknown_types() {
    let app = create_test_app(3);

    let (status, json) = send(&app, "GET", "/library", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 4);
    assert_eq!(json["tracks"][0]["format"], "WAV 44100Hz/16bit");
    assert_eq!(json["tracks"][0]["state"], "unprepared");
}

#[tokio::test]
async fn test_playlist_skips_invalid_indices() {
    let app = create_test_app(3);

    let (status, json) = send(
        &app,
        "PUT",
        "/playlist",
        Some(r#"{"name":"Peak Time","indices":[2,0,9,1]}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Peak Time");
    assert_eq!(json["titles"], serde_json::json!(["Chime", "Halcyon"]));
    assert_eq!(json["total_duration"], 480);
}

#[tokio::test]
async fn test_get_playlist_before_any_load() {
    let app = create_test_app(3);

    let (status, json) = send(&app, "GET", "/playlist", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("No playlist loaded"));
}

#[tokio::test]
async fn test_get_playlist_returns_last_loaded() {
    let app = create_test_app(3);

    send(&app, "PUT", "/playlist", Some(r#"{"name":"Opener","indices":[1]}"#)).await;
    send(
        &app,
        "PUT",
        "/playlist",
        Some(r#"{"name":"Closer","indices":[4,3]}"#),
    )
    .await;

    let (status, json) = send(&app, "GET", "/playlist", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Closer");
    assert_eq!(json["titles"], serde_json::json!(["Impact", "Belfast"]));
    assert_eq!(json["total_duration"], 480);
}

#[tokio::test]
async fn test_playlist_track_lookup() {
    let app = create_test_app(3);

    send(&app, "PUT", "/playlist", Some(r#"{"name":"Set","indices":[2]}"#)).await;

    let (status, json) = send(&app, "GET", "/playlist/track/Chime", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Chime");
    assert_eq!(json["state"], "analyzed");
    assert_eq!(json["beatgrid"]["beat_count"], 520);

    // In the library, but not in this playlist
    let (status, _) = send(&app, "GET", "/playlist/track/Halcyon", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_playlist_invalid_request() {
    let app = create_test_app(3);

    let (status, _) = send(&app, "PUT", "/playlist", Some(r#"{"name":""}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == Stats and Health ==

#[tokio::test]
async fn test_stats_track_hits_and_misses() {
    let app = create_test_app(3);

    load(&app, "Halcyon").await; // miss
    load(&app, "Halcyon").await; // hit
    send(&app, "GET", "/cache/track/Nope", None).await; // miss

    let (status, json) = send(&app, "GET", "/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 2);
    assert_eq!(json["total_entries"], 1);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app(1);

    let (status, json) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}
