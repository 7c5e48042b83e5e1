//! Track Cache - A bounded in-memory cache of prepared audio tracks
//!
//! Tracks are cloned from a library, loaded and beat-analyzed, then kept in a
//! fixed number of slots with least-recently-used eviction.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod library;
pub mod models;
pub mod service;
pub mod track;

pub use api::AppState;
pub use config::Config;
pub use library::{Library, Playlist};
pub use service::{CacheService, LoadOutcome};
