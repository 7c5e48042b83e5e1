//! Request DTOs for the track cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for resizing the cache (PUT /cache/capacity)
#[derive(Debug, Clone, Deserialize)]
pub struct CapacityRequest {
    /// New number of slots
    pub capacity: usize,
}

/// Request body for loading a playlist (PUT /playlist)
///
/// # Fields
/// - `name`: Playlist name
/// - `indices`: 1-based positions in the library; invalid ones are skipped
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistRequest {
    pub name: String,
    #[serde(default)]
    pub indices: Vec<i64>,
}

impl PlaylistRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some("Playlist name cannot be empty".to_string());
        }
        None
    }
}
