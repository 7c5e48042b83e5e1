//! Library Module
//!
//! The backing track library built from records, and playlists assembled
//! from it.

use std::path::Path;

use tracing::{error, info, warn};

use crate::error::{CacheError, Result};
use crate::track::{build_track, AudioTrack, BoxedTrack, TrackRecord};

// == Playlist ==
/// Named, ordered list of prepared tracks.
#[derive(Debug, Default)]
pub struct Playlist {
    name: String,
    tracks: Vec<BoxedTrack>,
}

impl Playlist {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_track(&mut self, track: BoxedTrack) {
        self.tracks.push(track);
    }

    pub fn find_track(&self, title: &str) -> Option<&dyn AudioTrack> {
        self.tracks
            .iter()
            .find(|track| track.title() == title)
            .map(|track| &**track)
    }

    pub fn titles(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.title().to_string()).collect()
    }

    /// Sum of track durations, in seconds.
    pub fn total_duration(&self) -> u64 {
        self.tracks
            .iter()
            .map(|t| u64::from(t.duration_seconds()))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

// == Library ==
/// Source tracks, in record order, plus the playlist loaded last, if any.
#[derive(Debug, Default)]
pub struct Library {
    tracks: Vec<BoxedTrack>,
    playlist: Option<Playlist>,
}

impl Library {
    // == Build ==
    /// Builds the library, skipping records with an unknown type tag.
    pub fn build(records: &[TrackRecord]) -> Self {
        let mut tracks = Vec::with_capacity(records.len());

        for record in records {
            match build_track(record) {
                Some(track) => {
                    info!(title = track.title(), format = %track.format(), "Track created");
                    tracks.push(track);
                }
                None => warn!(
                    title = %record.title,
                    kind = %record.kind,
                    "Skipping record with unknown track type"
                ),
            }
        }

        info!("Track library built: {} tracks loaded", tracks.len());
        Self {
            tracks,
            playlist: None,
        }
    }

    // == From JSON File ==
    /// Reads a JSON array of track records and builds the library from it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CacheError::Internal(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let records: Vec<TrackRecord> = serde_json::from_str(&contents).map_err(|e| {
            CacheError::InvalidRequest(format!("Invalid library file {}: {}", path.display(), e))
        })?;
        Ok(Self::build(&records))
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn tracks(&self) -> impl Iterator<Item = &dyn AudioTrack> {
        self.tracks.iter().map(|t| &**t)
    }

    /// Looks up a library track by title.
    pub fn find(&self, title: &str) -> Option<&dyn AudioTrack> {
        self.tracks().find(|t| t.title() == title)
    }

    // == Load Playlist From Indices ==
    /// Replaces the playlist with prepared copies of the tracks at the given
    /// 1-based indices. Out-of-range indices and failed clones are skipped.
    pub fn load_playlist_from_indices(&mut self, name: &str, indices: &[i64]) -> &Playlist {
        info!(playlist = name, "Loading playlist");
        let mut playlist = Playlist::new(name);

        for &index in indices {
            let Some(source) = self.track_at(index) else {
                warn!(index, "Invalid track index");
                continue;
            };

            let mut track = match source.try_clone() {
                Ok(track) => track,
                Err(err) => {
                    error!(title = source.title(), error = %err, "Track failed to clone");
                    continue;
                }
            };

            track.load();
            track.analyze_beatgrid();
            info!(title = track.title(), playlist = name, "Added track to playlist");
            playlist.add_track(track);
        }

        info!(
            playlist = name,
            tracks = playlist.len(),
            "Playlist loaded"
        );
        self.playlist.insert(playlist)
    }

    pub fn playlist(&self) -> Option<&Playlist> {
        self.playlist.as_ref()
    }

    /// Finds a track in the current playlist.
    pub fn find_track(&self, title: &str) -> Option<&dyn AudioTrack> {
        self.playlist.as_ref()?.find_track(title)
    }

    /// Titles of the current playlist, in order. Empty when none is loaded.
    pub fn track_titles(&self) -> Vec<String> {
        self.playlist
            .as_ref()
            .map(Playlist::titles)
            .unwrap_or_default()
    }

    fn track_at(&self, index: i64) -> Option<&dyn AudioTrack> {
        if index < 1 {
            return None;
        }
        let position = usize::try_from(index - 1).ok()?;
        self.tracks.get(position).map(|t| &**t)
    }
}
