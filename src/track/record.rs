//! Track records as they appear in library files, and construction from them.

use serde::Deserialize;

use super::{BoxedTrack, Mp3Track, WavTrack};

/// One library entry. The meaning of the extra parameters depends on `kind`:
/// bitrate for `MP3`, sample rate and bit depth for `WAV`.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackRecord {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub artists: Vec<String>,
    pub duration_seconds: u32,
    pub bpm: u32,
    #[serde(default)]
    pub extra_param1: u32,
    #[serde(default)]
    pub extra_param2: u32,
}

/// Builds a track from its record. Returns `None` for an unknown type tag.
pub fn build_track(record: &TrackRecord) -> Option<BoxedTrack> {
    match record.kind.as_str() {
        "MP3" => Some(Box::new(Mp3Track::new(
            record.title.clone(),
            record.artists.clone(),
            record.duration_seconds,
            record.bpm,
            record.extra_param1,
        ))),
        "WAV" => Some(Box::new(WavTrack::new(
            record.title.clone(),
            record.artists.clone(),
            record.duration_seconds,
            record.bpm,
            record.extra_param1,
            record.extra_param2,
        ))),
        _ => None,
    }
}
