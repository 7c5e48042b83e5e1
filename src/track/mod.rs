//! Track Module
//!
//! Polymorphic audio track abstraction. Every variant shares identity
//! metadata and preparation state, and differs only in its format parameters.

mod mp3;
mod record;
mod wav;

use std::fmt::Debug;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;

pub use mp3::Mp3Track;
pub use record::{build_track, TrackRecord};
pub use wav::WavTrack;

/// Owned, move-only handle to a track of any variant.
pub type BoxedTrack = Box<dyn AudioTrack>;

// == Preparation State ==
/// How far a track has been prepared for playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrepState {
    Unprepared,
    Loaded,
    Analyzed,
}

// == Beat Grid ==
/// Rhythmic metadata computed by beatgrid analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BeatGrid {
    /// Number of whole beats across the track
    pub beat_count: u64,
    /// Spacing between beats in milliseconds (0 when bpm is 0)
    pub beat_interval_ms: u32,
}

impl BeatGrid {
    fn compute(duration_seconds: u32, bpm: u32) -> Self {
        if bpm == 0 {
            return Self {
                beat_count: 0,
                beat_interval_ms: 0,
            };
        }
        Self {
            beat_count: u64::from(duration_seconds) * u64::from(bpm) / 60,
            beat_interval_ms: 60_000 / bpm,
        }
    }
}

// == Track Metadata ==
/// Identity attributes plus mutable preparation state shared by all variants.
#[derive(Debug, Clone)]
pub struct TrackMeta {
    title: String,
    artists: Vec<String>,
    duration_seconds: u32,
    bpm: u32,
    state: PrepState,
    decoded_bytes: Option<u64>,
    beatgrid: Option<BeatGrid>,
}

impl TrackMeta {
    pub fn new(
        title: impl Into<String>,
        artists: Vec<String>,
        duration_seconds: u32,
        bpm: u32,
    ) -> Self {
        Self {
            title: title.into(),
            artists,
            duration_seconds,
            bpm,
            state: PrepState::Unprepared,
            decoded_bytes: None,
            beatgrid: None,
        }
    }

    /// Same identity, preparation state reset.
    pub fn fresh_copy(&self) -> Self {
        Self::new(
            self.title.clone(),
            self.artists.clone(),
            self.duration_seconds,
            self.bpm,
        )
    }
}

// == Audio Track Trait ==
/// Capabilities every cacheable track provides.
///
/// Variants implement the accessors, the format-specific pieces and
/// [`AudioTrack::try_clone`]; loading and analysis are shared.
pub trait AudioTrack: Send + Sync + Debug {
    fn meta(&self) -> &TrackMeta;

    fn meta_mut(&mut self) -> &mut TrackMeta;

    /// Human readable format label, e.g. `MP3 320kbps`.
    fn format(&self) -> String;

    /// Bytes of PCM data this track decodes to.
    fn decoded_size(&self) -> u64;

    /// Produces an independently owned copy with reset preparation state.
    ///
    /// A failed clone never yields a partially built track.
    fn try_clone(&self) -> Result<BoxedTrack>;

    fn title(&self) -> &str {
        &self.meta().title
    }

    fn artists(&self) -> &[String] {
        &self.meta().artists
    }

    fn duration_seconds(&self) -> u32 {
        self.meta().duration_seconds
    }

    fn bpm(&self) -> u32 {
        self.meta().bpm
    }

    fn state(&self) -> PrepState {
        self.meta().state
    }

    fn decoded_bytes(&self) -> Option<u64> {
        self.meta().decoded_bytes
    }

    fn beatgrid(&self) -> Option<BeatGrid> {
        self.meta().beatgrid
    }

    /// Decodes the track. Calling it again re-decodes.
    fn load(&mut self) {
        let bytes = self.decoded_size();
        let format = self.format();
        let meta = self.meta_mut();
        meta.decoded_bytes = Some(bytes);
        if meta.state == PrepState::Unprepared {
            meta.state = PrepState::Loaded;
        }
        debug!(title = %meta.title, %format, bytes, "Track loaded");
    }

    /// Computes the beat grid. Runs even if the track was never loaded.
    fn analyze_beatgrid(&mut self) {
        let meta = self.meta_mut();
        if meta.state == PrepState::Unprepared {
            warn!(title = %meta.title, "Analyzing beatgrid of a track that was not loaded");
        }
        let grid = BeatGrid::compute(meta.duration_seconds, meta.bpm);
        meta.beatgrid = Some(grid);
        meta.state = PrepState::Analyzed;
        debug!(
            title = %meta.title,
            beats = grid.beat_count,
            interval_ms = grid.beat_interval_ms,
            "Beatgrid analyzed"
        );
    }
}
