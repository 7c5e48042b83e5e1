//! MP3 track variant.

use super::{AudioTrack, BoxedTrack, TrackMeta};
use crate::error::Result;

/// A compressed track described by its bitrate.
#[derive(Debug, Clone)]
pub struct Mp3Track {
    meta: TrackMeta,
    /// Bitrate in kbps
    bitrate: u32,
}

impl Mp3Track {
    pub fn new(
        title: impl Into<String>,
        artists: Vec<String>,
        duration_seconds: u32,
        bpm: u32,
        bitrate: u32,
    ) -> Self {
        Self {
            meta: TrackMeta::new(title, artists, duration_seconds, bpm),
            bitrate,
        }
    }
}

impl AudioTrack for Mp3Track {
    fn meta(&self) -> &TrackMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut TrackMeta {
        &mut self.meta
    }

    fn format(&self) -> String {
        format!("MP3 {}kbps", self.bitrate)
    }

    /// Saturates at `u64::MAX` for absurd bitrate/duration pairs.
    fn decoded_size(&self) -> u64 {
        let bytes_per_second = u64::from(self.bitrate) * 1000 / 8;
        bytes_per_second.saturating_mul(u64::from(self.meta.duration_seconds))
    }

    fn try_clone(&self) -> Result<BoxedTrack> {
        Ok(Box::new(Self {
            meta: self.meta.fresh_copy(),
            bitrate: self.bitrate,
        }))
    }
}
