//! WAV track variant.

use super::{AudioTrack, BoxedTrack, TrackMeta};
use crate::error::Result;

const CHANNELS: u64 = 2;

/// An uncompressed track described by sample rate and bit depth.
#[derive(Debug, Clone)]
pub struct WavTrack {
    meta: TrackMeta,
    /// Samples per second, in Hz
    sample_rate: u32,
    /// Bits per sample
    bit_depth: u32,
}

impl WavTrack {
    pub fn new(
        title: impl Into<String>,
        artists: Vec<String>,
        duration_seconds: u32,
        bpm: u32,
        sample_rate: u32,
        bit_depth: u32,
    ) -> Self {
        Self {
            meta: TrackMeta::new(title, artists, duration_seconds, bpm),
            sample_rate,
            bit_depth,
        }
    }
}

impl AudioTrack for WavTrack {
    fn meta(&self) -> &TrackMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut TrackMeta {
        &mut self.meta
    }

    fn format(&self) -> String {
        format!("WAV {}Hz/{}bit", self.sample_rate, self.bit_depth)
    }

    /// Saturates at `u64::MAX` for absurd format/duration combinations.
    fn decoded_size(&self) -> u64 {
        let bytes_per_frame = u64::from(self.bit_depth) / 8 * CHANNELS;
        u64::from(self.sample_rate)
            .saturating_mul(bytes_per_frame)
            .saturating_mul(u64::from(self.meta.duration_seconds))
    }

    fn try_clone(&self) -> Result<BoxedTrack> {
        Ok(Box::new(Self {
            meta: self.meta.fresh_copy(),
            sample_rate: self.sample_rate,
            bit_depth: self.bit_depth,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wav_format_and_size() {
        let track = WavTrack::new("Windowlicker", vec![], 2, 128, 44_100, 16);
        assert_eq!(track.format(), "WAV 44100Hz/16bit");
        // 44100 samples * 2 bytes * 2 channels * 2 seconds
        assert_eq!(track.decoded_size(), 352_800);
    }

    #[test]
    fn test_wav_load_with_extreme_parameters() {
        let mut track = WavTrack::new("Drone", vec![], u32::MAX, 120, u32::MAX, 32);
        track.load();
        assert_eq!(track.decoded_bytes(), Some(u64::MAX));

        let mut track = WavTrack::new("Drone", vec![], u32::MAX, 120, u32::MAX, u32::MAX);
        track.load();
        assert_eq!(track.decoded_bytes(), Some(u64::MAX));
    }
}
