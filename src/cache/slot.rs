//! Slot Module
//!
//! A single storage cell of the cache engine.

use crate::track::{AudioTrack, BoxedTrack};

// == Slot ==
/// Exclusively owns at most one track plus the time it was last touched.
///
/// The timestamp only carries meaning while the slot is occupied.
#[derive(Debug, Default)]
pub struct Slot {
    track: Option<BoxedTrack>,
    last_access: u64,
}

impl Slot {
    // == Constructor ==
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_occupied(&self) -> bool {
        self.track.is_some()
    }

    // == Peek ==
    /// Returns the occupant without refreshing recency.
    pub fn peek(&self) -> Option<&dyn AudioTrack> {
        self.track.as_deref()
    }

    // == Access ==
    /// Returns the occupant and records `timestamp` as its last access.
    ///
    /// An empty slot is left untouched.
    pub fn access(&mut self, timestamp: u64) -> Option<&dyn AudioTrack> {
        if self.track.is_some() {
            self.last_access = timestamp;
        }
        self.track.as_deref()
    }

    // == Store ==
    /// Takes ownership of `track`, dropping any previous occupant.
    pub fn store(&mut self, track: BoxedTrack, timestamp: u64) {
        self.track = Some(track);
        self.last_access = timestamp;
    }

    // == Take ==
    /// Moves the occupant out, leaving the slot empty.
    pub fn take(&mut self) -> Option<BoxedTrack> {
        self.last_access = 0;
        self.track.take()
    }

    // == Clear ==
    /// Drops the occupant, if any.
    pub fn clear(&mut self) {
        drop(self.take());
    }

    // == Last Access ==
    /// Last-access time of the occupant, `None` when empty.
    pub fn last_access_time(&self) -> Option<u64> {
        self.track.as_ref().map(|_| self.last_access)
    }
}
