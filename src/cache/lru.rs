//! LRU Module
//!
//! Recency clock and least-recently-used slot selection.

use crate::cache::Slot;

// == Recency Clock ==
/// Logical clock ordering slot touches.
///
/// Owned by a single cache instance; every tick is strictly greater than the
/// previous one, so no two touches share a timestamp.
#[derive(Debug, Default)]
pub struct RecencyClock {
    ticks: u64,
}

impl RecencyClock {
    // == Constructor ==
    /// Creates a clock starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Tick ==
    /// Advances the clock and returns the new time.
    pub fn tick(&mut self) -> u64 {
        self.ticks += 1;
        self.ticks
    }

    // == Current ==
    /// Time of the latest tick, 0 if none happened yet.
    pub fn current(&self) -> u64 {
        self.ticks
    }
}

// == Least Recent ==
/// Index of the occupied slot with the smallest last-access time.
///
/// Ties go to the lowest index. Returns None if no slot is occupied.
pub fn least_recent(slots: &[Slot]) -> Option<usize> {
    let mut oldest: Option<(usize, u64)> = None;

    for (index, slot) in slots.iter().enumerate() {
        if let Some(time) = slot.last_access_time() {
            match oldest {
                Some((_, best)) if time >= best => {}
                _ => oldest = Some((index, time)),
            }
        }
    }

    oldest.map(|(index, _)| index)
}
