//! Cache Store Module
//!
//! Main cache engine: a fixed sequence of slots scanned linearly, with
//! least-recently-used eviction driven by a logical recency clock.

use tracing::{debug, info, warn};

use crate::cache::{least_recent, CacheStats, CacheStatus, RecencyClock, Slot, SlotStatus};
use crate::track::{AudioTrack, BoxedTrack};

// == Put Outcome ==
/// Result of handing a track to [`TrackCache::put`].
#[derive(Debug)]
pub enum PutOutcome {
    /// A track with the same title was replaced
    Updated,
    /// Stored in a free slot
    Inserted,
    /// Stored in the slot freed by evicting the named track
    InsertedWithEviction { evicted: String },
    /// No slot available; the track is handed back to the caller
    Failed(BoxedTrack),
}

// == Track Cache ==
/// Fixed-capacity track cache.
///
/// Invariants: at most one occupied slot per title, and the number of
/// occupied slots never exceeds the number of slots.
#[derive(Debug)]
pub struct TrackCache {
    slots: Vec<Slot>,
    clock: RecencyClock,
    stats: CacheStats,
}

impl TrackCache {
    // == Constructor ==
    /// Creates a cache with `capacity` empty slots. Zero is allowed, but then
    /// every put fails.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| Slot::new()).collect(),
            clock: RecencyClock::new(),
            stats: CacheStats::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    // == Contains ==
    /// True if an occupied slot holds a track with this exact title.
    pub fn contains(&self, title: &str) -> bool {
        self.find_slot(title).is_some()
    }

    // == Get ==
    /// Looks up a track by title, touching it on a hit.
    pub fn get(&mut self, title: &str) -> Option<&dyn AudioTrack> {
        match self.find_slot(title) {
            Some(index) => {
                let now = self.clock.tick();
                self.stats.record_hit();
                debug!(title, slot = index, time = now, "Cache hit");
                self.slots[index].access(now)
            }
            None => {
                self.stats.record_miss();
                debug!(title, "Cache miss");
                None
            }
        }
    }

    // == Put ==
    /// Stores a track, taking ownership of it.
    ///
    /// Resolution order: replace the same title, else fill a free slot, else
    /// evict the least recently used track. If nothing can be evicted the
    /// track is returned inside [`PutOutcome::Failed`].
    pub fn put(&mut self, track: BoxedTrack) -> PutOutcome {
        if let Some(index) = self.find_slot(track.title()) {
            let now = self.clock.tick();
            self.slots[index].store(track, now);
            return PutOutcome::Updated;
        }

        if let Some(index) = self.find_empty_slot() {
            let now = self.clock.tick();
            self.slots[index].store(track, now);
            self.stats.set_total_entries(self.size());
            return PutOutcome::Inserted;
        }

        match self.evict_least_recent() {
            Some((index, evicted)) => {
                let now = self.clock.tick();
                self.slots[index].store(track, now);
                self.stats.set_total_entries(self.size());
                PutOutcome::InsertedWithEviction {
                    evicted: evicted.title().to_string(),
                }
            }
            None => {
                self.stats.record_failed_insert();
                warn!(
                    title = track.title(),
                    capacity = self.capacity(),
                    "No slot available, insert rejected"
                );
                PutOutcome::Failed(track)
            }
        }
    }

    // == Evict LRU ==
    /// Drops the least recently used track. False if the cache is empty.
    pub fn evict_lru(&mut self) -> bool {
        match self.evict_least_recent() {
            Some(_) => {
                self.stats.set_total_entries(self.size());
                true
            }
            None => false,
        }
    }

    // == Size ==
    /// Number of occupied slots.
    pub fn size(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_occupied()).count()
    }

    // == Clear ==
    /// Empties every slot. Capacity and the recency clock are unchanged.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
        }
        self.stats.set_total_entries(0);
    }

    // == Set Capacity ==
    /// Resizes the slot sequence.
    ///
    /// Growing keeps every track in its slot and appends empty slots.
    /// Shrinking evicts least recently used tracks until the rest fit, then
    /// packs the survivors into the leading slots in their previous order.
    pub fn set_capacity(&mut self, capacity: usize) {
        let old_capacity = self.capacity();
        if capacity == old_capacity {
            return;
        }

        if capacity > old_capacity {
            self.slots.resize_with(capacity, Slot::new);
            info!(from = old_capacity, to = capacity, "Cache capacity grown");
            return;
        }

        while self.size() > capacity {
            if self.evict_least_recent().is_none() {
                break;
            }
        }

        let survivors: Vec<(BoxedTrack, u64)> = self
            .slots
            .iter_mut()
            .filter_map(|slot| {
                let time = slot.last_access_time()?;
                slot.take().map(|track| (track, time))
            })
            .collect();

        self.slots = (0..capacity).map(|_| Slot::new()).collect();
        for (slot, (track, time)) in self.slots.iter_mut().zip(survivors) {
            slot.store(track, time);
        }

        self.stats.set_total_entries(self.size());
        info!(
            from = old_capacity,
            to = capacity,
            kept = self.size(),
            "Cache capacity shrunk"
        );
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.size());
        stats
    }

    // == Status ==
    /// Snapshot of every slot.
    pub fn status(&self) -> CacheStatus {
        let slots = self
            .slots
            .iter()
            .enumerate()
            .map(|(index, slot)| SlotStatus {
                index,
                title: slot.peek().map(|track| track.title().to_string()),
                last_access: slot.last_access_time(),
            })
            .collect();

        CacheStatus {
            used: self.size(),
            capacity: self.capacity(),
            clock: self.clock.current(),
            slots,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn find_slot(&self, title: &str) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.peek().is_some_and(|track| track.title() == title))
    }

    fn find_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(|slot| !slot.is_occupied())
    }

    /// Empties the least recently used slot, returning its index and track.
    fn evict_least_recent(&mut self) -> Option<(usize, BoxedTrack)> {
        let index = least_recent(&self.slots)?;
        let evicted = self.slots[index].take()?;
        self.stats.record_eviction();
        info!(title = evicted.title(), slot = index, "Evicted least recently used track");
        Some((index, evicted))
    }
}
