//! Cache Status Module
//!
//! Point-in-time snapshot of every slot, for diagnostics.

use std::fmt;

use serde::Serialize;

/// One slot as seen in a status snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotStatus {
    pub index: usize,
    /// Occupant title, None when the slot is empty
    pub title: Option<String>,
    pub last_access: Option<u64>,
}

/// Snapshot of the whole slot sequence.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    pub used: usize,
    pub capacity: usize,
    /// Latest recency tick; the next touch gets `clock + 1`
    pub clock: u64,
    pub slots: Vec<SlotStatus>,
}

impl fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Status: {}/{} slots used (clock: {})",
            self.used, self.capacity, self.clock
        )?;
        for slot in &self.slots {
            match (&slot.title, slot.last_access) {
                (Some(title), Some(time)) => {
                    writeln!(f, "  Slot {}: {} (last access: {})", slot.index, title, time)?
                }
                _ => writeln!(f, "  Slot {}: [EMPTY]", slot.index)?,
            }
        }
        Ok(())
    }
}
