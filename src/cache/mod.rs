//! Cache Module
//!
//! Fixed-capacity slot cache of prepared tracks with LRU eviction.

mod lru;
mod slot;
mod stats;
mod status;
mod store;


// Re-export public types
pub use lru::{least_recent, RecencyClock};
pub use slot::Slot;
pub use stats::CacheStats;
pub use status::{CacheStatus, SlotStatus};
pub use store::{PutOutcome, TrackCache};
