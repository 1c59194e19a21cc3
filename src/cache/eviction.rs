//! Eviction Module
//!
//! Approximate LRU used under capacity pressure. Access frequency stands in
//! for recency: the entry read the fewest times is the victim.

use std::collections::HashMap;

use crate::cache::CacheEntry;

// == Expired Sweep ==
/// Removes every entry expired at `now_ms`.
///
/// Returns the number of entries removed.
pub fn sweep_expired<V>(entries: &mut HashMap<String, CacheEntry<V>>, now_ms: u64) -> usize {
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_expired(now_ms));
    before - entries.len()
}

// == Victim Selection ==
/// Returns the key with the lowest hit count.
///
/// Ties go to the earliest inserted entry. Returns None if there are no entries.
pub fn select_victim<V>(entries: &HashMap<String, CacheEntry<V>>) -> Option<String> {
    entries
        .iter()
        .min_by_key(|(_, entry)| (entry.hit_count, entry.seq))
        .map(|(key, _)| key.clone())
}
