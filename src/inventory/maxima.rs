//! Per-slot maximum stat index
//!
//! Precomputes, for every (class, slot) bucket present in a pool
//! snapshot, the highest current and base value seen for each armor stat.
//! Backs the "is this the best possible piece for stat S in its slot"
//! queries without re-scanning the pool per item.
//!
//! The index is a pure function of the snapshot: rebuild it whenever the
//! pool changes, never patch it in place.

use crate::core::types::{ArmorSlot, ClassType};
use crate::inventory::item::Item;
use crate::inventory::pool::ItemPool;
use crate::stats::{StatSelector, StatType};
use ahash::AHashMap;

/// Highest observed current and base value for one stat in one bucket
///
/// Tracked independently: the record holder for current value need not
/// hold the base record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxEntry {
    pub value: i32,
    pub base: i32,
}

/// Maximum stat values per (class, slot) bucket
#[derive(Debug, Clone, Default)]
pub struct SlotMaxima {
    buckets: AHashMap<(ClassType, ArmorSlot), AHashMap<StatType, MaxEntry>>,
}

impl SlotMaxima {
    /// Build the index in a single pass over the pool
    pub fn build(pool: &ItemPool) -> Self {
        let mut buckets: AHashMap<(ClassType, ArmorSlot), AHashMap<StatType, MaxEntry>> =
            AHashMap::new();

        for item in &pool.items {
            let (Some(class), Some(slot)) = (item.class, item.slot) else {
                continue;
            };
            let Some(stats) = &item.stats else {
                continue;
            };
            let bucket = buckets.entry((class, slot)).or_default();
            for stat in stats {
                bucket
                    .entry(stat.stat)
                    .and_modify(|entry| {
                        entry.value = entry.value.max(stat.value);
                        entry.base = entry.base.max(stat.base);
                    })
                    .or_insert(MaxEntry { value: stat.value, base: stat.base });
            }
        }

        Self { buckets }
    }

    /// Recorded maximum for one stat in one bucket
    pub fn max_for(&self, class: ClassType, slot: ArmorSlot, stat: StatType) -> Option<MaxEntry> {
        self.buckets
            .get(&(class, slot))
            .and_then(|bucket| bucket.get(&stat))
            .copied()
    }

    /// Whether `item` holds the recorded maximum for any stat the
    /// selector covers, in its own (class, slot) bucket
    ///
    /// Exact integer equality: ties all hold the maximum. Non-armor and
    /// stat-less items never match.
    pub fn holds_maximum(&self, item: &Item, selector: &StatSelector, by_base: bool) -> bool {
        let (Some(class), Some(slot)) = (item.class, item.slot) else {
            return false;
        };
        if item.stats.is_none() {
            return false;
        }

        selector.stats().iter().any(|&stat| {
            let Some(entry) = self.max_for(class, slot, stat) else {
                return false;
            };
            let Some(stat_value) = item.stat_value(stat) else {
                return false;
            };
            if by_base {
                stat_value.base == entry.base
            } else {
                stat_value.value == entry.value
            }
        })
    }
}
