//! Resolving search results back into live items

use crate::core::types::ItemId;
use crate::inventory::Item;
use crate::optimizer::process::ArmorSet;
use ahash::AHashMap;

/// An [`ArmorSet`] with its identifiers resolved to live pool items
///
/// Items appear in slot order. Identifiers that no longer resolve are
/// omitted, so a hydrated set shorter than five pieces means the pool
/// changed since the search ran and the caller should re-run it.
#[derive(Debug, Clone)]
pub struct HydratedSet<'a> {
    pub items: Vec<&'a Item>,
    pub set: &'a ArmorSet,
}

impl HydratedSet<'_> {
    /// Whether any identifier failed to resolve
    pub fn is_stale(&self) -> bool {
        self.items.len() < self.set.assignment.items().len()
    }
}

/// Resolve a search result against the live pool
pub fn hydrate_armor_set<'a>(
    set: &'a ArmorSet,
    items_by_id: &AHashMap<ItemId, &'a Item>,
) -> HydratedSet<'a> {
    let items = set
        .assignment
        .items()
        .iter()
        .filter_map(|id| items_by_id.get(id).copied())
        .collect();
    HydratedSet { items, set }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ArmorSlot, ClassType, SLOT_COUNT};
    use crate::inventory::ItemPool;
    use crate::optimizer::process::SlotAssignment;
    use crate::stats::StatVector;

    fn pool_of(n: usize) -> ItemPool {
        let items = (0..n)
            .map(|i| Item {
                id: ItemId::new(),
                name: format!("piece-{i}"),
                slot: Some(ArmorSlot::Helmet),
                class: Some(ClassType::Warlock),
                power: 1000,
                stats: None,
                energy: None,
                compatible_mod_tags: None,
            })
            .collect();
        ItemPool::new(items)
    }

    fn set_over(ids: [ItemId; SLOT_COUNT]) -> ArmorSet {
        ArmorSet {
            assignment: SlotAssignment(ids),
            stats: StatVector::zero(),
            power: 1000,
            objective: 0,
        }
    }

    #[test]
    fn test_hydration_preserves_slot_order() {
        let pool = pool_of(5);
        let ids: [ItemId; SLOT_COUNT] =
            std::array::from_fn(|i| pool.items[i].id);
        let set = set_over(ids);
        let by_id = pool.items_by_id();
        let hydrated = hydrate_armor_set(&set, &by_id);
        assert!(!hydrated.is_stale());
        for (i, item) in hydrated.items.iter().enumerate() {
            assert_eq!(item.id, ids[i]);
        }
    }

    #[test]
    fn test_stale_identifiers_are_omitted_not_fatal() {
        let pool = pool_of(4);
        let mut ids: [ItemId; SLOT_COUNT] = std::array::from_fn(|_| ItemId::new());
        for (i, item) in pool.items.iter().enumerate() {
            ids[i] = item.id;
        }
        // ids[4] never existed in the pool
        let set = set_over(ids);
        let by_id = pool.items_by_id();
        let hydrated = hydrate_armor_set(&set, &by_id);
        assert_eq!(hydrated.items.len(), 4);
        assert!(hydrated.is_stale());
    }
}
