//! Item pool snapshots

use crate::core::types::{ClassType, ItemId};
use crate::inventory::item::Item;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Read-only snapshot of the live item pool
///
/// Every engine invocation works against one snapshot; pool changes mean
/// the caller takes a new snapshot and rebuilds whatever was derived from
/// the old one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemPool {
    pub items: Vec<Item>,
}

impl ItemPool {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Index items by identifier for hydration lookups
    pub fn items_by_id(&self) -> AHashMap<ItemId, &Item> {
        self.items.iter().map(|item| (item.id, item)).collect()
    }

    /// Armor pieces equippable by `class`, in pool order
    ///
    /// `Any`-class armor does not exist in this domain; class match is
    /// exact. Items without slot or class designations are skipped.
    pub fn armor_for_class(&self, class: ClassType) -> impl Iterator<Item = &Item> {
        self.items
            .iter()
            .filter(move |item| item.is_armor() && item.class == Some(class))
    }

    /// Classes that actually have armor in this pool
    pub fn classes_present(&self) -> Vec<ClassType> {
        ClassType::all()
            .iter()
            .copied()
            .filter(|&class| self.armor_for_class(class).next().is_some())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{ArmorSlot, ItemId};

    fn armor(name: &str, class: Option<ClassType>, slot: Option<ArmorSlot>) -> Item {
        Item {
            id: ItemId::new(),
            name: name.to_string(),
            slot,
            class,
            power: 1000,
            stats: None,
            energy: None,
            compatible_mod_tags: None,
        }
    }

    #[test]
    fn test_items_missing_slot_or_class_are_not_armor() {
        let pool = ItemPool::new(vec![
            armor("helm", Some(ClassType::Titan), Some(ArmorSlot::Helmet)),
            armor("ghost", None, None),
            armor("classless", None, Some(ArmorSlot::Chest)),
        ]);
        assert_eq!(pool.armor_for_class(ClassType::Titan).count(), 1);
        assert_eq!(pool.classes_present(), vec![ClassType::Titan]);
    }
}
