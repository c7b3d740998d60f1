//! Domain item records as they arrive from the item pool

use crate::core::types::{ArmorSlot, ClassType, EnergyType, ItemId};
use crate::stats::{StatType, StatValue};
use serde::{Deserialize, Serialize};

/// One stat entry on a live item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemStat {
    pub stat: StatType,
    pub value: i32,
    pub base: i32,
}

/// Energy budget of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEnergy {
    pub energy_type: EnergyType,
    pub capacity: i32,
}

/// A live item as supplied by the inventory collaborators
///
/// Slot and class are optional on purpose: items missing either are not
/// equippable armor and fail closed out of every armor query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub slot: Option<ArmorSlot>,
    pub class: Option<ClassType>,
    pub power: i32,
    pub stats: Option<Vec<ItemStat>>,
    pub energy: Option<ItemEnergy>,
    /// Seasonal socket tags this item can host mods for
    pub compatible_mod_tags: Option<Vec<String>>,
}

impl Item {
    /// Whether this item is armor usable in loadout search
    pub fn is_armor(&self) -> bool {
        self.slot.is_some() && self.class.is_some()
    }

    /// Look up one stat's current/base pair
    pub fn stat_value(&self, stat: StatType) -> Option<StatValue> {
        self.stats.as_ref().and_then(|stats| {
            stats
                .iter()
                .find(|s| s.stat == stat)
                .map(|s| StatValue { value: s.value, base: s.base })
        })
    }

    /// Sum of base stat values, 0 when the item has no stats
    pub fn base_stat_total(&self) -> i32 {
        self.stats
            .as_ref()
            .map(|stats| stats.iter().map(|s| s.base).sum())
            .unwrap_or(0)
    }
}
