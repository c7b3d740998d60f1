//! Normalized item records used during search
//!
//! A [`ProcessItem`] is an immutable numeric snapshot of one armor piece.
//! Anything that would change it, like socketing a hypothetical mod, resetting
//! to the pre-search energy state, produces a new derived copy instead of
//! mutating shared state.

use crate::core::types::{ArmorSlot, ClassType, EnergyType, ItemId, SLOT_COUNT};
use crate::mods::ArmorMod;
use crate::stats::StatVector;
use serde::{Deserialize, Serialize};

/// Energy state of a normalized item
///
/// `used_initial` is the cost of the externally-selected mods for this
/// item's slot, computed once at normalization; `used` starts equal to it
/// and only moves in derived copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessEnergy {
    pub energy_type: EnergyType,
    pub capacity: i32,
    pub used_initial: i32,
    pub used: i32,
}

/// Immutable optimizer snapshot of one armor piece
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessItem {
    /// Back-reference into the live pool
    pub id: ItemId,
    pub name: String,
    pub slot: ArmorSlot,
    pub class: ClassType,
    pub power: i32,
    pub stats: StatVector,
    pub base_stats: StatVector,
    pub energy: Option<ProcessEnergy>,
    /// Seasonal socket tags this piece can host mods for
    pub compatible_tags: Option<Vec<String>>,
}

impl ProcessItem {
    /// One stat, current or base per the caller's compare mode
    pub fn stat(&self, stat: crate::stats::StatType, by_base: bool) -> i32 {
        if by_base {
            self.base_stats[stat]
        } else {
            self.stats[stat]
        }
    }

    /// Whether the current energy state fits the budget
    pub fn energy_feasible(&self) -> bool {
        self.energy.map_or(true, |e| e.used <= e.capacity)
    }

    /// Whether `armor_mod` could socket here at all, ignoring remaining
    /// capacity: the item must have an energy budget of a compatible type
    /// and offer the mod's seasonal tag if it requires one.
    pub fn hosts_mod(&self, armor_mod: &ArmorMod) -> bool {
        let Some(energy) = self.energy else {
            return false;
        };
        if !energy.energy_type.compatible(armor_mod.energy.energy_type) {
            return false;
        }
        match &armor_mod.tag {
            None => true,
            Some(tag) => self
                .compatible_tags
                .as_ref()
                .is_some_and(|tags| tags.iter().any(|t| t == tag)),
        }
    }

    /// Derived copy with `armor_mod` additionally socketed, or None when
    /// it does not fit the remaining budget
    pub fn with_mod(&self, armor_mod: &ArmorMod) -> Option<ProcessItem> {
        if !self.hosts_mod(armor_mod) {
            return None;
        }
        let mut derived = self.clone();
        let energy = derived.energy.as_mut()?;
        energy.used += armor_mod.energy.cost;
        if energy.used > energy.capacity {
            return None;
        }
        Some(derived)
    }

    /// Derived copy with the energy state reset to what normalization
    /// computed
    pub fn reset_mods(&self) -> ProcessItem {
        let mut derived = self.clone();
        if let Some(energy) = derived.energy.as_mut() {
            energy.used = energy.used_initial;
        }
        derived
    }
}

/// Normalized candidates grouped by equipment slot
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotCandidates {
    slots: [Vec<ProcessItem>; SLOT_COUNT],
}

impl SlotCandidates {
    pub fn push(&mut self, item: ProcessItem) {
        self.slots[item.slot.index()].push(item);
    }

    pub fn slot(&self, slot: ArmorSlot) -> &[ProcessItem] {
        &self.slots[slot.index()]
    }

    pub fn groups(&self) -> &[Vec<ProcessItem>; SLOT_COUNT] {
        &self.slots
    }

    /// Whether every slot has at least one candidate
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|group| !group.is_empty())
    }

    pub fn candidate_count(&self) -> usize {
        self.slots.iter().map(Vec::len).sum()
    }
}

/// One item per slot, in canonical slot order
///
/// Only ever constructed complete; partial assignments exist solely as
/// search-internal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SlotAssignment(pub [ItemId; SLOT_COUNT]);

impl SlotAssignment {
    pub fn item(&self, slot: ArmorSlot) -> ItemId {
        self.0[slot.index()]
    }

    pub fn items(&self) -> &[ItemId; SLOT_COUNT] {
        &self.0
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.0.contains(&id)
    }
}

/// A complete search result: assignment plus its realized totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArmorSet {
    pub assignment: SlotAssignment,
    /// Post-mod stat totals in the compare mode the search ran with
    pub stats: StatVector,
    /// Loadout power: floor of the mean of the five items' power
    pub power: i32,
    /// Objective value this set was ranked by
    pub objective: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mods::ModEnergy;
    use crate::stats::StatType;

    fn item_with_energy(energy_type: EnergyType, capacity: i32, used: i32) -> ProcessItem {
        ProcessItem {
            id: ItemId::new(),
            name: "piece".to_string(),
            slot: ArmorSlot::Helmet,
            class: ClassType::Titan,
            power: 1000,
            stats: StatVector::zero(),
            base_stats: StatVector::zero(),
            energy: Some(ProcessEnergy {
                energy_type,
                capacity,
                used_initial: used,
                used,
            }),
            compatible_tags: None,
        }
    }

    fn mod_costing(energy_type: EnergyType, cost: i32) -> ArmorMod {
        ArmorMod {
            hash: 1,
            name: "mod".to_string(),
            energy: ModEnergy { energy_type, cost },
            investment_stats: vec![(StatType::Mobility, 10)],
            tag: None,
        }
    }

    #[test]
    fn test_with_mod_produces_derived_copy() {
        let item = item_with_energy(EnergyType::Arc, 10, 4);
        let derived = item.with_mod(&mod_costing(EnergyType::Arc, 3)).unwrap();
        assert_eq!(derived.energy.unwrap().used, 7);
        // original untouched
        assert_eq!(item.energy.unwrap().used, 4);
        assert_eq!(derived.reset_mods().energy.unwrap().used, 4);
    }

    #[test]
    fn test_with_mod_rejects_over_budget() {
        let item = item_with_energy(EnergyType::Arc, 5, 4);
        assert!(item.with_mod(&mod_costing(EnergyType::Arc, 3)).is_none());
    }

    #[test]
    fn test_incompatible_energy_type_cannot_host() {
        let item = item_with_energy(EnergyType::Solar, 10, 0);
        assert!(!item.hosts_mod(&mod_costing(EnergyType::Arc, 1)));
        assert!(item.hosts_mod(&mod_costing(EnergyType::Any, 1)));
    }

    #[test]
    fn test_tagged_mod_needs_matching_socket() {
        let mut item = item_with_energy(EnergyType::Any, 10, 0);
        let mut tagged = mod_costing(EnergyType::Any, 1);
        tagged.tag = Some("warmindcell".to_string());
        assert!(!item.hosts_mod(&tagged));
        item.compatible_tags = Some(vec!["warmindcell".to_string()]);
        assert!(item.hosts_mod(&tagged));
    }

    #[test]
    fn test_item_without_energy_hosts_nothing() {
        let mut item = item_with_energy(EnergyType::Any, 10, 0);
        item.energy = None;
        assert!(!item.hosts_mod(&mod_costing(EnergyType::Any, 0)));
        assert!(item.energy_feasible());
    }
}
