//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a physical item instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// Character class an armor piece is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClassType {
    Titan,
    Hunter,
    Warlock,
}

impl ClassType {
    pub fn all() -> &'static [ClassType] {
        &[ClassType::Titan, ClassType::Hunter, ClassType::Warlock]
    }
}

/// The five fixed equipment slots a loadout fills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArmorSlot {
    Helmet,
    Gauntlets,
    Chest,
    Legs,
    ClassItem,
}

/// Number of equipment slots in a complete loadout
pub const SLOT_COUNT: usize = 5;

impl ArmorSlot {
    /// All slots in canonical loadout order
    pub fn all() -> &'static [ArmorSlot; SLOT_COUNT] {
        &[
            ArmorSlot::Helmet,
            ArmorSlot::Gauntlets,
            ArmorSlot::Chest,
            ArmorSlot::Legs,
            ArmorSlot::ClassItem,
        ]
    }

    /// Position of this slot in the canonical order
    pub fn index(self) -> usize {
        match self {
            ArmorSlot::Helmet => 0,
            ArmorSlot::Gauntlets => 1,
            ArmorSlot::Chest => 2,
            ArmorSlot::Legs => 3,
            ArmorSlot::ClassItem => 4,
        }
    }
}

/// Energy affinity of an item or mod
///
/// `Any` is compatible with everything; the elemental types only with
/// themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergyType {
    Any,
    Arc,
    Solar,
    Void,
}

impl EnergyType {
    /// Whether a mod of energy type `other` can socket into an item of
    /// energy type `self`
    pub fn compatible(self, other: EnergyType) -> bool {
        self == EnergyType::Any || other == EnergyType::Any || self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_any_is_compatible_with_everything() {
        for &e in &[
            EnergyType::Any,
            EnergyType::Arc,
            EnergyType::Solar,
            EnergyType::Void,
        ] {
            assert!(EnergyType::Any.compatible(e));
            assert!(e.compatible(EnergyType::Any));
        }
    }

    #[test]
    fn test_elemental_energy_only_matches_itself() {
        assert!(EnergyType::Arc.compatible(EnergyType::Arc));
        assert!(!EnergyType::Arc.compatible(EnergyType::Solar));
        assert!(!EnergyType::Void.compatible(EnergyType::Arc));
    }

    #[test]
    fn test_slot_index_matches_canonical_order() {
        for (i, slot) in ArmorSlot::all().iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }
}
