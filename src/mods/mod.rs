//! Armor mods and mod-selection aggregation
//!
//! Mods are picked externally (the mod picker UI groups them by
//! category); the engine only reads the selection. Aggregation sums every
//! mod's stat investments into one delta vector that is applied once per
//! loadout, after the five items' own stats are totaled.

use crate::core::types::{ArmorSlot, EnergyType};
use crate::stats::{StatType, StatVector};
use serde::{Deserialize, Serialize};

/// Energy a mod consumes when socketed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModEnergy {
    pub energy_type: EnergyType,
    pub cost: i32,
}

/// One selectable armor mod
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArmorMod {
    /// Catalog hash of the mod definition
    pub hash: u32,
    pub name: String,
    pub energy: ModEnergy,
    /// Signed stat contributions this mod invests
    pub investment_stats: Vec<(StatType, i32)>,
    /// Seasonal socket tag required on the host item, if any
    pub tag: Option<String>,
}

/// Mod picker categories, in picker order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PickerCategory {
    General,
    Helmet,
    Gauntlets,
    Chest,
    Legs,
    ClassItem,
    Seasonal,
}

impl PickerCategory {
    pub fn all() -> &'static [PickerCategory] {
        &[
            PickerCategory::General,
            PickerCategory::Helmet,
            PickerCategory::Gauntlets,
            PickerCategory::Chest,
            PickerCategory::Legs,
            PickerCategory::ClassItem,
            PickerCategory::Seasonal,
        ]
    }

    /// Category holding slot-specific mods for `slot`
    pub fn for_slot(slot: ArmorSlot) -> PickerCategory {
        match slot {
            ArmorSlot::Helmet => PickerCategory::Helmet,
            ArmorSlot::Gauntlets => PickerCategory::Gauntlets,
            ArmorSlot::Chest => PickerCategory::Chest,
            ArmorSlot::Legs => PickerCategory::Legs,
            ArmorSlot::ClassItem => PickerCategory::ClassItem,
        }
    }
}

/// The externally-curated mod selection, grouped by picker category
///
/// The engine never retains or mutates the mods themselves; it only reads
/// the selection while normalizing and aggregating.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModSelection {
    pub general: Vec<ArmorMod>,
    pub helmet: Vec<ArmorMod>,
    pub gauntlets: Vec<ArmorMod>,
    pub chest: Vec<ArmorMod>,
    pub legs: Vec<ArmorMod>,
    pub class_item: Vec<ArmorMod>,
    pub seasonal: Vec<ArmorMod>,
}

impl ModSelection {
    pub fn category(&self, category: PickerCategory) -> &[ArmorMod] {
        match category {
            PickerCategory::General => &self.general,
            PickerCategory::Helmet => &self.helmet,
            PickerCategory::Gauntlets => &self.gauntlets,
            PickerCategory::Chest => &self.chest,
            PickerCategory::Legs => &self.legs,
            PickerCategory::ClassItem => &self.class_item,
            PickerCategory::Seasonal => &self.seasonal,
        }
    }

    /// Mods that must socket into items of `slot`
    pub fn mods_for_slot(&self, slot: ArmorSlot) -> &[ArmorMod] {
        self.category(PickerCategory::for_slot(slot))
    }

    /// Every selected mod, in category order
    pub fn all_mods(&self) -> impl Iterator<Item = &ArmorMod> {
        PickerCategory::all()
            .iter()
            .flat_map(|&category| self.category(category).iter())
    }

    pub fn is_empty(&self) -> bool {
        self.all_mods().next().is_none()
    }
}

/// Sum the stat contributions of every selected mod into one delta vector
///
/// Addition is commutative, so category order does not affect the result;
/// repeated calls on the same selection are bit-identical. No clamping
/// happens here; that is a presentation concern.
pub fn total_stat_changes(selection: &ModSelection) -> StatVector {
    let mut totals = StatVector::zero();
    for armor_mod in selection.all_mods() {
        for &(stat, value) in &armor_mod.investment_stats {
            totals.add(stat, value);
        }
    }
    totals
}
