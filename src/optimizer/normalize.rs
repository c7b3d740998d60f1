//! Item normalization
//!
//! Converts live pool items into [`ProcessItem`] records and groups them
//! by slot for the search. Everything that disqualifies an item happens
//! here, before the product space is formed: missing slot/class, a
//! selected mod the item cannot host, a mod bill over the energy budget,
//! or a base stat total under the pool floor. Disqualification is never an
//! error; the search just runs on a smaller pool.

use crate::core::config::ForgeSettings;
use crate::core::types::{ArmorSlot, ClassType};
use crate::inventory::{Item, ItemPool};
use crate::mods::{ArmorMod, ModSelection};
use crate::optimizer::process::{ProcessEnergy, ProcessItem, SlotCandidates};
use crate::stats::StatVector;

/// Normalize one item against the mods selected for its slot
///
/// Returns None when the item cannot participate in search: not armor,
/// unable to host one of the given mods, or already over its energy
/// budget once their costs are summed.
pub fn normalize_item(item: &Item, mods_for_slot: &[ArmorMod]) -> Option<ProcessItem> {
    let slot = item.slot?;
    let class = item.class?;

    let mut stats = StatVector::zero();
    let mut base_stats = StatVector::zero();
    if let Some(list) = &item.stats {
        for entry in list {
            stats.set(entry.stat, entry.value);
            base_stats.set(entry.stat, entry.base);
        }
    }

    let energy = item.energy.map(|e| {
        let cost_initial: i32 = mods_for_slot.iter().map(|m| m.energy.cost).sum();
        ProcessEnergy {
            energy_type: e.energy_type,
            capacity: e.capacity,
            used_initial: cost_initial,
            used: cost_initial,
        }
    });

    let process = ProcessItem {
        id: item.id,
        name: item.name.clone(),
        slot,
        class,
        power: item.power,
        stats,
        base_stats,
        energy,
        compatible_tags: item.compatible_mod_tags.clone(),
    };

    for armor_mod in mods_for_slot {
        if !process.hosts_mod(armor_mod) {
            return None;
        }
    }
    if !process.energy_feasible() {
        return None;
    }

    Some(process)
}

/// Normalize a pool snapshot into per-slot candidate groups for `class`
pub fn normalize_pool(
    pool: &ItemPool,
    class: ClassType,
    selection: &ModSelection,
    settings: &ForgeSettings,
) -> SlotCandidates {
    let mut candidates = SlotCandidates::default();
    let mut excluded = 0usize;

    for item in pool.armor_for_class(class) {
        // Class items carry no base stats, so the pool floor only applies
        // to the four stat-bearing slots.
        if item.slot != Some(ArmorSlot::ClassItem)
            && item.base_stat_total() < settings.min_stat_total
        {
            excluded += 1;
            continue;
        }
        let mods_for_slot = item
            .slot
            .map(|slot| selection.mods_for_slot(slot))
            .unwrap_or(&[]);
        match normalize_item(item, mods_for_slot) {
            Some(process) => candidates.push(process),
            None => excluded += 1,
        }
    }

    tracing::debug!(
        class = ?class,
        kept = candidates.candidate_count(),
        excluded,
        "normalized pool"
    );

    candidates
}
