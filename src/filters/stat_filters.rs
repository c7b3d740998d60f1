//! Stat-based item predicates
//!
//! These are the engine-facing halves of the search filters: range
//! predicates over single stats, best-in-slot queries against the
//! per-slot maxima, and loadout-membership sets driven by the
//! combination search. Malformed filter input never raises; it yields a
//! predicate that matches nothing.

use crate::core::config::ForgeSettings;
use crate::core::types::ItemId;
use crate::filters::range::RangeComparator;
use crate::inventory::{Item, ItemPool, SlotMaxima};
use crate::mods::{total_stat_changes, ModSelection};
use crate::optimizer::{normalize_pool, search, Objective};
use crate::stats::{StatSelector, StatType};
use ahash::AHashSet;

/// Boxed item predicate, the unit the filter layer composes
pub type ItemPredicate = Box<dyn Fn(&Item) -> bool + Send + Sync>;

/// The predicate that matches nothing; what malformed filters degrade to
pub fn always_false() -> ItemPredicate {
    Box::new(|_| false)
}

/// Build a predicate from a `stat:range` filter value such as
/// `mobility:>=30` or `any:50`
///
/// A second colon (three-part expression), an unknown stat name, or an
/// unparsable range all degrade to an always-false predicate.
pub fn stat_filter_from_string(filter_value: &str, by_base: bool) -> ItemPredicate {
    let mut parts = filter_value.splitn(3, ':');
    let stat_name = parts.next().unwrap_or("");
    let range_part = parts.next();
    if parts.next().is_some() {
        return always_false();
    }
    let Some(selector) = StatSelector::from_name(stat_name) else {
        return always_false();
    };
    let Some(comparator) = range_part.and_then(RangeComparator::parse) else {
        return always_false();
    };

    Box::new(move |item| {
        selector.stats().iter().any(|&stat| {
            item.stat_value(stat)
                .map(|sv| comparator.matches(if by_base { sv.base } else { sv.value }))
                .unwrap_or(false)
        })
    })
}

/// Whether `item` holds the observed maximum for `stat_name` within its
/// own (class, slot) bucket
pub fn has_max_stat_value(
    maxima: &SlotMaxima,
    item: &Item,
    stat_name: &str,
    by_base: bool,
) -> bool {
    match StatSelector::from_name(stat_name) {
        Some(selector) => maxima.holds_maximum(item, &selector, by_base),
        None => false,
    }
}

/// Ids of every item appearing in a maximal loadout for `stat`, across
/// all classes present in the pool
///
/// Membership means "belongs to *a* maximal assignment"; ties contribute
/// all their items.
pub fn max_stat_loadout_items(
    pool: &ItemPool,
    selection: &ModSelection,
    stat: StatType,
    settings: &ForgeSettings,
) -> AHashSet<ItemId> {
    loadout_members(pool, selection, &Objective::Stat(stat), settings)
}

/// Ids of every item appearing in a maximum-power loadout, across all
/// classes present in the pool
pub fn max_power_loadout_items(pool: &ItemPool, settings: &ForgeSettings) -> AHashSet<ItemId> {
    loadout_members(pool, &ModSelection::default(), &Objective::MaxPower, settings)
}

fn loadout_members(
    pool: &ItemPool,
    selection: &ModSelection,
    objective: &Objective,
    settings: &ForgeSettings,
) -> AHashSet<ItemId> {
    // Membership only needs the top rank; ties there are all kept.
    let top_only = ForgeSettings { max_ranked_values: 1, ..settings.clone() };
    let deltas = total_stat_changes(selection);
    let mut members = AHashSet::new();

    for class in pool.classes_present() {
        let candidates = normalize_pool(pool, class, selection, &top_only);
        let outcome = search(&candidates, &deltas, objective, &top_only);
        for set in outcome.best_sets() {
            members.extend(set.assignment.items().iter().copied());
        }
    }

    members
}
