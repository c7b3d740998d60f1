//! Combination search over the five-slot product space
//!
//! Enumerates one-item-per-slot assignments from the normalized candidate
//! groups and retains the top distinct objective values, every tie
//! included. The enumeration is branch-and-bound: candidates in each slot
//! are sorted by objective contribution descending, suffix maxima bound
//! what the remaining slots could still add, and branches that cannot
//! reach the lowest retained value are cut. The first slot fans out
//! across a rayon pool; partial collectors merge into a deterministic
//! ranking.

use crate::core::config::ForgeSettings;
use crate::core::types::{ItemId, SLOT_COUNT};
use crate::optimizer::objective::Objective;
use crate::optimizer::process::{ArmorSet, ProcessItem, SlotAssignment, SlotCandidates};
use crate::stats::StatVector;
use ahash::AHashMap;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// Ranked search results, best objective value first
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    /// Sets ordered by objective descending; ties are adjacent and ordered
    /// by assignment ids for determinism
    pub sets: Vec<ArmorSet>,
}

impl SearchOutcome {
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// All sets achieving the single best objective value
    pub fn best_sets(&self) -> &[ArmorSet] {
        let Some(first) = self.sets.first() else {
            return &[];
        };
        let end = self
            .sets
            .iter()
            .position(|set| set.objective != first.objective)
            .unwrap_or(self.sets.len());
        &self.sets[..end]
    }
}

/// Keeps the best `capacity` distinct objective values seen, with every
/// assignment tied at a kept value
struct RankedCollector {
    ranks: BTreeMap<i32, Vec<[ItemId; SLOT_COUNT]>>,
    capacity: usize,
}

impl RankedCollector {
    fn new(capacity: usize) -> Self {
        Self { ranks: BTreeMap::new(), capacity }
    }

    /// Lowest value still worth exploring, once the collector is full
    fn floor(&self) -> Option<i32> {
        if self.ranks.len() < self.capacity {
            None
        } else {
            self.ranks.first_key_value().map(|(&value, _)| value)
        }
    }

    fn offer(&mut self, value: i32, assignment: [ItemId; SLOT_COUNT]) {
        if let Some(floor) = self.floor() {
            if value < floor {
                return;
            }
        }
        self.ranks.entry(value).or_default().push(assignment);
        if self.ranks.len() > self.capacity {
            self.ranks.pop_first();
        }
    }

    fn merge(mut self, other: RankedCollector) -> RankedCollector {
        for (value, assignments) in other.ranks {
            for assignment in assignments {
                self.offer(value, assignment);
            }
        }
        self
    }
}

/// One candidate with its precomputed objective contribution
struct Entry<'a> {
    contribution: i32,
    item: &'a ProcessItem,
}

fn scan(
    groups: &[Vec<Entry<'_>>; SLOT_COUNT],
    suffix_best: &[i32; SLOT_COUNT + 1],
    depth: usize,
    sum: i32,
    ids: &mut [ItemId; SLOT_COUNT],
    collector: &mut RankedCollector,
) {
    if depth == SLOT_COUNT {
        collector.offer(sum, *ids);
        return;
    }
    for entry in &groups[depth] {
        if let Some(floor) = collector.floor() {
            // Entries are sorted descending, so once this one cannot
            // reach the floor neither can anything after it.
            if sum + entry.contribution + suffix_best[depth + 1] < floor {
                break;
            }
        }
        if ids[..depth].contains(&entry.item.id) {
            continue;
        }
        ids[depth] = entry.item.id;
        scan(groups, suffix_best, depth + 1, sum + entry.contribution, ids, collector);
    }
}

/// Search the candidate product space for the assignments maximizing
/// `objective`
///
/// Every returned set satisfies the energy budget of each of its items
/// and references five distinct physical items. An empty candidate group
/// yields an empty outcome; there is no best partial loadout.
pub fn search(
    candidates: &SlotCandidates,
    deltas: &StatVector,
    objective: &Objective,
    settings: &ForgeSettings,
) -> SearchOutcome {
    if !candidates.is_complete() || settings.max_ranked_values == 0 {
        tracing::debug!("search has no feasible assignment space");
        return SearchOutcome::default();
    }

    let by_base = settings.compare_base_stats;

    let mut groups: [Vec<Entry<'_>>; SLOT_COUNT] = Default::default();
    for (i, group) in candidates.groups().iter().enumerate() {
        let mut entries: Vec<Entry<'_>> = group
            .iter()
            .filter(|item| item.energy_feasible())
            .map(|item| Entry { contribution: objective.contribution(item, by_base), item })
            .collect();
        entries.sort_by(|a, b| {
            b.contribution
                .cmp(&a.contribution)
                .then_with(|| a.item.id.cmp(&b.item.id))
        });
        if entries.is_empty() {
            tracing::debug!(slot = i, "no feasible candidates in slot");
            return SearchOutcome::default();
        }
        groups[i] = entries;
    }

    let mut suffix_best = [0i32; SLOT_COUNT + 1];
    for i in (0..SLOT_COUNT).rev() {
        suffix_best[i] = suffix_best[i + 1] + groups[i][0].contribution;
    }

    let collector = groups[0]
        .par_iter()
        .map(|first| {
            let mut local = RankedCollector::new(settings.max_ranked_values);
            let mut ids = [first.item.id; SLOT_COUNT];
            scan(&groups, &suffix_best, 1, first.contribution, &mut ids, &mut local);
            local
        })
        .reduce(
            || RankedCollector::new(settings.max_ranked_values),
            RankedCollector::merge,
        );

    let items_by_id: AHashMap<ItemId, &ProcessItem> = candidates
        .groups()
        .iter()
        .flatten()
        .map(|item| (item.id, item))
        .collect();

    let delta_bonus = objective.delta_contribution(deltas);
    let mut sets = Vec::new();
    for (&value, assignments) in collector.ranks.iter().rev() {
        let mut assignments = assignments.clone();
        assignments.sort();
        for ids in assignments {
            let mut stats = *deltas;
            let mut power_total = 0i64;
            for id in &ids {
                let item = items_by_id[id];
                stats = stats + if by_base { item.base_stats } else { item.stats };
                power_total += i64::from(item.power);
            }
            sets.push(ArmorSet {
                assignment: SlotAssignment(ids),
                stats,
                power: (power_total / SLOT_COUNT as i64) as i32,
                objective: value + delta_bonus,
            });
        }
    }

    tracing::debug!(
        candidates = candidates.candidate_count(),
        ranked_values = collector.ranks.len(),
        sets = sets.len(),
        "search complete"
    );

    SearchOutcome { sets }
}
