//! Armor stat enumeration and dense stat vectors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Index, IndexMut};

/// The six armor stats
///
/// This is a closed set; nothing at runtime can extend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatType {
    Mobility,
    Resilience,
    Recovery,
    Discipline,
    Intellect,
    Strength,
}

/// Number of armor stats
pub const STAT_COUNT: usize = 6;

impl StatType {
    /// All stats in canonical display order
    pub fn all() -> &'static [StatType; STAT_COUNT] {
        &[
            StatType::Mobility,
            StatType::Resilience,
            StatType::Recovery,
            StatType::Discipline,
            StatType::Intellect,
            StatType::Strength,
        ]
    }

    /// Position of this stat in the canonical order
    pub fn index(self) -> usize {
        match self {
            StatType::Mobility => 0,
            StatType::Resilience => 1,
            StatType::Recovery => 2,
            StatType::Discipline => 3,
            StatType::Intellect => 4,
            StatType::Strength => 5,
        }
    }

    /// Lowercase name as it appears in filter expressions
    pub fn name(self) -> &'static str {
        match self {
            StatType::Mobility => "mobility",
            StatType::Resilience => "resilience",
            StatType::Recovery => "recovery",
            StatType::Discipline => "discipline",
            StatType::Intellect => "intellect",
            StatType::Strength => "strength",
        }
    }

    /// Parse a filter-expression stat name
    pub fn from_name(name: &str) -> Option<StatType> {
        StatType::all().iter().copied().find(|s| s.name() == name)
    }
}

impl fmt::Display for StatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current and base value of one stat on one item
///
/// `base` is the value before socketed mods; `value` is what the item
/// shows right now. Neither bounds the other; mods can be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatValue {
    pub value: i32,
    pub base: i32,
}

/// Dense per-stat integer vector
///
/// Used for item stat snapshots, aggregated mod deltas, and loadout
/// totals. Indexed by [`StatType`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatVector([i32; STAT_COUNT]);

impl StatVector {
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn set(&mut self, stat: StatType, value: i32) {
        self.0[stat.index()] = value;
    }

    pub fn add(&mut self, stat: StatType, delta: i32) {
        self.0[stat.index()] += delta;
    }

    /// Sum across all six stats
    pub fn total(&self) -> i32 {
        self.0.iter().sum()
    }

    /// Weighted sum across a subset of stats
    pub fn weighted_total(&self, weights: &[(StatType, i32)]) -> i32 {
        weights.iter().map(|&(stat, w)| self[stat] * w).sum()
    }
}

impl Index<StatType> for StatVector {
    type Output = i32;

    fn index(&self, stat: StatType) -> &i32 {
        &self.0[stat.index()]
    }
}

impl IndexMut<StatType> for StatVector {
    fn index_mut(&mut self, stat: StatType) -> &mut i32 {
        &mut self.0[stat.index()]
    }
}

impl Add for StatVector {
    type Output = StatVector;

    fn add(self, other: StatVector) -> StatVector {
        let mut out = self;
        for i in 0..STAT_COUNT {
            out.0[i] += other.0[i];
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_name_round_trip() {
        for &stat in StatType::all() {
            assert_eq!(StatType::from_name(stat.name()), Some(stat));
        }
        assert_eq!(StatType::from_name("power"), None);
    }

    #[test]
    fn test_vector_add_is_componentwise() {
        let mut a = StatVector::zero();
        a.set(StatType::Mobility, 10);
        a.set(StatType::Strength, -3);
        let mut b = StatVector::zero();
        b.set(StatType::Mobility, 5);
        let sum = a + b;
        assert_eq!(sum[StatType::Mobility], 15);
        assert_eq!(sum[StatType::Strength], -3);
        assert_eq!(sum.total(), 12);
    }

    #[test]
    fn test_weighted_total() {
        let mut v = StatVector::zero();
        v.set(StatType::Recovery, 20);
        v.set(StatType::Intellect, 10);
        let weights = [(StatType::Recovery, 2), (StatType::Intellect, 1)];
        assert_eq!(v.weighted_total(&weights), 50);
    }
}
