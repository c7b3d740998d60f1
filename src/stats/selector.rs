//! Stat selection for filter queries
//!
//! The filter grammar accepts either a concrete stat name or the
//! pseudo-stat "any", which stands for the whole armor stat set. That
//! used to be a magic string in the original filter layer; here it is an
//! explicit variant.

use crate::stats::types::StatType;

/// Which stats a filter query is asking about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatSelector {
    Single(StatType),
    AnyOf(Vec<StatType>),
}

impl StatSelector {
    /// Parse a filter-expression stat name; "any" selects all six armor
    /// stats. Unknown names yield None so callers can fail closed.
    pub fn from_name(name: &str) -> Option<StatSelector> {
        if name == "any" {
            return Some(StatSelector::AnyOf(StatType::all().to_vec()));
        }
        StatType::from_name(name).map(StatSelector::Single)
    }

    /// Stats this selector covers
    pub fn stats(&self) -> &[StatType] {
        match self {
            StatSelector::Single(stat) => std::slice::from_ref(stat),
            StatSelector::AnyOf(stats) => stats,
        }
    }
}
