//! Stat filter predicates backed by the engine

pub mod range;
pub mod stat_filters;

pub use range::{RangeComparator, RangeOp};
pub use stat_filters::{
    always_false, has_max_stat_value, max_power_loadout_items, max_stat_loadout_items,
    stat_filter_from_string, ItemPredicate,
};
