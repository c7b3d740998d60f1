//! Armor stat types and stat vectors

pub mod selector;
pub mod types;

pub use selector::StatSelector;
pub use types::{StatType, StatValue, StatVector, STAT_COUNT};
