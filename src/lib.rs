//! Loadout Forge - armor loadout optimization engine

pub mod core;
pub mod filters;
pub mod inventory;
pub mod mods;
pub mod optimizer;
pub mod stats;
