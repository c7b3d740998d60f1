//! Shared types, errors, and configuration

pub mod config;
pub mod error;
pub mod types;

pub use config::ForgeSettings;
pub use error::{ForgeError, Result};
pub use types::{ArmorSlot, ClassType, EnergyType, ItemId, SLOT_COUNT};
