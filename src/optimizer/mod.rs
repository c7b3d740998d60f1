//! The loadout optimization pipeline
//!
//! Normalize a pool snapshot into per-slot candidates, aggregate the
//! selected mods into a delta vector, search the slot product space for
//! the assignments maximizing an objective, then hydrate the winners back
//! into live items.

pub mod hydrate;
pub mod normalize;
pub mod objective;
pub mod process;
pub mod search;
pub mod worker;

pub use hydrate::{hydrate_armor_set, HydratedSet};
pub use normalize::{normalize_item, normalize_pool};
pub use objective::Objective;
pub use process::{ArmorSet, ProcessEnergy, ProcessItem, SlotAssignment, SlotCandidates};
pub use search::{search, SearchOutcome};
pub use worker::{SearchRequest, SearchWorker};
