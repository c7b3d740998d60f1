//! Item pool snapshots and per-slot stat maxima

pub mod item;
pub mod maxima;
pub mod pool;

pub use item::{Item, ItemEnergy, ItemStat};
pub use maxima::{MaxEntry, SlotMaxima};
pub use pool::ItemPool;
