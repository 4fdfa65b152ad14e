//! In-memory storage for fetched committee data.
//!
//! Nothing is persisted: the index lives for the process lifetime and is
//! rebuilt wholesale by a refresh.
//!
//! - `Index`: immutable snapshot of active committees and their rosters
//! - `IndexBuilder`: assembles a snapshot and checks it is complete
//! - `IndexStore`: shared handle that swaps snapshots atomically

pub mod index;
pub mod store;

pub use index::{Index, IndexBuilder};
pub use store::IndexStore;
