//! Pipeline entry points.
//!
//! - `build_index`: Fetch committees and rosters into a new index
//! - `run_refresh`: Build an index and install it as the current snapshot

pub mod refresh;

pub use refresh::{build_index, run_refresh};
