//! Committee member search.
//!
//! Scans an index snapshot for members whose name, party or canton contains
//! a query string and reports the committees they sit on.
//!
//! ## Submodules
//! - **`engine`**: Matching and result assembly.
//! - **`types`**: Result rows handed to the web layer and CLI.

pub mod engine;
pub mod types;

pub use engine::search;
pub use types::SearchResult;
