//! Service layer for the committee search application.
//!
//! This module contains the remote access logic for:
//! - Raw resource retrieval (`DataSource`, `RemoteClient`)
//! - Committee listing (`CommitteeFetcher`)
//! - Committee rosters (`DetailFetcher`)

mod committees;
mod details;
pub(crate) mod source;

pub use committees::{CommitteeFetcher, Listing};
pub use details::DetailFetcher;
pub use source::{DataSource, RemoteClient};
