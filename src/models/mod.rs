// src/models/mod.rs

//! Domain models for the committee search application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod committee;
mod config;
mod member;

// Re-export all public types
pub use committee::{Committee, CommitteeDetails};
pub use config::{Config, LoggingConfig, RemoteConfig, ServerConfig};
pub use member::Member;

use serde::{Deserialize, Deserializer};

/// Decode a field that may be sent as `null`, falling back to its default.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
