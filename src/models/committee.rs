// src/models/committee.rs

//! Committee summary and roster data structures.

use serde::{Deserialize, Serialize};

use crate::models::{Member, null_as_default};

/// A committee as listed on the paginated `committees` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Committee {
    /// Numeric committee identifier
    pub id: u64,

    /// Whether the committee is currently sitting
    #[serde(default, deserialize_with = "null_as_default")]
    pub is_active: bool,

    /// Display name
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// The member roster of a single committee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommitteeDetails {
    /// Identifier of the committee this roster belongs to
    pub id: u64,

    /// Members in the order the service returned them
    #[serde(default, deserialize_with = "null_as_default")]
    pub members: Vec<Member>,
}

impl CommitteeDetails {
    /// Number of members on the roster.
    pub fn member_count(&self) -> usize {
        self.members.len()
    }
}
