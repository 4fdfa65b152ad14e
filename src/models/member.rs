//! Committee member data structure.

use serde::{Deserialize, Serialize};

use crate::models::null_as_default;

/// A member of parliament sitting on a committee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: u64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,

    /// Canton abbreviation (e.g., "ZH", "BE")
    #[serde(default, deserialize_with = "null_as_default")]
    pub canton: String,

    /// Party abbreviation (e.g., "SP", "FDP")
    #[serde(default, deserialize_with = "null_as_default")]
    pub party: String,
}

impl Member {
    /// The fields a search query is matched against.
    pub fn searchable_fields(&self) -> [&str; 4] {
        [&self.first_name, &self.last_name, &self.party, &self.canton]
    }

    /// Format member for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{first_name}`, `{last_name}`, `{canton}`, `{party}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{id}", &self.id.to_string())
            .replace("{first_name}", &self.first_name)
            .replace("{last_name}", &self.last_name)
            .replace("{canton}", &self.canton)
            .replace("{party}", &self.party)
    }
}
