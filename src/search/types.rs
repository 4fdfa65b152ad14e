//! Search result types.

use serde::Serialize;

/// One committee with at least one matching member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// 1-based position among the matching committees
    pub rank: usize,

    pub committee_id: u64,

    pub committee_name: String,

    /// Roster size
    pub member_count: usize,

    /// Members matching the query
    pub match_count: usize,

    /// Canonical address of the committee on the remote service
    pub url: String,
}
