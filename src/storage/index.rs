//! Committee index snapshot.
//!
//! An `Index` holds the active committees in listing order together with the
//! roster of each one. It is assembled once by an `IndexBuilder` and never
//! mutated afterwards.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::error::{AppError, Result};
use crate::models::{Committee, CommitteeDetails};

/// Immutable snapshot of active committees and their rosters.
#[derive(Debug, Clone)]
pub struct Index {
    committees: Vec<Committee>,
    details: HashMap<u64, CommitteeDetails>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl Index {
    /// The unpopulated index served before the first refresh completes.
    pub fn empty() -> Self {
        Self {
            committees: Vec::new(),
            details: HashMap::new(),
            refreshed_at: None,
        }
    }

    /// Active committees in listing order.
    pub fn committees(&self) -> &[Committee] {
        &self.committees
    }

    /// Roster of a committee, if it is indexed.
    pub fn details(&self, id: u64) -> Option<&CommitteeDetails> {
        self.details.get(&id)
    }

    /// Committees paired with their rosters, in listing order.
    pub fn entries(&self) -> impl Iterator<Item = (&Committee, &CommitteeDetails)> {
        // Every listed committee has a roster; enforced by `IndexBuilder::build`.
        self.committees
            .iter()
            .filter_map(|c| self.details.get(&c.id).map(|d| (c, d)))
    }

    /// Number of active committees.
    pub fn len(&self) -> usize {
        self.committees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committees.is_empty()
    }

    /// Total roster entries across all committees.
    pub fn member_count(&self) -> usize {
        self.details.values().map(|d| d.member_count()).sum()
    }

    /// When the snapshot was built; `None` until a refresh has completed.
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }

    pub fn is_populated(&self) -> bool {
        self.refreshed_at.is_some()
    }
}

impl Default for Index {
    fn default() -> Self {
        Self::empty()
    }
}

/// Builder for assembling an `Index`.
pub struct IndexBuilder {
    committees: Vec<Committee>,
    details: HashMap<u64, CommitteeDetails>,
}

impl IndexBuilder {
    /// Start from the active committees, in listing order.
    pub fn new(committees: Vec<Committee>) -> Self {
        Self {
            details: HashMap::with_capacity(committees.len()),
            committees,
        }
    }

    /// Attach the roster fetched for committee `id`.
    pub fn add_details(&mut self, id: u64, details: CommitteeDetails) -> Result<()> {
        if self.details.insert(id, details).is_some() {
            return Err(AppError::index(format!(
                "duplicate roster for committee {}",
                id
            )));
        }
        Ok(())
    }

    /// Build the final index.
    ///
    /// Fails unless every listed committee has exactly one roster.
    pub fn build(self) -> Result<Index> {
        if let Some(missing) = self
            .committees
            .iter()
            .find(|c| !self.details.contains_key(&c.id))
        {
            return Err(AppError::index(format!(
                "no roster for committee {} ({})",
                missing.id, missing.name
            )));
        }
        if self.details.len() != self.committees.len() {
            return Err(AppError::index(format!(
                "{} rosters for {} committees",
                self.details.len(),
                self.committees.len()
            )));
        }

        Ok(Index {
            committees: self.committees,
            details: self.details,
            refreshed_at: Some(Utc::now()),
        })
    }
}
