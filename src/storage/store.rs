//! Shared holder for the current index snapshot.

use std::sync::{Arc, PoisonError, RwLock};

use crate::storage::Index;

/// Process-wide handle to the current `Index`.
///
/// Readers take a cheap `Arc` to the snapshot and search it without holding
/// any lock. A refresh replaces the whole snapshot in one swap.
#[derive(Debug, Default)]
pub struct IndexStore {
    current: RwLock<Arc<Index>>,
}

impl IndexStore {
    /// Create a store holding the unpopulated index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding `index`.
    pub fn with_index(index: Index) -> Self {
        Self {
            current: RwLock::new(Arc::new(index)),
        }
    }

    /// The snapshot current at the time of the call.
    pub fn snapshot(&self) -> Arc<Index> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Replace the current snapshot, returning the previous one.
    pub fn install(&self, index: Index) -> Arc<Index> {
        let next = Arc::new(index);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::index::fixtures::*;

    #[test]
    fn test_new_store_is_unpopulated() {
        let store = IndexStore::new();
        assert!(!store.snapshot().is_populated());
    }

    #[test]
    fn test_install_swaps_whole_snapshot() {
        let store = IndexStore::new();
        let before = store.snapshot();

        let previous = store.install(index_of(vec![(
            committee(1, "Finance"),
            vec![member(1, "Anna", "Keller", "ZH", "SP")],
        )]));

        assert!(Arc::ptr_eq(&before, &previous));
        // Readers holding the old snapshot keep seeing it unchanged.
        assert!(before.is_empty());

        let after = store.snapshot();
        assert_eq!(after.len(), 1);
        assert!(after.is_populated());
    }
}
