// src/pipeline/refresh.rs

//! Committee refresh pipeline.
//!
//! Builds a complete `Index` from the remote service: the active committee
//! listing first, then one roster per committee. Requests are issued one at
//! a time and the first failure aborts the whole refresh.

use std::time::Instant;

use crate::error::Result;
use crate::services::{CommitteeFetcher, DataSource, DetailFetcher};
use crate::storage::{Index, IndexBuilder, IndexStore};

/// Fetch everything and build a fresh index.
///
/// Nothing is returned unless every roster was fetched and decoded.
pub async fn build_index(source: &dyn DataSource) -> Result<Index> {
    let started = Instant::now();

    log::info!("[STEP 1/2] Fetching active committees...");
    let listing = CommitteeFetcher::new(source).fetch_listing().await?;
    let pages = listing.pages;
    let committees = listing.committees;
    log::info!(
        "Found {} active committees on {} pages",
        committees.len(),
        pages
    );

    log::info!("[STEP 2/2] Fetching committee rosters...");
    let details = DetailFetcher::new(source);
    let ids: Vec<u64> = committees.iter().map(|c| c.id).collect();
    let mut builder = IndexBuilder::new(committees);
    for id in ids {
        let roster = details.fetch_details(id).await?;
        builder.add_details(id, roster)?;
    }

    let index = builder.build()?;
    log::info!(
        "Indexed {} committees with {} members from {} listing pages in {:.1?}",
        index.len(),
        index.member_count(),
        pages,
        started.elapsed()
    );
    Ok(index)
}

/// Build a fresh index and install it in `store`.
///
/// On failure the store keeps whatever snapshot it held before.
pub async fn run_refresh(source: &dyn DataSource, store: &IndexStore) -> Result<()> {
    let index = build_index(source).await?;
    store.install(index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::source::stub::StubSource;

    const LISTING: &str = r#"[
        {"id": 1, "isActive": true, "name": "Finance"},
        {"id": 2, "isActive": false, "name": "Old Finance"},
        {"id": 3, "isActive": true, "name": "Health"}
    ]"#;

    fn roster(id: u64, first_name: &str) -> String {
        format!(
            r#"{{"id": {id}, "members": [{{"id": {id}0, "firstName": "{first_name}", "lastName": "Muster", "canton": "ZH", "party": "SP"}}]}}"#
        )
    }

    #[tokio::test]
    async fn test_refresh_indexes_only_active_committees() {
        let source = StubSource::new()
            .with("committees?pageNumber=1", LISTING)
            .with("committees/1?pageNumber=1", &roster(1, "Anna"))
            .with("committees/3?pageNumber=1", &roster(3, "Ben"));
        let store = IndexStore::new();

        run_refresh(&source, &store).await.unwrap();

        let index = store.snapshot();
        let ids: Vec<u64> = index.committees().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(index.details(2).is_none());
        assert_eq!(index.details(3).unwrap().members[0].first_name, "Ben");
        assert!(
            !source
                .requested()
                .contains(&"committees/2?pageNumber=1".to_string())
        );
    }

    #[tokio::test]
    async fn test_detail_decode_error_leaves_store_unpopulated() {
        let source = StubSource::new()
            .with("committees?pageNumber=1", LISTING)
            .with("committees/1?pageNumber=1", &roster(1, "Anna"))
            .with("committees/3?pageNumber=1", "{\"id\": 3, \"members\": [");
        let store = IndexStore::new();

        let result = run_refresh(&source, &store).await;

        assert!(matches!(result, Err(AppError::Json(_))));
        assert!(!store.snapshot().is_populated());
        assert!(store.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_missing_roster_aborts_refresh() {
        let source = StubSource::new()
            .with("committees?pageNumber=1", LISTING)
            .with("committees/1?pageNumber=1", &roster(1, "Anna"));

        let result = build_index(&source).await;
        assert!(matches!(result, Err(AppError::Fetch { .. })));
    }

    #[tokio::test]
    async fn test_listing_failure_skips_rosters() {
        let source = StubSource::new().with("committees?pageNumber=1", "oops");

        assert!(build_index(&source).await.is_err());
        assert_eq!(source.requested(), vec!["committees?pageNumber=1"]);
    }

    #[tokio::test]
    async fn test_empty_listing_builds_empty_populated_index() {
        let source = StubSource::new();

        let index = build_index(&source).await.unwrap();
        assert!(index.is_empty());
        assert!(index.is_populated());
    }
}
