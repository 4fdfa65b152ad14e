// src/services/details.rs

//! Committee roster service.

use crate::error::{AppError, Result};
use crate::models::CommitteeDetails;
use crate::services::DataSource;

/// Service for fetching a committee's member roster.
///
/// Only the first roster page is requested; rosters are expected to fit on
/// one page.
pub struct DetailFetcher<'a> {
    source: &'a dyn DataSource,
}

impl<'a> DetailFetcher<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    /// Fetch and decode the roster of committee `id`.
    ///
    /// A missing body is an error here, unlike on the listing endpoint.
    pub async fn fetch_details(&self, id: u64) -> Result<CommitteeDetails> {
        let path = format!("committees/{}?pageNumber=1", id);
        let body = self
            .source
            .fetch(&path)
            .await?
            .ok_or_else(|| AppError::fetch(&path, "no content"))?;

        let details: CommitteeDetails = serde_json::from_slice(&body)?;
        log::debug!(
            "committee {} has {} members",
            details.id,
            details.member_count()
        );
        Ok(details)
    }
}
