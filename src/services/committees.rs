// src/services/committees.rs

//! Committee listing service.
//!
//! Walks the paginated `committees` endpoint until a page comes back empty
//! and keeps only the active committees.

use futures::stream::{self, Stream, TryStreamExt};

use crate::error::{AppError, Result};
use crate::models::Committee;
use crate::services::DataSource;

/// Listing pages are numbered from 1.
const FIRST_PAGE: u32 = 1;

/// Active committees collected from the listing.
#[derive(Debug, Default)]
pub struct Listing {
    /// Active committees in page order
    pub committees: Vec<Committee>,

    /// Non-empty pages walked
    pub pages: usize,
}

/// Service for fetching the committee listing.
pub struct CommitteeFetcher<'a> {
    source: &'a dyn DataSource,
}

impl<'a> CommitteeFetcher<'a> {
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    /// Lazily yield listing pages, one request at a time, until a page has
    /// no content.
    ///
    /// Each call starts over at page 1. The stream ends after the first empty
    /// page and stops at the first error.
    pub fn pages(&self) -> impl Stream<Item = Result<Vec<Committee>>> + '_ {
        stream::try_unfold(FIRST_PAGE, move |page| async move {
            let committees = self.fetch_page(page).await?;
            Ok::<_, AppError>(committees.map(|page_items| (page_items, page + 1)))
        })
    }

    /// Fetch every active committee, in page order.
    pub async fn fetch_all_active(&self) -> Result<Vec<Committee>> {
        Ok(self.fetch_listing().await?.committees)
    }

    /// Fetch every active committee along with the number of pages walked.
    pub async fn fetch_listing(&self) -> Result<Listing> {
        self.pages()
            .try_fold(Listing::default(), |mut listing, page| async move {
                listing.pages += 1;
                listing
                    .committees
                    .extend(page.into_iter().filter(|c| c.is_active));
                Ok(listing)
            })
            .await
    }

    /// Fetch and decode a single listing page.
    ///
    /// `None` means the listing is exhausted: the service answered without
    /// content, with a blank body, with `null`, or with an empty array.
    async fn fetch_page(&self, page: u32) -> Result<Option<Vec<Committee>>> {
        let path = format!("committees?pageNumber={}", page);
        let Some(body) = self.source.fetch(&path).await? else {
            return Ok(None);
        };

        if body.iter().all(u8::is_ascii_whitespace) {
            log::debug!("page {} has an empty body", page);
            return Ok(None);
        }

        // A `null` page ends the listing just like an empty one.
        let committees: Vec<Committee> = serde_json::from_slice::<Option<_>>(&body)?
            .unwrap_or_default();
        if committees.is_empty() {
            return Ok(None);
        }

        log::debug!("page {} listed {} committees", page, committees.len());
        Ok(Some(committees))
    }
}
