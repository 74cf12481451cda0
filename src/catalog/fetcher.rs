// SPDX-License-Identifier: MPL-2.0
//! Page fetch state with last-request-wins ordering.
//!
//! The fetcher does not perform I/O itself. [`PageFetcher::begin`] records a
//! new request and hands back a [`PageRequest`] whose ticket travels with the
//! async fetch; [`PageFetcher::complete`] applies the outcome only if that
//! ticket is still the latest one issued. Responses to superseded requests
//! are dropped on arrival.

use crate::domain::{Artwork, ArtworkId, ArtworkPage, PageNumber, RowsPerPage};
use crate::error::FetchError;

/// Identity of one issued page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FetchTicket(u64);

/// A request the caller must execute against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub ticket: FetchTicket,
    pub page: PageNumber,
    pub rows_per_page: RowsPerPage,
}

/// What happened to a completed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request was issued before this one resolved.
    Discarded,
}

/// Loading/error/data/total state of the page currently being shown.
#[derive(Debug, Clone, Default)]
pub struct PageFetcher {
    latest: u64,
    page: PageNumber,
    rows_per_page: RowsPerPage,
    loading: bool,
    error: Option<FetchError>,
    artworks: Option<Vec<Artwork>>,
    total_records: u64,
}

impl PageFetcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a request for `page`, superseding any request in flight.
    pub fn begin(&mut self, page: PageNumber, rows_per_page: RowsPerPage) -> PageRequest {
        self.latest += 1;
        self.page = page;
        self.rows_per_page = rows_per_page;
        self.loading = true;
        self.error = None;

        PageRequest {
            ticket: FetchTicket(self.latest),
            page,
            rows_per_page,
        }
    }

    /// Applies the result of the request identified by `ticket`.
    ///
    /// On failure the visible data is cleared and the error kept; the total
    /// from the last successful fetch is retained so pagination stays usable.
    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        result: Result<ArtworkPage, FetchError>,
    ) -> FetchOutcome {
        if ticket.0 != self.latest {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest,
                "discarding stale page response"
            );
            return FetchOutcome::Discarded;
        }

        self.loading = false;
        match result {
            Ok(page) => {
                tracing::info!(
                    page = self.page.get(),
                    rows = page.artworks.len(),
                    total = page.total_records,
                    "artworks page loaded"
                );
                self.total_records = page.total_records;
                self.artworks = Some(page.artworks);
                self.error = None;
            }
            Err(err) => {
                tracing::warn!(page = self.page.get(), error = %err, "artworks page failed");
                self.artworks = None;
                self.error = Some(err);
            }
        }
        FetchOutcome::Applied
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Rows of the current page, or `None` before the first load and after a failure.
    #[must_use]
    pub fn artworks(&self) -> Option<&[Artwork]> {
        self.artworks.as_deref()
    }

    /// Identifiers of the rows currently shown, in display order.
    #[must_use]
    pub fn page_ids(&self) -> Vec<ArtworkId> {
        self.artworks()
            .map(|rows| rows.iter().map(|a| a.id).collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    /// Page of the most recently issued request.
    #[must_use]
    pub fn page(&self) -> PageNumber {
        self.page
    }

    #[must_use]
    pub fn rows_per_page(&self) -> RowsPerPage {
        self.rows_per_page
    }
}
