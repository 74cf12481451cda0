// SPDX-License-Identifier: MPL-2.0
//! Access to the artwork catalog.
//!
//! - [`client`]: reqwest-based adapter for the paged `/artworks` endpoint
//! - [`fetcher`]: loading/error/data state of the page on screen, with
//!   stale responses discarded by ticket

pub mod client;
pub mod fetcher;

pub use client::{parse_page_response, CatalogClient, ARTWORK_FIELDS};
pub use fetcher::{FetchOutcome, FetchTicket, PageFetcher, PageRequest};
