// SPDX-License-Identifier: MPL-2.0
//! Domain layer - catalog records and paging values with no I/O.
//!
//! # Modules
//!
//! - [`artwork`]: Catalog records ([`Artwork`], [`ArtworkId`], [`ArtworkPage`])
//! - [`paging`]: Pagination value objects ([`PageNumber`], [`RowsPerPage`],
//!   [`SelectionCount`]) and derived values ([`total_pages`], [`RowRange`])

pub mod artwork;
pub mod paging;

pub use artwork::{Artwork, ArtworkId, ArtworkPage};
pub use paging::{total_pages, PageNumber, RowRange, RowsPerPage, SelectionCount};
