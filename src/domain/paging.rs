// SPDX-License-Identifier: MPL-2.0
//! Paging newtypes.
//!
//! Type-safe wrappers for the pagination values the table works with,
//! so that page 0, a row count of zero or an unsupported page size cannot
//! reach the selection core or the catalog client.

use std::fmt;
use std::num::NonZeroU32;

// =============================================================================
// PageNumber
// =============================================================================

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a page number, returning `None` for 0.
    #[must_use]
    pub fn new(page: u32) -> Option<Self> {
        NonZeroU32::new(page).map(Self)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The previous page, or `None` on the first page.
    #[must_use]
    pub fn previous(self) -> Option<Self> {
        Self::new(self.get() - 1)
    }

    /// The next page (saturating at `u32::MAX`).
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    #[must_use]
    pub fn is_first(self) -> bool {
        self == Self::FIRST
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// RowsPerPage
// =============================================================================

/// Page sizes offered by the rows-per-page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RowsPerPage {
    #[default]
    Twelve,
    TwentyFour,
    FortyEight,
}

impl RowsPerPage {
    /// Every supported size, in selector order.
    pub const ALL: [RowsPerPage; 3] = [
        RowsPerPage::Twelve,
        RowsPerPage::TwentyFour,
        RowsPerPage::FortyEight,
    ];

    #[must_use]
    pub fn get(self) -> u32 {
        match self {
            RowsPerPage::Twelve => 12,
            RowsPerPage::TwentyFour => 24,
            RowsPerPage::FortyEight => 48,
        }
    }

    /// Maps a raw count back to a supported size.
    #[must_use]
    pub fn from_count(count: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|rows| rows.get() == count)
    }
}

impl fmt::Display for RowsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

// =============================================================================
// SelectionCount
// =============================================================================

/// Number of leading rows requested by a custom selection. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SelectionCount(NonZeroU32);

impl SelectionCount {
    #[must_use]
    pub fn new(count: u32) -> Option<Self> {
        NonZeroU32::new(count).map(Self)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for SelectionCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Derived pagination values
// =============================================================================

/// Number of pages needed to show `total_records` rows.
#[must_use]
pub fn total_pages(total_records: u64, rows_per_page: RowsPerPage) -> u32 {
    let pages = total_records.div_ceil(u64::from(rows_per_page.get()));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// 1-based, inclusive range of rows shown on a page.
///
/// `first` may exceed `last` when the page lies past the end of the result
/// set (for instance while the total is still unknown).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    pub first: u64,
    pub last: u64,
}

impl RowRange {
    #[must_use]
    pub fn for_page(page: PageNumber, rows_per_page: RowsPerPage, total_records: u64) -> Self {
        let rows = u64::from(rows_per_page.get());
        let page = u64::from(page.get());
        Self {
            first: (page - 1) * rows + 1,
            last: (page * rows).min(total_records),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_zero_is_rejected() {
        assert!(PageNumber::new(0).is_none());
        assert_eq!(PageNumber::new(3).map(PageNumber::get), Some(3));
    }

    #[test]
    fn first_page_has_no_previous() {
        assert!(PageNumber::FIRST.previous().is_none());
        assert_eq!(PageNumber::FIRST.next().get(), 2);
        assert_eq!(PageNumber::new(5).and_then(PageNumber::previous).map(PageNumber::get), Some(4));
    }

    #[test]
    fn rows_per_page_round_trips_supported_counts() {
        for rows in RowsPerPage::ALL {
            assert_eq!(RowsPerPage::from_count(rows.get()), Some(rows));
        }
        assert_eq!(RowsPerPage::from_count(10), None);
        assert_eq!(RowsPerPage::default().get(), 12);
    }

    #[test]
    fn selection_count_rejects_zero() {
        assert!(SelectionCount::new(0).is_none());
        assert_eq!(SelectionCount::new(25).map(SelectionCount::get), Some(25));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, RowsPerPage::Twelve), 0);
        assert_eq!(total_pages(12, RowsPerPage::Twelve), 1);
        assert_eq!(total_pages(13, RowsPerPage::Twelve), 2);
        assert_eq!(total_pages(125_000, RowsPerPage::FortyEight), 2605);
    }

    #[test]
    fn row_range_clamps_last_to_total() {
        let page = PageNumber::new(3).unwrap();
        let range = RowRange::for_page(page, RowsPerPage::Twelve, 30);
        assert_eq!(range, RowRange { first: 25, last: 30 });

        let full = RowRange::for_page(PageNumber::FIRST, RowsPerPage::TwentyFour, 1000);
        assert_eq!(full, RowRange { first: 1, last: 24 });
    }
}
