// SPDX-License-Identifier: MPL-2.0
//! Resolves a "select the first N rows" request into identifiers without
//! touching the network.

use crate::domain::{ArtworkId, PageNumber, RowsPerPage, SelectionCount};
use std::collections::HashSet;

/// Returns the identifiers to select for a custom selection of `count` rows.
///
/// Rows are counted from the absolute first row of the result set, whatever
/// page is showing. The row at 0-based position `p` is assumed to carry the
/// identifier `p + 1`, so the result is always `{1, ..., count}`.
///
/// This is an approximation: catalog identifiers are not sequential, so the
/// returned set can name artworks that are not the first `count` rows, or
/// that do not exist at all when `count` exceeds the number of records.
/// Selecting the true leading rows would require fetching pages in order
/// until `count` identifiers are collected. `rows_per_page` and
/// `current_page` are taken for that page-aware strategy and are ignored
/// here.
#[must_use]
pub fn calculate_selected_ids(
    count: SelectionCount,
    _rows_per_page: RowsPerPage,
    _current_page: PageNumber,
) -> HashSet<ArtworkId> {
    (0..u64::from(count.get()))
        .map(|position| ArtworkId::new(position + 1))
        .collect()
}

/// 0-based position of a row within the whole result set.
#[must_use]
pub fn row_position(page: PageNumber, index_in_page: usize, rows_per_page: RowsPerPage) -> u64 {
    u64::from(page.get() - 1) * u64::from(rows_per_page.get()) + index_in_page as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: u32) -> SelectionCount {
        SelectionCount::new(n).expect("non-zero count")
    }

    fn page(n: u32) -> PageNumber {
        PageNumber::new(n).expect("non-zero page")
    }

    #[test]
    fn selects_leading_identifiers() {
        let ids = calculate_selected_ids(count(3), RowsPerPage::Twelve, PageNumber::FIRST);
        let expected: HashSet<ArtworkId> = [1, 2, 3].into_iter().map(ArtworkId::new).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn output_ignores_page_parameters() {
        let baseline = calculate_selected_ids(count(25), RowsPerPage::Twelve, PageNumber::FIRST);
        for rows in RowsPerPage::ALL {
            for current in [1, 2, 7, 400] {
                assert_eq!(calculate_selected_ids(count(25), rows, page(current)), baseline);
            }
        }
        assert_eq!(baseline.len(), 25);
    }

    #[test]
    fn count_beyond_dataset_is_not_clamped() {
        let ids = calculate_selected_ids(count(500), RowsPerPage::FortyEight, page(3));
        assert_eq!(ids.len(), 500);
        assert!(ids.contains(&ArtworkId::new(500)));
        assert!(!ids.contains(&ArtworkId::new(501)));
    }

    #[test]
    fn row_position_counts_from_first_page() {
        assert_eq!(row_position(PageNumber::FIRST, 0, RowsPerPage::Twelve), 0);
        assert_eq!(row_position(page(2), 3, RowsPerPage::Twelve), 15);
        assert_eq!(row_position(page(3), 0, RowsPerPage::FortyEight), 96);
    }
}
