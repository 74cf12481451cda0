// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Catalog**: Data source location and page sizing
//! - **Custom selection**: Bounds on the "select first N rows" request

// ==========================================================================
// Catalog Defaults
// ==========================================================================

/// Root of the public catalog API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Rows shown per page when nothing is configured.
pub const DEFAULT_ROWS_PER_PAGE: u32 = 12;

/// Page sizes offered by the selector.
pub const ROWS_PER_PAGE_OPTIONS: [u32; 3] = [12, 24, 48];

// ==========================================================================
// Custom Selection Defaults
// ==========================================================================

/// Placeholder shown in the custom selection input.
pub const CUSTOM_SELECTION_PLACEHOLDER_COUNT: u32 = 25;

/// Largest count accepted by the custom selection input.
///
/// The selection is materialized as one identifier per row, so the count
/// bounds the memory taken by a single request. It is independent of the
/// catalog size: counts above the record total are still accepted.
pub const MAX_CUSTOM_SELECTION: u32 = 100_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_ROWS_PER_PAGE > 0);
    assert!(DEFAULT_ROWS_PER_PAGE == ROWS_PER_PAGE_OPTIONS[0]);
    assert!(ROWS_PER_PAGE_OPTIONS[0] < ROWS_PER_PAGE_OPTIONS[1]);
    assert!(ROWS_PER_PAGE_OPTIONS[1] < ROWS_PER_PAGE_OPTIONS[2]);
    assert!(CUSTOM_SELECTION_PLACEHOLDER_COUNT > 0);
    assert!(CUSTOM_SELECTION_PLACEHOLDER_COUNT <= MAX_CUSTOM_SELECTION);
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RowsPerPage;

    #[test]
    fn rows_per_page_options_match_selector() {
        let selector: Vec<u32> = RowsPerPage::ALL.iter().map(|r| r.get()).collect();
        assert_eq!(selector, ROWS_PER_PAGE_OPTIONS.to_vec());
        assert_eq!(RowsPerPage::default().get(), DEFAULT_ROWS_PER_PAGE);
    }

    #[test]
    fn default_api_base_url_is_https() {
        assert!(DEFAULT_API_BASE_URL.starts_with("https://"));
        assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
    }
}
