// SPDX-License-Identifier: MPL-2.0
//! Cross-page row selection.
//!
//! The [`SelectionModel`] keeps the set of selected artwork identifiers for
//! the whole session. Membership is keyed by identifier, never by row
//! position, so a row shows as selected on whatever page it renders.
//! Pages are not retained here and nothing in this module fetches data.

pub mod calculator;

pub use calculator::{calculate_selected_ids, row_position};

use crate::domain::{ArtworkId, PageNumber, RowsPerPage, SelectionCount};
use std::collections::HashSet;

/// State of the "select all on page" header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelectionState {
    Unchecked,
    Checked,
    /// Some but not all visible rows are selected.
    Indeterminate,
}

/// Session-wide set of selected artworks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    selected: HashSet<ArtworkId>,
}

impl SelectionModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.selected.contains(&id)
    }

    /// Flips the membership of `id`.
    pub fn toggle_selection(&mut self, id: ArtworkId) {
        if !self.selected.remove(&id) {
            self.selected.insert(id);
        }
    }

    /// Deselects every id in `page_ids` if all of them are selected,
    /// otherwise selects all of them.
    ///
    /// The decision is taken once, against the selection as it was before
    /// the call.
    pub fn toggle_all_on_page(&mut self, page_ids: &[ArtworkId]) {
        if self.all_selected(page_ids) {
            for id in page_ids {
                self.selected.remove(id);
            }
        } else {
            self.selected.extend(page_ids.iter().copied());
        }
    }

    /// True when `page_ids` is non-empty and every id in it is selected.
    #[must_use]
    pub fn are_all_selected_on_page(&self, page_ids: &[ArtworkId]) -> bool {
        !page_ids.is_empty() && self.all_selected(page_ids)
    }

    #[must_use]
    pub fn page_state(&self, page_ids: &[ArtworkId]) -> PageSelectionState {
        if self.are_all_selected_on_page(page_ids) {
            PageSelectionState::Checked
        } else if page_ids.iter().any(|id| self.is_selected(*id)) {
            PageSelectionState::Indeterminate
        } else {
            PageSelectionState::Unchecked
        }
    }

    /// Number of selected identifiers across every page visited.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Replaces the whole selection with the first `count` rows.
    ///
    /// The result is absolute, not merged with what was selected before.
    pub fn apply_custom_selection(
        &mut self,
        count: SelectionCount,
        rows_per_page: RowsPerPage,
        current_page: PageNumber,
    ) {
        self.selected = calculate_selected_ids(count, rows_per_page, current_page);
        tracing::debug!(
            count = count.get(),
            rows_per_page = rows_per_page.get(),
            current_page = current_page.get(),
            "applied custom selection"
        );
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Selected identifiers in ascending order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<ArtworkId> {
        let mut ids: Vec<ArtworkId> = self.selected.iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    fn all_selected(&self, page_ids: &[ArtworkId]) -> bool {
        page_ids.iter().all(|id| self.selected.contains(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: impl IntoIterator<Item = u64>) -> Vec<ArtworkId> {
        raw.into_iter().map(ArtworkId::new).collect()
    }

    fn count(n: u32) -> SelectionCount {
        SelectionCount::new(n).expect("non-zero count")
    }

    #[test]
    fn starts_empty() {
        let model = SelectionModel::new();
        assert_eq!(model.selected_count(), 0);
        assert!(!model.is_selected(ArtworkId::new(1)));
    }

    #[test]
    fn toggle_selection_flips_membership() {
        let mut model = SelectionModel::new();
        let id = ArtworkId::new(27992);

        model.toggle_selection(id);
        assert!(model.is_selected(id));

        model.toggle_selection(id);
        assert!(!model.is_selected(id));
        assert_eq!(model, SelectionModel::new());
    }

    #[test]
    fn toggle_all_fills_partially_selected_page() {
        let page = ids(1..=12);
        let mut model = SelectionModel::new();
        for id in &page[..5] {
            model.toggle_selection(*id);
        }
        assert_eq!(model.page_state(&page), PageSelectionState::Indeterminate);

        model.toggle_all_on_page(&page);
        assert_eq!(model.selected_count(), 12);
        assert_eq!(model.page_state(&page), PageSelectionState::Checked);

        model.toggle_all_on_page(&page);
        assert_eq!(model.selected_count(), 0);
        assert_eq!(model.page_state(&page), PageSelectionState::Unchecked);
    }

    #[test]
    fn toggle_all_leaves_other_pages_alone() {
        let mut model = SelectionModel::new();
        model.toggle_selection(ArtworkId::new(900));

        let page = ids([1, 2, 3]);
        model.toggle_all_on_page(&page);
        model.toggle_all_on_page(&page);

        assert_eq!(model.selected_ids(), ids([900]));
    }

    #[test]
    fn empty_page_is_never_all_selected() {
        let mut model = SelectionModel::new();
        model.toggle_selection(ArtworkId::new(1));
        assert!(!model.are_all_selected_on_page(&[]));
        assert_eq!(model.page_state(&[]), PageSelectionState::Unchecked);
    }

    #[test]
    fn custom_selection_replaces_prior_selection() {
        let mut model = SelectionModel::new();
        model.toggle_selection(ArtworkId::new(500));

        model.apply_custom_selection(count(3), RowsPerPage::Twelve, PageNumber::FIRST);

        assert_eq!(model.selected_ids(), ids([1, 2, 3]));
    }

    #[test]
    fn custom_selection_count_ignores_pagination() {
        let mut model = SelectionModel::new();
        model.apply_custom_selection(count(25), RowsPerPage::Twelve, PageNumber::FIRST);
        assert_eq!(model.selected_count(), 25);

        let page_nine = PageNumber::new(9).expect("non-zero page");
        model.apply_custom_selection(count(25), RowsPerPage::FortyEight, page_nine);
        assert_eq!(model.selected_count(), 25);
    }

    #[test]
    fn clear_selection_empties_everything() {
        let mut model = SelectionModel::new();
        model.toggle_all_on_page(&ids(1..=48));
        model.clear_selection();
        assert_eq!(model.selected_count(), 0);
    }

    #[test]
    fn selection_survives_page_swaps() {
        let page_one = ids(1..=12);
        let page_two = ids(13..=24);
        let mut model = SelectionModel::new();

        model.toggle_selection(page_one[2]);
        model.toggle_selection(page_one[6]);
        assert_eq!(model.selected_count(), 2);

        assert!(page_two.iter().all(|id| !model.is_selected(*id)));
        assert!(model.is_selected(ArtworkId::new(3)));
        assert!(model.is_selected(ArtworkId::new(7)));
    }
}
