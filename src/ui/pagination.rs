// SPDX-License-Identifier: MPL-2.0
//! Pagination bar below the table.
//!
//! Shows the visible row range, first/previous/next/last buttons, a window of
//! at most five numbered page buttons and the rows-per-page selector. Every
//! control is disabled while a page is loading. After a failed fetch the
//! current page button stays pressable so the page can be requested again.

use crate::domain::{total_pages, PageNumber, RowRange, RowsPerPage};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, pick_list, text, Row, Space, Text},
    Element, Length,
};

/// Number of numbered page buttons shown at once.
pub const PAGE_WINDOW: u32 = 5;

/// Contextual data needed to render the pagination bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: PageNumber,
    pub rows_per_page: RowsPerPage,
    pub total_records: u64,
    pub loading: bool,
    /// The latest fetch failed.
    pub failed: bool,
}

/// Messages emitted by the pagination bar.
#[derive(Debug, Clone)]
pub enum Message {
    First,
    Previous,
    Next,
    Last,
    GoTo(PageNumber),
    RowsPerPageSelected(RowsPerPage),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    NavigateTo(PageNumber),
    RowsPerPageChanged(RowsPerPage),
}

/// Resolves a pagination message against the current page and page count.
///
/// Targets outside `1..=total_pages`, the current page itself and an
/// unchanged rows-per-page choice produce [`Event::None`].
pub fn update(
    message: Message,
    page: PageNumber,
    total_pages: u32,
    rows_per_page: RowsPerPage,
) -> Event {
    let target = match message {
        Message::RowsPerPageSelected(rows) if rows != rows_per_page => {
            return Event::RowsPerPageChanged(rows);
        }
        Message::RowsPerPageSelected(_) => return Event::None,
        Message::First => Some(PageNumber::FIRST),
        Message::Previous => page.previous(),
        Message::Next => Some(page.next()),
        Message::Last => PageNumber::new(total_pages),
        Message::GoTo(target) => Some(target),
    };

    match target {
        Some(target) if target != page && target.get() <= total_pages => {
            Event::NavigateTo(target)
        }
        _ => Event::None,
    }
}

/// Page numbers to offer as direct buttons.
///
/// All pages when there are at most five; otherwise a five-page window that
/// starts at 1 near the beginning, ends at the last page near the end, and is
/// centered on the current page in between.
#[must_use]
pub fn visible_page_numbers(current: PageNumber, total_pages: u32) -> Vec<PageNumber> {
    let current = current.get();
    let (start, end) = if total_pages <= PAGE_WINDOW {
        (1, total_pages)
    } else if current <= 3 {
        (1, PAGE_WINDOW)
    } else if current >= total_pages - 2 {
        (total_pages - PAGE_WINDOW + 1, total_pages)
    } else {
        (current - 2, current + 2)
    };
    (start..=end).filter_map(PageNumber::new).collect()
}

/// Page count used to lay out the numbered buttons.
///
/// After a failure the current page is always included, even when no total
/// has been received yet.
#[must_use]
pub fn displayed_page_count(page: PageNumber, total_pages: u32, failed: bool) -> u32 {
    if failed {
        total_pages.max(page.get())
    } else {
        total_pages
    }
}

/// "Showing {from} to {to} of {total} artworks", or nothing for an empty catalog.
#[must_use]
pub fn range_label(
    i18n: &I18n,
    page: PageNumber,
    rows_per_page: RowsPerPage,
    total_records: u64,
) -> Option<String> {
    if total_records == 0 {
        return None;
    }
    let range = RowRange::for_page(page, rows_per_page, total_records);
    Some(i18n.tr_with_args(
        "pagination-range",
        &[
            ("from", &range.first.to_string()),
            ("to", &range.last.to_string()),
            ("total", &total_records.to_string()),
        ],
    ))
}

/// Render the pagination bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let page = ctx.page;
    let pages = displayed_page_count(
        page,
        total_pages(ctx.total_records, ctx.rows_per_page),
        ctx.failed,
    );
    let enabled = !ctx.loading;

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::SM])
        .align_y(Vertical::Center);

    if let Some(label) = range_label(ctx.i18n, page, ctx.rows_per_page, ctx.total_records) {
        row = row.push(Text::new(label).size(typography::CAPTION));
    }
    row = row.push(Space::new().width(Length::Fill));

    row = row
        .push(nav_button(
            ctx.i18n.tr("pagination-first"),
            Message::First,
            enabled && !page.is_first(),
        ))
        .push(nav_button(
            ctx.i18n.tr("pagination-previous"),
            Message::Previous,
            enabled && !page.is_first(),
        ));

    for number in visible_page_numbers(page, pages) {
        let current = number == page;
        row = row.push(page_button(number, current, enabled && (!current || ctx.failed)));
    }

    let has_next = page.get() < pages;
    row = row
        .push(nav_button(
            ctx.i18n.tr("pagination-next"),
            Message::Next,
            enabled && has_next,
        ))
        .push(nav_button(
            ctx.i18n.tr("pagination-last"),
            Message::Last,
            enabled && has_next,
        ));

    let selector = pick_list(
        &RowsPerPage::ALL[..],
        Some(ctx.rows_per_page),
        Message::RowsPerPageSelected,
    )
    .text_size(typography::BODY);
    // pick_list has no disabled state; a plain label stands in while loading.
    let selector: Element<'a, Message> = if enabled {
        selector.into()
    } else {
        text(ctx.rows_per_page.to_string())
            .size(typography::BODY)
            .into()
    };

    row.push(Space::new().width(spacing::MD))
        .push(Text::new(ctx.i18n.tr("pagination-rows-per-page")).size(typography::CAPTION))
        .push(selector)
        .into()
}

fn nav_button<'a>(label: String, message: Message, enabled: bool) -> Element<'a, Message> {
    let btn = button(Text::new(label).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);
    if enabled {
        btn.on_press(message).into()
    } else {
        btn.into()
    }
}

fn page_button<'a>(number: PageNumber, current: bool, pressable: bool) -> Element<'a, Message> {
    let btn = button(
        Text::new(number.to_string())
            .size(typography::BODY)
            .width(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center),
    )
    .width(sizing::PAGE_BUTTON_WIDTH)
    .padding([spacing::XXS, spacing::XS])
    .style(if current {
        styles::button::primary
    } else {
        styles::button::secondary
    });
    if pressable {
        btn.on_press(Message::GoTo(number)).into()
    } else {
        btn.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: u32) -> PageNumber {
        PageNumber::new(n).expect("non-zero page")
    }

    fn numbers(current: u32, total: u32) -> Vec<u32> {
        visible_page_numbers(page(current), total)
            .into_iter()
            .map(PageNumber::get)
            .collect()
    }

    #[test]
    fn window_shows_all_pages_when_few() {
        assert_eq!(numbers(1, 0), Vec::<u32>::new());
        assert_eq!(numbers(1, 1), vec![1]);
        assert_eq!(numbers(2, 5), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_starts_at_first_page_near_beginning() {
        assert_eq!(numbers(1, 20), vec![1, 2, 3, 4, 5]);
        assert_eq!(numbers(3, 20), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn window_ends_at_last_page_near_end() {
        assert_eq!(numbers(18, 20), vec![16, 17, 18, 19, 20]);
        assert_eq!(numbers(20, 20), vec![16, 17, 18, 19, 20]);
    }

    #[test]
    fn window_centers_on_current_page() {
        assert_eq!(numbers(4, 20), vec![2, 3, 4, 5, 6]);
        assert_eq!(numbers(10, 20), vec![8, 9, 10, 11, 12]);
        assert_eq!(numbers(17, 20), vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn navigation_stays_within_bounds() {
        let rows = RowsPerPage::Twelve;
        assert_eq!(update(Message::Previous, page(1), 10, rows), Event::None);
        assert_eq!(update(Message::First, page(1), 10, rows), Event::None);
        assert_eq!(update(Message::Next, page(10), 10, rows), Event::None);
        assert_eq!(update(Message::GoTo(page(11)), page(1), 10, rows), Event::None);
        assert_eq!(update(Message::Last, page(1), 0, rows), Event::None);
    }

    #[test]
    fn navigation_targets_expected_pages() {
        let rows = RowsPerPage::Twelve;
        assert_eq!(
            update(Message::Next, page(2), 10, rows),
            Event::NavigateTo(page(3))
        );
        assert_eq!(
            update(Message::Previous, page(2), 10, rows),
            Event::NavigateTo(page(1))
        );
        assert_eq!(
            update(Message::Last, page(2), 10, rows),
            Event::NavigateTo(page(10))
        );
        assert_eq!(
            update(Message::First, page(7), 10, rows),
            Event::NavigateTo(page(1))
        );
        assert_eq!(
            update(Message::GoTo(page(5)), page(2), 10, rows),
            Event::NavigateTo(page(5))
        );
    }

    #[test]
    fn rows_per_page_change_is_reported_once() {
        assert_eq!(
            update(
                Message::RowsPerPageSelected(RowsPerPage::FortyEight),
                page(3),
                10,
                RowsPerPage::Twelve
            ),
            Event::RowsPerPageChanged(RowsPerPage::FortyEight)
        );
        assert_eq!(
            update(
                Message::RowsPerPageSelected(RowsPerPage::Twelve),
                page(3),
                10,
                RowsPerPage::Twelve
            ),
            Event::None
        );
    }

    #[test]
    fn range_label_clamps_to_total() {
        let i18n = I18n::new(Some("en-US".into()), &Default::default());
        assert_eq!(
            range_label(&i18n, page(1), RowsPerPage::Twelve, 100).as_deref(),
            Some("Showing 1 to 12 of 100 artworks")
        );
        assert_eq!(
            range_label(&i18n, page(9), RowsPerPage::Twelve, 100).as_deref(),
            Some("Showing 97 to 100 of 100 artworks")
        );
        assert!(range_label(&i18n, page(1), RowsPerPage::Twelve, 0).is_none());
    }

    #[test]
    fn pagination_view_renders_while_loading() {
        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            page: page(4),
            rows_per_page: RowsPerPage::TwentyFour,
            total_records: 1000,
            loading: true,
            failed: false,
        });
    }

    #[test]
    fn failed_first_load_still_offers_the_current_page() {
        assert_eq!(displayed_page_count(page(1), 0, true), 1);
        assert_eq!(displayed_page_count(page(1), 0, false), 0);
        assert_eq!(displayed_page_count(page(3), 10, true), 10);
        assert_eq!(
            visible_page_numbers(page(1), displayed_page_count(page(1), 0, true)),
            vec![page(1)]
        );

        let i18n = I18n::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            page: page(1),
            rows_per_page: RowsPerPage::Twelve,
            total_records: 0,
            loading: false,
            failed: true,
        });
    }
}
