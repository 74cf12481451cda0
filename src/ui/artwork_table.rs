// SPDX-License-Identifier: MPL-2.0
//! Artwork table for the current page.
//!
//! Rows are drawn from the page fetcher's data and checked against the
//! selection model; the table owns no selection state itself. While a page
//! is loading the rows are replaced by a loading line, and a failed fetch
//! replaces the whole table with an error panel.

use crate::domain::{Artwork, ArtworkId, PageNumber, RowsPerPage};
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::selection::{row_position, PageSelectionState, SelectionModel};
use crate::ui::components::error_display::{centered_error_view, ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, checkbox, scrollable, text, Column, Container, Row, Text},
    Element, Length,
};

/// Local state of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    /// Whether the technical details of a fetch error are expanded.
    pub show_error_details: bool,
}

/// Contextual data needed to render the table.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub artworks: Option<&'a [Artwork]>,
    pub page: PageNumber,
    pub rows_per_page: RowsPerPage,
    pub selection: &'a SelectionModel,
    pub loading: bool,
    pub error: Option<&'a FetchError>,
}

/// Messages emitted by the table.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleRow(ArtworkId),
    TogglePage,
    ToggleErrorDetails,
    Retry,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    ToggleRow(ArtworkId),
    TogglePage,
    /// Reload the page whose fetch failed.
    Retry,
}

/// Process a table message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::ToggleRow(id) => Event::ToggleRow(id),
        Message::TogglePage => Event::TogglePage,
        Message::Retry => Event::Retry,
        Message::ToggleErrorDetails => {
            state.show_error_details = !state.show_error_details;
            Event::None
        }
    }
}

/// Localized user-facing text for a fetch error.
#[must_use]
pub fn fetch_error_message(i18n: &I18n, error: &FetchError) -> String {
    match error {
        FetchError::Status(code) => {
            i18n.tr_with_args(error.i18n_key(), &[("status", &code.to_string())])
        }
        _ => i18n.tr(error.i18n_key()),
    }
}

/// Text cells of a row after the checkbox, with localized fallbacks for missing fields.
#[must_use]
pub fn row_cells(i18n: &I18n, artwork: &Artwork) -> [String; 6] {
    let or_fallback = |value: Option<&str>, key: &str| {
        value.map_or_else(|| i18n.tr(key), str::to_string)
    };
    let date = |value: Option<i32>| value.map_or_else(|| i18n.tr("fallback-date"), |y| y.to_string());

    [
        or_fallback(artwork.title(), "fallback-title"),
        or_fallback(artwork.place_of_origin(), "fallback-place-of-origin"),
        or_fallback(artwork.artist_display(), "fallback-artist"),
        or_fallback(artwork.inscriptions(), "fallback-inscriptions"),
        date(artwork.date_start),
        date(artwork.date_end),
    ]
}

/// Glyph drawn for the header toggle; Iced checkboxes have no mixed state.
#[must_use]
pub fn page_state_glyph(state: PageSelectionState) -> &'static str {
    match state {
        PageSelectionState::Unchecked => "☐",
        PageSelectionState::Checked => "☑",
        PageSelectionState::Indeterminate => "⊟",
    }
}

/// Render the table.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    if let Some(error) = ctx.error {
        return error_view(ctx.i18n, ctx.state, error);
    }

    let rows = ctx.artworks.unwrap_or_default();
    let page_ids: Vec<ArtworkId> = rows.iter().map(|a| a.id).collect();
    let header = header_row(
        ctx.i18n,
        ctx.selection.page_state(&page_ids),
        !ctx.loading && !page_ids.is_empty(),
    );

    let body: Element<'a, Message> = if ctx.loading {
        status_line(ctx.i18n.tr("table-loading"))
    } else if rows.is_empty() {
        status_line(ctx.i18n.tr("table-empty"))
    } else {
        let mut column = Column::new().spacing(spacing::XXS);
        for (index, artwork) in rows.iter().enumerate() {
            column = column.push(body_row(
                ctx.i18n,
                artwork,
                ctx.selection.is_selected(artwork.id),
                is_striped(ctx.page, index, ctx.rows_per_page),
            ));
        }
        scrollable(column).height(Length::Fill).into()
    };

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(header)
            .push(body),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .padding(spacing::SM)
    .style(styles::container::panel)
    .into()
}

/// Stripes follow the absolute row position so they stay stable across
/// page sizes.
fn is_striped(page: PageNumber, index_in_page: usize, rows_per_page: RowsPerPage) -> bool {
    row_position(page, index_in_page, rows_per_page) % 2 == 1
}

fn error_view<'a>(i18n: &I18n, state: &State, error: &FetchError) -> Element<'a, Message> {
    centered_error_view(
        ErrorDisplay::new(ErrorSeverity::Error)
            .title(i18n.tr("error-loading-title"))
            .message(fetch_error_message(i18n, error))
            .details(error.to_string())
            .action(i18n.tr("error-retry"), Message::Retry)
            .details_visible(state.show_error_details)
            .details_labels(
                i18n.tr("error-details-show"),
                i18n.tr("error-details-hide"),
                i18n.tr("error-details-heading"),
            )
            .on_toggle_details(Message::ToggleErrorDetails),
    )
}

fn header_row<'a>(
    i18n: &I18n,
    page_state: PageSelectionState,
    enabled: bool,
) -> Element<'a, Message> {
    let toggle = button(Text::new(page_state_glyph(page_state)).size(typography::TITLE_SM))
        .padding(0)
        .style(styles::button::glyph);
    let toggle = if enabled {
        toggle.on_press(Message::TogglePage)
    } else {
        toggle
    };

    let heading = |key: &str| text(i18n.tr(key)).size(typography::BODY);
    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(Container::new(toggle).width(sizing::CHECKBOX_COLUMN))
        .push(heading("column-title").width(Length::FillPortion(3)))
        .push(heading("column-place-of-origin").width(Length::FillPortion(2)))
        .push(heading("column-artist").width(Length::FillPortion(3)))
        .push(heading("column-inscriptions").width(Length::FillPortion(3)))
        .push(heading("column-date-start").width(sizing::DATE_COLUMN))
        .push(heading("column-date-end").width(sizing::DATE_COLUMN));

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::XS])
        .style(styles::container::table_header)
        .into()
}

fn body_row<'a>(
    i18n: &I18n,
    artwork: &Artwork,
    selected: bool,
    striped: bool,
) -> Element<'a, Message> {
    let id = artwork.id;
    let [title, place, artist, inscriptions, start, end] = row_cells(i18n, artwork);
    let cell = |value: String| text(value).size(typography::BODY);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Container::new(checkbox(selected).on_toggle(move |_| Message::ToggleRow(id)))
                .width(sizing::CHECKBOX_COLUMN),
        )
        .push(cell(title).width(Length::FillPortion(3)))
        .push(cell(place).width(Length::FillPortion(2)))
        .push(cell(artist).width(Length::FillPortion(3)))
        .push(cell(inscriptions).width(Length::FillPortion(3)))
        .push(cell(start).width(sizing::DATE_COLUMN))
        .push(cell(end).width(sizing::DATE_COLUMN));

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::table_row(selected, striped))
        .into()
}

fn status_line<'a>(label: String) -> Element<'a, Message> {
    Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .padding(spacing::LG)
        .center_x(Length::Fill)
        .into()
}
