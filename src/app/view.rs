// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::catalog::PageFetcher;
use crate::domain::{PageNumber, RowsPerPage};
use crate::i18n::fluent::I18n;
use crate::selection::SelectionModel;
use crate::ui::components::error_display::{ErrorDisplay, ErrorSeverity};
use crate::ui::design_tokens::spacing;
use crate::ui::{artwork_table, custom_selection, header, pagination};
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub fetcher: &'a PageFetcher,
    pub selection: &'a SelectionModel,
    pub page: PageNumber,
    pub rows_per_page: RowsPerPage,
    pub custom_selection: &'a custom_selection::State,
    pub table: &'a artwork_table::State,
    pub config_warning: Option<&'a str>,
}

/// Renders the window: header, optional panels, table and pagination.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let loading = ctx.fetcher.is_loading();

    let mut column = Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(
            header::view(header::ViewContext {
                i18n: ctx.i18n,
                selected_count: ctx.selection.selected_count(),
                custom_selection_open: ctx.custom_selection.open,
            })
            .map(Message::Header),
        );

    if let Some(panel) = custom_selection::view(custom_selection::ViewContext {
        i18n: ctx.i18n,
        state: ctx.custom_selection,
    }) {
        column = column.push(panel.map(Message::CustomSelection));
    }

    if let Some(key) = ctx.config_warning {
        column = column.push(
            ErrorDisplay::<Message>::new(ErrorSeverity::Warning)
                .message(ctx.i18n.tr(key))
                .view(),
        );
    }

    column = column
        .push(
            artwork_table::view(artwork_table::ViewContext {
                i18n: ctx.i18n,
                state: ctx.table,
                artworks: ctx.fetcher.artworks(),
                page: ctx.page,
                rows_per_page: ctx.rows_per_page,
                selection: ctx.selection,
                loading,
                error: ctx.fetcher.error(),
            })
            .map(Message::Table),
        )
        .push(
            pagination::view(pagination::ViewContext {
                i18n: ctx.i18n,
                page: ctx.page,
                rows_per_page: ctx.rows_per_page,
                total_records: ctx.fetcher.total_records(),
                loading,
                failed: ctx.fetcher.error().is_some(),
            })
            .map(Message::Pagination),
        );

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::SM)
        .into()
}
