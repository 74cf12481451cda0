// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Each handler works on an [`UpdateContext`] borrowed from the `App`, so the
//! selection model, the page fetcher and the component states are mutated in
//! one place.

use super::{config, Message};
use crate::catalog::{CatalogClient, FetchOutcome, FetchTicket, PageFetcher};
use crate::domain::{total_pages, ArtworkPage, PageNumber, RowsPerPage};
use crate::error::FetchError;
use crate::selection::SelectionModel;
use crate::ui::artwork_table::{self, Event as TableEvent};
use crate::ui::custom_selection::{self, Event as CustomSelectionEvent};
use crate::ui::header::{self, Event as HeaderEvent};
use crate::ui::pagination::{self, Event as PaginationEvent};
use iced::Task;
use std::path::PathBuf;

/// Mutable view of the application state for one `update` call.
pub struct UpdateContext<'a> {
    pub client: &'a Result<CatalogClient, FetchError>,
    pub fetcher: &'a mut PageFetcher,
    pub selection: &'a mut SelectionModel,
    pub page: &'a mut PageNumber,
    pub rows_per_page: &'a mut RowsPerPage,
    pub custom_selection: &'a mut custom_selection::State,
    pub table: &'a mut artwork_table::State,
    pub config: &'a mut config::Config,
    pub config_path: Option<&'a PathBuf>,
}

/// Issues a request for `page`, superseding whatever is in flight.
pub fn request_page(ctx: &mut UpdateContext<'_>, page: PageNumber) -> Task<Message> {
    *ctx.page = page;
    let request = ctx.fetcher.begin(page, *ctx.rows_per_page);
    tracing::debug!(
        page = page.get(),
        rows_per_page = ctx.rows_per_page.get(),
        "page requested"
    );

    match ctx.client {
        Ok(client) => {
            let client = client.clone();
            Task::perform(
                async move { client.fetch_page(request.page, request.rows_per_page).await },
                move |result| Message::PageLoaded {
                    ticket: request.ticket,
                    result,
                },
            )
        }
        Err(err) => {
            // No usable client: surface the configuration problem as a fetch error.
            ctx.fetcher.complete(request.ticket, Err(err.clone()));
            Task::none()
        }
    }
}

/// Handles header messages.
pub fn handle_header_message(ctx: &mut UpdateContext<'_>, message: header::Message) -> Task<Message> {
    match header::update(message) {
        HeaderEvent::ToggleCustomSelection => custom_selection::toggle(ctx.custom_selection),
        HeaderEvent::ClearSelection => {
            tracing::info!(cleared = ctx.selection.selected_count(), "selection cleared");
            ctx.selection.clear_selection();
        }
    }
    Task::none()
}

/// Handles custom selection panel messages.
pub fn handle_custom_selection_message(
    ctx: &mut UpdateContext<'_>,
    message: custom_selection::Message,
) -> Task<Message> {
    match custom_selection::update(ctx.custom_selection, message) {
        CustomSelectionEvent::Apply(count) => {
            ctx.selection
                .apply_custom_selection(count, *ctx.rows_per_page, *ctx.page);
            tracing::info!(
                selected = ctx.selection.selected_count(),
                "custom selection applied"
            );
        }
        CustomSelectionEvent::None => {}
    }
    Task::none()
}

/// Handles table messages.
pub fn handle_table_message(
    ctx: &mut UpdateContext<'_>,
    message: artwork_table::Message,
) -> Task<Message> {
    match artwork_table::update(ctx.table, message) {
        TableEvent::ToggleRow(id) => ctx.selection.toggle_selection(id),
        // The header toggle is disabled while loading; the rows on record
        // then belong to the previous page.
        TableEvent::TogglePage if ctx.fetcher.is_loading() => {}
        TableEvent::TogglePage => {
            let ids = ctx.fetcher.page_ids();
            ctx.selection.toggle_all_on_page(&ids);
            tracing::debug!(
                rows = ids.len(),
                selected = ctx.selection.selected_count(),
                "page selection toggled"
            );
        }
        TableEvent::Retry if ctx.fetcher.is_loading() => {}
        TableEvent::Retry => {
            tracing::info!(page = ctx.page.get(), "retrying page");
            let page = *ctx.page;
            return request_page(ctx, page);
        }
        TableEvent::None => {}
    }
    Task::none()
}

/// Handles pagination messages. Ignored while a page is loading.
pub fn handle_pagination_message(
    ctx: &mut UpdateContext<'_>,
    message: pagination::Message,
) -> Task<Message> {
    if ctx.fetcher.is_loading() {
        return Task::none();
    }

    let navigation = !matches!(message, pagination::Message::RowsPerPageSelected(_));
    let pages = total_pages(ctx.fetcher.total_records(), *ctx.rows_per_page);
    match pagination::update(message, *ctx.page, pages, *ctx.rows_per_page) {
        PaginationEvent::NavigateTo(page) => request_page(ctx, page),
        // After a failed fetch any navigation retries. Without a known total
        // every target is out of range, so the current page is reloaded.
        PaginationEvent::None if navigation && ctx.fetcher.error().is_some() => {
            let page = *ctx.page;
            request_page(ctx, page)
        }
        PaginationEvent::RowsPerPageChanged(rows) => {
            *ctx.rows_per_page = rows;
            persist_rows_per_page(ctx, rows);
            request_page(ctx, PageNumber::FIRST)
        }
        PaginationEvent::None => Task::none(),
    }
}

/// Applies a finished page request.
pub fn handle_page_loaded(
    ctx: &mut UpdateContext<'_>,
    ticket: FetchTicket,
    result: Result<ArtworkPage, FetchError>,
) -> Task<Message> {
    if ctx.fetcher.complete(ticket, result) == FetchOutcome::Applied {
        *ctx.table = artwork_table::State::default();
    }
    Task::none()
}

fn persist_rows_per_page(ctx: &mut UpdateContext<'_>, rows: RowsPerPage) {
    ctx.config.catalog.rows_per_page = Some(rows.get());
    let Some(path) = ctx.config_path else {
        return;
    };
    if let Err(err) = config::save_to_path(ctx.config, path) {
        tracing::warn!(path = %path.display(), error = %err, "could not save rows per page");
    }
}
