// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the page fetcher, the selection model and the UI
//! component states, and translates messages into fetch tasks, selection
//! changes and config writes.

pub mod config;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{CatalogClient, PageFetcher};
use crate::domain::{PageNumber, RowsPerPage};
use crate::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::selection::SelectionModel;
use crate::ui::theming::ThemeMode;
use crate::ui::{artwork_table, custom_selection};
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    client: Result<CatalogClient, FetchError>,
    fetcher: PageFetcher,
    selection: SelectionModel,
    page: PageNumber,
    rows_per_page: RowsPerPage,
    custom_selection: custom_selection::State,
    table: artwork_table::State,
    theme_mode: ThemeMode,
    config: config::Config,
    /// Where rows-per-page changes are written; `None` disables saving.
    config_path: Option<PathBuf>,
    /// i18n key of a config loading problem shown above the table.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("page", &self.page)
            .field("rows_per_page", &self.rows_per_page)
            .field("loading", &self.fetcher.is_loading())
            .field("selected", &self.selection.selected_count())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1180;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 820;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = config::Config::default();
        Self {
            i18n: I18n::default(),
            client: CatalogClient::new(config.catalog.api_base_url()),
            fetcher: PageFetcher::new(),
            selection: SelectionModel::new(),
            page: PageNumber::FIRST,
            rows_per_page: config.catalog.rows_per_page(),
            custom_selection: custom_selection::State::default(),
            table: artwork_table::State::default(),
            theme_mode: config.general.theme_mode,
            config,
            config_path: None,
            config_warning: None,
        }
    }
}

impl App {
    /// Initializes application state from config and flags, then requests
    /// the first page.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        if let Some(key) = &config_warning {
            tracing::warn!(key = %key, "using default configuration");
        }
        let i18n = I18n::new(flags.lang.clone(), &config);

        let base_url = flags
            .api_base_url
            .as_deref()
            .unwrap_or_else(|| config.catalog.api_base_url());
        let client = CatalogClient::new(base_url);
        match &client {
            Ok(client) => tracing::info!(base_url = %client.base_url(), "catalog client ready"),
            Err(err) => tracing::error!(base_url, error = %err, "catalog client unavailable"),
        }

        // A file that failed to load is left untouched.
        let config_path = if config_warning.is_none() {
            config::config_path_with_override(None)
        } else {
            None
        };

        let mut app = App {
            i18n,
            client,
            rows_per_page: config.catalog.rows_per_page(),
            theme_mode: config.general.theme_mode,
            config,
            config_path,
            config_warning,
            ..Self::default()
        };

        let task = app.request_page(PageNumber::FIRST);
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            client: &self.client,
            fetcher: &mut self.fetcher,
            selection: &mut self.selection,
            page: &mut self.page,
            rows_per_page: &mut self.rows_per_page,
            custom_selection: &mut self.custom_selection,
            table: &mut self.table,
            config: &mut self.config,
            config_path: self.config_path.as_ref(),
        }
    }

    fn request_page(&mut self, page: PageNumber) -> Task<Message> {
        update::request_page(&mut self.update_context(), page)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = self.update_context();

        match message {
            Message::Header(msg) => update::handle_header_message(&mut ctx, msg),
            Message::CustomSelection(msg) => {
                update::handle_custom_selection_message(&mut ctx, msg)
            }
            Message::Table(msg) => update::handle_table_message(&mut ctx, msg),
            Message::Pagination(msg) => update::handle_pagination_message(&mut ctx, msg),
            Message::PageLoaded { ticket, result } => {
                update::handle_page_loaded(&mut ctx, ticket, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            fetcher: &self.fetcher,
            selection: &self.selection,
            page: self.page,
            rows_per_page: self.rows_per_page,
            custom_selection: &self.custom_selection,
            table: &self.table,
            config_warning: self.config_warning.as_deref(),
        })
    }
}
