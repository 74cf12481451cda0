// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and startup flags.

use crate::catalog::FetchTicket;
use crate::domain::ArtworkPage;
use crate::error::FetchError;
use crate::ui::{artwork_table, custom_selection, header, pagination};

/// Messages handled by [`super::App::update`].
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    CustomSelection(custom_selection::Message),
    Table(artwork_table::Message),
    Pagination(pagination::Message),
    /// A page request finished. Applied only if `ticket` is still the latest.
    PageLoaded {
        ticket: FetchTicket,
        result: Result<ArtworkPage, FetchError>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ARTWORK_PICKER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional catalog API root; overrides `[catalog] api_base_url` for this run.
    pub api_base_url: Option<String>,
}
