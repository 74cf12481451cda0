// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `ViewContext`, a `Message` enum, an `Event` enum returned from
//! `update`, and a `view` function.
//!
//! # Components
//!
//! - [`header`] - Heading, selection status, custom selection and clear buttons
//! - [`custom_selection`] - "Select the first N rows" panel and input parsing
//! - [`artwork_table`] - Current page rows, header toggle, loading/empty/error states
//! - [`pagination`] - Range label, page buttons and rows-per-page selector
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (error display)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod artwork_table;
pub mod components;
pub mod custom_selection;
pub mod design_tokens;
pub mod header;
pub mod pagination;
pub mod styles;
pub mod theming;
