// SPDX-License-Identifier: MPL-2.0
//! `artwork_picker` is a desktop browser for a public artwork catalog built
//! with the Iced GUI framework.
//!
//! It pages through the catalog in a table and keeps a selection of rows
//! that survives page navigation, including a "select the first N rows"
//! shortcut spanning page boundaries.

#![doc(html_root_url = "https://docs.rs/artwork_picker/0.1.0")]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod selection;
pub mod ui;
