// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.
//!
//! # Components
//!
//! - [`error_display`] - Error presentation with severity color, optional
//!   action and expandable technical details

pub mod error_display;
