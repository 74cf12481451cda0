// SPDX-License-Identifier: MPL-2.0
//! Shared style functions for buttons and containers.

pub mod button;
pub mod container;
