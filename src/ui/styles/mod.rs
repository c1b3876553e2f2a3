// SPDX-License-Identifier: MPL-2.0
//! Widget styles derived from the active [`ColorScheme`](crate::ui::theming::ColorScheme).
//!
//! Each function captures the scheme by value and returns the closure Iced
//! expects, so views never look colors up globally.

pub mod button;
pub mod container;
