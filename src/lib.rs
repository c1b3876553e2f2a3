// SPDX-License-Identifier: MPL-2.0
//! `pedit` is a tabbed canvas workspace built with the Iced GUI framework.
//!
//! Canvases live in a tab strip that always ends with a "+" tab, each one
//! sized to an aspect ratio preset. The crate also carries Fluent
//! localization, a declarative menu bar and user preferences in TOML.

pub mod app;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod ui;
