// SPDX-License-Identifier: MPL-2.0
//! Localization using the Fluent system.
//!
//! Translations live in `assets/i18n/<locale>.ftl` and are embedded into the
//! binary. The active locale is chosen from the CLI, the config file, or the
//! OS, falling back to `en-US`.

pub mod fluent;

pub use fluent::I18n;
