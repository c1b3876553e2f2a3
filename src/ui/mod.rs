// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Every component follows the Elm-style "state down, messages up" pattern:
//! it renders from borrowed state and a `ViewContext`, and turns its own
//! `Message`s into `Event`s for the application to act on.
//!
//! # Panes and dialogs
//!
//! - [`menu_bar`] - Declarative menu bar with shortcuts and a path registry
//! - [`side_pane`] - Fixed panel summarizing the current canvas
//! - [`image_pane`] - Tabbed canvas workspace
//! - [`new_canvas_dialog`] - Name and aspect ratio form for new canvases
//! - [`about`] - Product and platform information
//!
//! # Shared infrastructure
//!
//! - [`components`] - Reusable pieces (modal overlay)
//! - [`styles`] - Button and container styles
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod about;
pub mod components;
pub mod design_tokens;
pub mod image_pane;
pub mod menu_bar;
pub mod new_canvas_dialog;
pub mod side_pane;
pub mod styles;
pub mod theming;
