// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration.

use crate::domain::aspect::{AspectRatio, SQUARE};

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Initial main window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: f32 = 1000.0;

/// Initial main window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;

/// Smallest window that still fits the side pane and a usable canvas area.
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

pub const MIN_WINDOW_HEIGHT: f32 = 480.0;

// ==========================================================================
// Workspace Defaults
// ==========================================================================

/// Ratio used by "New Default Canvas" and preselected in the dialog.
pub const DEFAULT_ASPECT_RATIO: AspectRatio = SQUARE;
