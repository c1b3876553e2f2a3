// SPDX-License-Identifier: MPL-2.0
//! Application color schemes.
//!
//! An [`AppTheme`] is built once at startup from the configured
//! [`ThemeMode`] and handed to every view by reference. Nothing mutates it
//! afterwards.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Named colors consumed by all views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub primary: Color,
    pub secondary: Color,

    // Surfaces, darkest to lightest in the dark scheme
    pub background_deep: Color,
    pub background: Color,
    pub surface: Color,
    pub background_alt: Color,
    pub surface_light: Color,

    pub text_primary: Color,
    pub text_secondary: Color,
    pub border: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,

    /// Default fill of a new canvas document.
    pub canvas_fill: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn dark() -> Self {
        use palette::dark::*;

        Self {
            primary: PRIMARY,
            secondary: SECONDARY,
            background_deep: BACKGROUND_DEEP,
            background: BACKGROUND,
            surface: SURFACE,
            background_alt: BACKGROUND_ALT,
            surface_light: SURFACE_LIGHT,
            text_primary: TEXT_PRIMARY,
            text_secondary: TEXT_SECONDARY,
            border: BORDER,
            success: SUCCESS,
            warning: WARNING,
            error: ERROR,
            info: INFO,
            canvas_fill: palette::WHITE,
        }
    }

    #[must_use]
    pub fn light() -> Self {
        use palette::light::*;

        Self {
            primary: PRIMARY,
            secondary: SECONDARY,
            background_deep: BACKGROUND_DEEP,
            background: BACKGROUND,
            surface: SURFACE,
            background_alt: BACKGROUND_ALT,
            surface_light: SURFACE_LIGHT,
            text_primary: TEXT_PRIMARY,
            text_secondary: TEXT_SECONDARY,
            border: BORDER,
            success: SUCCESS,
            warning: WARNING,
            error: ERROR,
            info: INFO,
            canvas_fill: palette::WHITE,
        }
    }

    /// Follows the OS preference, defaulting to dark when detection fails.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
    dark: bool,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let dark = mode.is_dark();
        let colors = if dark {
            ColorScheme::dark()
        } else {
            ColorScheme::light()
        };

        Self { colors, mode, dark }
    }

    /// Built-in Iced theme for widgets that are not styled explicitly.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_scheme_has_dark_background() {
        let scheme = ColorScheme::dark();
        assert!(scheme.background.r < 0.1);
        assert!(scheme.text_primary.r > 0.85);
    }

    #[test]
    fn light_scheme_has_light_background() {
        let scheme = ColorScheme::light();
        assert!(scheme.background.r > 0.95);
        assert!(scheme.text_primary.r < 0.2);
    }

    #[test]
    fn both_schemes_share_blue_primary() {
        for scheme in [ColorScheme::dark(), ColorScheme::light()] {
            assert!(scheme.primary.b > scheme.primary.r);
        }
    }

    #[test]
    fn explicit_modes_pick_matching_iced_theme() {
        assert!(matches!(
            AppTheme::new(ThemeMode::Dark).iced_theme(),
            Theme::Dark
        ));
        assert!(matches!(
            AppTheme::new(ThemeMode::Light).iced_theme(),
            Theme::Light
        ));
        assert_eq!(AppTheme::new(ThemeMode::Light).colors, ColorScheme::light());
        let _ = AppTheme::new(ThemeMode::System);
    }
}
