// SPDX-License-Identifier: MPL-2.0
//! Button styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn tinted(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Main call to action (dialog "Create").
pub fn primary(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => scheme.info,
            button::Status::Disabled => scheme.surface_light,
            _ => scheme.primary,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.background_deep,
            border: Border {
                color: scheme.primary,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Neutral action with a visible outline.
pub fn secondary(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => scheme.surface_light,
            _ => scheme.background_alt,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.text_primary,
            border: Border {
                color: scheme.border,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless button used for menu titles and entries.
pub fn menu_item(
    scheme: ColorScheme,
    highlighted: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            _ if highlighted => Some(Background::Color(scheme.surface_light)),
            button::Status::Hovered | button::Status::Pressed => {
                Some(Background::Color(tinted(scheme.primary, opacity::HOVER)))
            }
            _ => None,
        };
        let text_color = if matches!(status, button::Status::Disabled) {
            scheme.text_secondary
        } else {
            scheme.text_primary
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Small "×" inside a tab.
pub fn tab_glyph(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, text_color) = match status {
            button::Status::Hovered | button::Status::Pressed => {
                (Some(Background::Color(scheme.surface_light)), scheme.text_primary)
            }
            _ => (None, scheme.text_secondary),
        };
        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Aspect ratio card in the new canvas dialog.
pub fn preview_card(
    scheme: ColorScheme,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (border_color, border_width) = if selected {
            (scheme.primary, border::WIDTH_MD)
        } else if matches!(status, button::Status::Hovered) {
            (scheme.text_secondary, border::WIDTH_SM)
        } else {
            (scheme.border, border::WIDTH_SM)
        };
        let background = if selected {
            tinted(scheme.primary, opacity::HOVER)
        } else {
            scheme.background_alt
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.text_primary,
            border: Border {
                color: border_color,
                width: border_width,
                radius: radius::MD.into(),
            },
            ..button::Style::default()
        }
    }
}
