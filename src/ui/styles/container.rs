// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn filled(color: Color, text: Color) -> container::Style {
    container::Style {
        background: Some(Background::Color(color)),
        text_color: Some(text),
        ..Default::default()
    }
}

/// Window background behind every pane.
pub fn window(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| filled(scheme.background_deep, scheme.text_primary)
}

pub fn menu_bar(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| filled(scheme.surface, scheme.text_primary)
}

/// Floating list below an open menu title.
pub fn dropdown(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.background_alt)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

pub fn side_pane(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| filled(scheme.surface, scheme.text_primary)
}

/// Solid strip in the border color, used as an edge or divider.
pub fn separator(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| filled(scheme.border, scheme.border)
}

pub fn tab_bar(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| filled(scheme.background_alt, scheme.text_secondary)
}

/// One entry of the tab bar. The selected tab merges with the canvas area
/// below it; a drop target during a drag is outlined in the primary color.
pub fn tab(
    scheme: ColorScheme,
    selected: bool,
    drop_target: bool,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (background, text) = if selected {
            (scheme.background, scheme.text_primary)
        } else {
            (scheme.surface, scheme.text_secondary)
        };
        let outline = if drop_target || selected {
            scheme.primary
        } else {
            scheme.border
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text),
            border: Border {
                color: outline,
                width: if drop_target {
                    border::WIDTH_MD
                } else {
                    border::WIDTH_SM
                },
                radius: radius::NONE.into(),
            },
            ..Default::default()
        }
    }
}

/// Area behind canvases. Canvases leave everything outside their fitted
/// rectangle transparent, so this color shows through.
pub fn image_area(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| filled(scheme.background, scheme.text_secondary)
}

pub fn dialog(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.surface)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Dimmed layer that blocks input below a modal.
pub fn backdrop(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BACKDROP,
            ..scheme.background_deep
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_target_outline_is_primary_and_thicker() {
        let scheme = ColorScheme::dark();
        let target = tab(scheme, false, true)(&Theme::Dark);
        let idle = tab(scheme, false, false)(&Theme::Dark);
        assert_eq!(target.border.color, scheme.primary);
        assert!(target.border.width > idle.border.width);
    }

    #[test]
    fn backdrop_is_translucent() {
        let style = backdrop(ColorScheme::light())(&Theme::Light);
        let Some(Background::Color(color)) = style.background else {
            panic!("backdrop should be a solid color");
        };
        assert!(color.a > 0.0 && color.a < 1.0);
    }
}
