// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Named constants shared by every view.

## Organization

- **Palette**: Base colors for the dark and light schemes
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Fixed component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use pedit::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::dark::BACKGROUND_DEEP
};
let padding = spacing::MD;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Dark scheme, the default.
    pub mod dark {
        use iced::Color;

        pub const PRIMARY: Color = Color::from_rgb8(0x58, 0xa6, 0xff);
        pub const SECONDARY: Color = Color::from_rgb8(0x56, 0xd3, 0x64);
        pub const BACKGROUND: Color = Color::from_rgb8(0x0d, 0x11, 0x17);
        pub const SURFACE: Color = Color::from_rgb8(0x16, 0x1b, 0x22);
        pub const BACKGROUND_ALT: Color = Color::from_rgb8(0x1c, 0x21, 0x28);
        pub const SURFACE_LIGHT: Color = Color::from_rgb8(0x21, 0x26, 0x2d);
        pub const BACKGROUND_DEEP: Color = Color::from_rgb8(0x01, 0x04, 0x09);
        pub const TEXT_PRIMARY: Color = Color::from_rgb8(0xe6, 0xed, 0xf3);
        pub const TEXT_SECONDARY: Color = Color::from_rgb8(0x7d, 0x85, 0x90);
        pub const BORDER: Color = Color::from_rgb8(0x30, 0x36, 0x3d);
        pub const SUCCESS: Color = Color::from_rgb8(0x56, 0xd3, 0x64);
        pub const WARNING: Color = Color::from_rgb8(0xe3, 0xb3, 0x41);
        pub const ERROR: Color = Color::from_rgb8(0xf8, 0x51, 0x49);
        pub const INFO: Color = Color::from_rgb8(0x58, 0xa6, 0xff);
    }

    pub mod light {
        use iced::Color;

        pub const PRIMARY: Color = Color::from_rgb8(0x09, 0x69, 0xda);
        pub const SECONDARY: Color = Color::from_rgb8(0x1a, 0x7f, 0x37);
        pub const BACKGROUND: Color = Color::from_rgb8(0xff, 0xff, 0xff);
        pub const SURFACE: Color = Color::from_rgb8(0xf6, 0xf8, 0xfa);
        pub const BACKGROUND_ALT: Color = Color::from_rgb8(0xea, 0xee, 0xf2);
        pub const SURFACE_LIGHT: Color = Color::from_rgb8(0xee, 0xf1, 0xf4);
        pub const BACKGROUND_DEEP: Color = Color::from_rgb8(0xd8, 0xde, 0xe4);
        pub const TEXT_PRIMARY: Color = Color::from_rgb8(0x1f, 0x23, 0x28);
        pub const TEXT_SECONDARY: Color = Color::from_rgb8(0x65, 0x6d, 0x76);
        pub const BORDER: Color = Color::from_rgb8(0xd0, 0xd7, 0xde);
        pub const SUCCESS: Color = Color::from_rgb8(0x1a, 0x7f, 0x37);
        pub const WARNING: Color = Color::from_rgb8(0x9a, 0x67, 0x00);
        pub const ERROR: Color = Color::from_rgb8(0xd1, 0x24, 0x2f);
        pub const INFO: Color = Color::from_rgb8(0x09, 0x69, 0xda);
    }
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const HOVER: f32 = 0.15;
    /// Dimmed layer behind modal dialogs.
    pub const BACKDROP: f32 = 0.6;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const SIDE_PANE_WIDTH: f32 = 300.0;

    pub const MENU_BAR_HEIGHT: f32 = 30.0;
    /// Width reserved for each top-level menu title.
    pub const MENU_TITLE_WIDTH: f32 = 72.0;
    pub const MENU_DROPDOWN_WIDTH: f32 = 260.0;
    pub const MENU_ITEM_HEIGHT: f32 = 28.0;

    pub const TAB_HEIGHT: f32 = 32.0;
    pub const RENAME_INPUT_WIDTH: f32 = 140.0;

    pub const DIALOG_WIDTH: f32 = 420.0;
    /// Aspect preview card edge.
    pub const PREVIEW_CARD: f32 = 104.0;
    /// Largest edge of the ratio thumbnail drawn inside a card.
    pub const PREVIEW_THUMBNAIL: f32 = 64.0;
    pub const PREVIEWS_PER_ROW: usize = 3;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Dialog headings
    pub const TITLE_MD: f32 = 20.0;

    /// Section headers
    pub const TITLE_SM: f32 = 16.0;

    /// Standard body
    pub const BODY: f32 = 14.0;

    /// Hints, shortcut labels
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Canvas outline, separators
    pub const WIDTH_SM: f32 = 1.0;

    /// Side pane edge, selected card
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 10.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 12.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);

    assert!(sizing::PREVIEW_CARD > sizing::PREVIEW_THUMBNAIL);
    assert!(sizing::DIALOG_WIDTH >= sizing::PREVIEW_CARD * 3.0);
    assert!(sizing::MENU_ITEM_HEIGHT < sizing::TAB_HEIGHT);
    assert!(sizing::PREVIEWS_PER_ROW > 0);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::XS, spacing::XXS * 2.0);
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn dark_palette_matches_hex_values() {
        let primary = palette::dark::PRIMARY.into_rgba8();
        assert_eq!(primary, [0x58, 0xa6, 0xff, 0xff]);
        let background = palette::dark::BACKGROUND.into_rgba8();
        assert_eq!(background, [0x0d, 0x11, 0x17, 0xff]);
    }
}
