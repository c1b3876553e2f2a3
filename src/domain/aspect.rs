// SPDX-License-Identifier: MPL-2.0
//! Aspect ratios and the centered-fit computation used by canvases.
//!
//! An [`AspectRatio`] is a pair of strictly positive integers. Zero components
//! are unrepresentable, so every consumer can divide by them freely.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

const fn component(value: u32) -> NonZeroU32 {
    match NonZeroU32::new(value) {
        Some(value) => value,
        None => panic!("aspect ratio components must be positive"),
    }
}

/// Width-to-height proportion of a canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AspectRatio {
    width: NonZeroU32,
    height: NonZeroU32,
}

/// Square (1:1), the default ratio for new canvases.
pub const SQUARE: AspectRatio = AspectRatio::preset(1, 1);

/// Presets in cycling order.
pub const PRESETS: [AspectRatio; 6] = [
    SQUARE,
    AspectRatio::preset(3, 2),
    AspectRatio::preset(4, 3),
    AspectRatio::preset(5, 4),
    AspectRatio::preset(16, 9),
    AspectRatio::preset(9, 16),
];

impl AspectRatio {
    const fn preset(width: u32, height: u32) -> Self {
        Self {
            width: component(width),
            height: component(height),
        }
    }

    /// Creates a ratio, returning `None` when either component is zero.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Some(Self {
            width: NonZeroU32::new(width)?,
            height: NonZeroU32::new(height)?,
        })
    }

    #[must_use]
    pub fn width(self) -> u32 {
        self.width.get()
    }

    #[must_use]
    pub fn height(self) -> u32 {
        self.height.get()
    }

    #[must_use]
    pub fn as_tuple(self) -> (u32, u32) {
        (self.width(), self.height())
    }

    /// Position of this exact tuple in [`PRESETS`]. `(2, 2)` is not a preset.
    #[must_use]
    pub fn preset_index(self) -> Option<usize> {
        PRESETS.iter().position(|preset| *preset == self)
    }

    /// The preset following this one, wrapping around. Ratios that are not
    /// presets jump to the first preset.
    #[must_use]
    pub fn next_preset(self) -> Self {
        match self.preset_index() {
            Some(index) => PRESETS[(index + 1) % PRESETS.len()],
            None => PRESETS[0],
        }
    }

    /// Largest rectangle with this ratio that fits inside `available`,
    /// centered with floored offsets.
    ///
    /// Pure; callers recompute it on every layout instead of caching it.
    #[must_use]
    pub fn fit(self, available: Rect) -> Rect {
        if available.width <= 0.0 || available.height <= 0.0 {
            return Rect::new(available.x, available.y, 0.0, 0.0);
        }

        let ratio_width = self.width() as f32;
        let ratio_height = self.height() as f32;
        let scale = (available.width / ratio_width).min(available.height / ratio_height);

        // Float products can overshoot the available extent by an ulp.
        let width = (ratio_width * scale).min(available.width);
        let height = (ratio_height * scale).min(available.height);

        let offset_x = ((available.width - width) / 2.0).floor().max(0.0);
        let offset_y = ((available.height - height) / 2.0).floor().max(0.0);

        Rect::new(available.x + offset_x, available.y + offset_y, width, height)
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        SQUARE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Error returned when a string is not a valid `W:H` ratio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAspectRatioError(String);

impl fmt::Display for ParseAspectRatioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid aspect ratio '{}': expected two positive integers like 16:9",
            self.0
        )
    }
}

impl std::error::Error for ParseAspectRatioError {}

impl FromStr for AspectRatio {
    type Err = ParseAspectRatioError;

    /// Accepts `W:H` and `WxH`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseAspectRatioError(s.to_string());
        let (width, height) = s
            .trim()
            .split_once([':', 'x'])
            .ok_or_else(invalid)?;
        let width: u32 = width.trim().parse().map_err(|_| invalid())?;
        let height: u32 = height.trim().parse().map_err(|_| invalid())?;
        Self::new(width, height).ok_or_else(invalid)
    }
}

impl TryFrom<String> for AspectRatio {
    type Error = ParseAspectRatioError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AspectRatio> for String {
    fn from(ratio: AspectRatio) -> Self {
        ratio.to_string()
    }
}

/// Axis-aligned rectangle in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    #[must_use]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(width: u32, height: u32) -> AspectRatio {
        AspectRatio::new(width, height).expect("positive ratio")
    }

    #[test]
    fn zero_components_are_rejected() {
        assert_eq!(AspectRatio::new(0, 9), None);
        assert_eq!(AspectRatio::new(16, 0), None);
        assert!(AspectRatio::new(16, 9).is_some());
    }

    #[test]
    fn cycling_six_times_returns_to_square() {
        let mut current = SQUARE;
        for _ in 0..PRESETS.len() {
            current = current.next_preset();
        }
        assert_eq!(current, SQUARE);
    }

    #[test]
    fn cycle_follows_preset_order() {
        let visited: Vec<_> = std::iter::successors(Some(SQUARE), |r| Some(r.next_preset()))
            .take(7)
            .map(AspectRatio::as_tuple)
            .collect();
        assert_eq!(
            visited,
            vec![(1, 1), (3, 2), (4, 3), (5, 4), (16, 9), (9, 16), (1, 1)]
        );
    }

    #[test]
    fn unknown_ratio_cycles_to_first_preset() {
        assert_eq!(ratio(2, 2).next_preset(), SQUARE);
        assert_eq!(ratio(21, 9).next_preset(), SQUARE);
    }

    #[test]
    fn fit_preserves_ratio_and_centers() {
        let samples = [
            (ratio(1, 1), 800.0, 600.0),
            (ratio(16, 9), 800.0, 600.0),
            (ratio(9, 16), 800.0, 600.0),
            (ratio(3, 2), 1000.0, 333.0),
            (ratio(5, 4), 17.0, 1000.0),
            (ratio(4, 3), 1001.0, 1001.0),
            (ratio(7, 3), 1000.0, 1000.0),
        ];

        for (aspect, available_width, available_height) in samples {
            let available = Rect::new(10.0, 20.0, available_width, available_height);
            let fitted = aspect.fit(available);

            let expected = aspect.width() as f32 / aspect.height() as f32;
            let actual = fitted.width / fitted.height;
            assert!(
                (actual - expected).abs() <= expected * 0.01,
                "{aspect} in {available_width}x{available_height}: ratio {actual}"
            );

            assert!(fitted.width <= available.width);
            assert!(fitted.height <= available.height);

            let left = fitted.x - available.x;
            let right = available.x + available.width - (fitted.x + fitted.width);
            let top = fitted.y - available.y;
            let bottom = available.y + available.height - (fitted.y + fitted.height);
            assert!(left >= 0.0 && top >= 0.0);
            assert!((left - right).abs() <= 1.0, "{aspect}: {left} vs {right}");
            assert!((top - bottom).abs() <= 1.0, "{aspect}: {top} vs {bottom}");
        }
    }

    #[test]
    fn fit_fills_one_axis() {
        let fitted = ratio(16, 9).fit(Rect::from_size(1600.0, 1600.0));
        assert_eq!(fitted.width, 1600.0);
        assert_eq!(fitted.height, 900.0);
        assert_eq!(fitted.x, 0.0);
        assert_eq!(fitted.y, 350.0);
    }

    #[test]
    fn fit_offsets_are_floored() {
        let fitted = SQUARE.fit(Rect::from_size(101.0, 50.0));
        assert_eq!(fitted.width, 50.0);
        assert_eq!(fitted.x, 25.0);
    }

    #[test]
    fn fit_of_empty_area_is_empty() {
        let fitted = SQUARE.fit(Rect::new(5.0, 5.0, 0.0, 100.0));
        assert_eq!(fitted.width, 0.0);
        assert_eq!(fitted.height, 0.0);
    }

    #[test]
    fn parses_and_displays() {
        assert_eq!("16:9".parse::<AspectRatio>(), Ok(ratio(16, 9)));
        assert_eq!(" 4x3 ".parse::<AspectRatio>(), Ok(ratio(4, 3)));
        assert!("16:0".parse::<AspectRatio>().is_err());
        assert!("-1:2".parse::<AspectRatio>().is_err());
        assert!("wide".parse::<AspectRatio>().is_err());
        assert_eq!(ratio(9, 16).to_string(), "9:16");
    }
}
