// SPDX-License-Identifier: MPL-2.0
//! A single canvas document.
//!
//! The document only knows its target aspect ratio and fill color. Where it
//! lands on screen is derived from the space the layout grants it each time
//! it is drawn.

use crate::domain::aspect::{AspectRatio, Rect};
use crate::ui::design_tokens::border;
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme};

#[derive(Debug, Clone, PartialEq)]
pub struct ImageCanvas {
    aspect: AspectRatio,
    background: Color,
}

impl ImageCanvas {
    #[must_use]
    pub fn new(aspect: AspectRatio, background: Color) -> Self {
        Self { aspect, background }
    }

    pub fn aspect_ratio(&self) -> AspectRatio {
        self.aspect
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Sets the target ratio. Returns `false`, leaving the canvas untouched,
    /// when either component is zero.
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) -> bool {
        match AspectRatio::new(width, height) {
            Some(aspect) => {
                self.aspect = aspect;
                true
            }
            None => false,
        }
    }

    /// Advances to the next preset and returns it.
    pub fn cycle_aspect_ratio(&mut self) -> AspectRatio {
        self.aspect = self.aspect.next_preset();
        self.aspect
    }

    /// Region the document occupies inside `available`.
    pub fn content_rect(&self, available: Rect) -> Rect {
        self.aspect.fit(available)
    }

    pub fn view<'a, Message: 'a>(&self, scheme: &ColorScheme) -> Element<'a, Message> {
        canvas::Canvas::new(Surface {
            aspect: self.aspect,
            fill: self.background,
            outline: scheme.border,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
    }
}

/// Draws the fitted rectangle. Geometry is rebuilt on every frame, so resizes
/// and ratio changes show up without any invalidation step.
struct Surface {
    aspect: AspectRatio,
    fill: Color,
    outline: Color,
}

impl<Message> canvas::Program<Message> for Surface {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let area = self
            .aspect
            .fit(Rect::from_size(bounds.width, bounds.height));

        if area.width >= border::WIDTH_SM && area.height >= border::WIDTH_SM {
            frame.fill_rectangle(
                Point::new(area.x, area.y),
                Size::new(area.width, area.height),
                self.fill,
            );

            // Stroke centered half a unit inside so the line is not clipped
            let inset = border::WIDTH_SM / 2.0;
            let outline = Path::rectangle(
                Point::new(area.x + inset, area.y + inset),
                Size::new(area.width - border::WIDTH_SM, area.height - border::WIDTH_SM),
            );
            frame.stroke(
                &outline,
                Stroke::default()
                    .with_color(self.outline)
                    .with_width(border::WIDTH_SM),
            );
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aspect::SQUARE;

    fn canvas() -> ImageCanvas {
        ImageCanvas::new(SQUARE, Color::WHITE)
    }

    #[test]
    fn zero_component_is_ignored() {
        let mut canvas = canvas();
        assert!(!canvas.set_aspect_ratio(0, 5));
        assert!(!canvas.set_aspect_ratio(5, 0));
        assert_eq!(canvas.aspect_ratio(), SQUARE);
    }

    #[test]
    fn set_aspect_ratio_accepts_arbitrary_ratios() {
        let mut canvas = canvas();
        assert!(canvas.set_aspect_ratio(21, 9));
        assert_eq!(canvas.aspect_ratio().as_tuple(), (21, 9));
        assert_eq!(canvas.cycle_aspect_ratio(), SQUARE);
    }

    #[test]
    fn six_cycles_return_to_start() {
        let mut canvas = canvas();
        let visited: Vec<_> = (0..6).map(|_| canvas.cycle_aspect_ratio().as_tuple()).collect();
        assert_eq!(visited, vec![(3, 2), (4, 3), (5, 4), (16, 9), (9, 16), (1, 1)]);
    }

    #[test]
    fn content_rect_tracks_ratio_changes() {
        let mut canvas = canvas();
        let available = Rect::from_size(400.0, 300.0);
        assert_eq!(canvas.content_rect(available), Rect::new(50.0, 0.0, 300.0, 300.0));

        canvas.set_aspect_ratio(4, 3);
        assert_eq!(canvas.content_rect(available), Rect::new(0.0, 0.0, 400.0, 300.0));
    }
}
