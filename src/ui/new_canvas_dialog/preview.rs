// SPDX-License-Identifier: MPL-2.0
//! Selectable aspect ratio cards.

use super::Message;
use crate::domain::aspect::{AspectRatio, Rect};
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::canvas::{self, Path, Stroke};
use iced::widget::{button, Column, Text};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Size, Theme};

/// A card showing one ratio as a proportional rectangle with its `W:H` label.
pub fn card<'a>(aspect: AspectRatio, selected: bool, scheme: ColorScheme) -> Element<'a, Message> {
    let (fill, outline) = if selected {
        (scheme.primary, scheme.primary)
    } else {
        (scheme.surface_light, scheme.text_secondary)
    };

    let thumbnail = canvas::Canvas::new(Thumbnail {
        aspect,
        fill,
        outline,
    })
    .width(Length::Fixed(sizing::PREVIEW_THUMBNAIL))
    .height(Length::Fixed(sizing::PREVIEW_THUMBNAIL));

    let content = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(thumbnail)
        .push(Text::new(aspect.to_string()).size(typography::CAPTION));

    button(content)
        .width(Length::Fixed(sizing::PREVIEW_CARD))
        .padding(spacing::XS)
        .on_press(Message::SelectAspect(aspect))
        .style(styles::button::preview_card(scheme, selected))
        .into()
}

struct Thumbnail {
    aspect: AspectRatio,
    fill: Color,
    outline: Color,
}

impl<Message> canvas::Program<Message> for Thumbnail {
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
        let shape = Path::rectangle(
            Point::new(area.x, area.y),
            Size::new(area.width, area.height),
        );

        frame.fill(&shape, Color { a: 0.35, ..self.fill });
        frame.stroke(
            &shape,
            Stroke::default()
                .with_color(self.outline)
                .with_width(border::WIDTH_SM),
        );

        vec![frame.into_geometry()]
    }
}
