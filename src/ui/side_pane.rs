// SPDX-License-Identifier: MPL-2.0
//! Fixed-width panel on the left of the workspace.

use crate::domain::aspect::AspectRatio;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};

/// What the pane shows about the current canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSummary<'a> {
    pub label: &'a str,
    pub aspect: AspectRatio,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
    pub current: Option<CanvasSummary<'a>>,
}

#[derive(Debug, Clone)]
pub enum Message {
    NewCanvas,
    CycleAspectRatio,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    NewCanvasRequested,
    CycleAspectRatioRequested,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::NewCanvas => Event::NewCanvasRequested,
        Message::CycleAspectRatio => Event::CycleAspectRatioRequested,
    }
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scheme = *ctx.scheme;

    let details = match ctx.current {
        Some(summary) => {
            let ratio = summary.aspect.to_string();
            Column::new()
                .spacing(spacing::XXS)
                .push(Text::new(summary.label).size(typography::BODY))
                .push(
                    Text::new(
                        ctx.i18n
                            .tr_with_args("side-pane-aspect", &[("ratio", ratio.as_str())]),
                    )
                    .size(typography::CAPTION),
                )
        }
        None => Column::new()
            .push(Text::new(ctx.i18n.tr("side-pane-no-canvas")).size(typography::CAPTION)),
    };

    let new_canvas = button(Text::new(ctx.i18n.tr("side-pane-new-canvas")).size(typography::BODY))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::NewCanvas)
        .style(styles::button::primary(scheme));

    let cycle = button(Text::new(ctx.i18n.tr("side-pane-cycle-aspect")).size(typography::BODY))
        .width(Length::Fill)
        .padding([spacing::XXS, spacing::SM])
        .on_press_maybe(ctx.current.map(|_| Message::CycleAspectRatio))
        .style(styles::button::secondary(scheme));

    let content = Column::new()
        .spacing(spacing::MD)
        .push(Text::new(ctx.i18n.tr("side-pane-title")).size(typography::TITLE_SM))
        .push(details)
        .push(new_canvas)
        .push(cycle);

    let body = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::side_pane(scheme));

    let edge = Container::new(Text::new(""))
        .width(Length::Fixed(border::WIDTH_MD))
        .height(Length::Fill)
        .style(styles::container::separator(scheme));

    Row::new()
        .width(Length::Fixed(sizing::SIDE_PANE_WIDTH))
        .height(Length::Fill)
        .push(body)
        .push(edge)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aspect::SQUARE;

    #[test]
    fn buttons_map_to_requests() {
        assert_eq!(update(&Message::NewCanvas), Event::NewCanvasRequested);
        assert_eq!(
            update(&Message::CycleAspectRatio),
            Event::CycleAspectRatioRequested
        );
    }

    #[test]
    fn view_renders_with_and_without_canvas() {
        let i18n = I18n::default();
        let scheme = ColorScheme::light();
        let _empty = view(ViewContext {
            i18n: &i18n,
            scheme: &scheme,
            current: None,
        });
        let _filled = view(ViewContext {
            i18n: &i18n,
            scheme: &scheme,
            current: Some(CanvasSummary {
                label: "Untitled",
                aspect: SQUARE,
            }),
        });
    }
}
