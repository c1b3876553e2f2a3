// SPDX-License-Identifier: MPL-2.0
//! Tab bar rendering.
//!
//! Each entry is a `mouse_area` so presses, releases and hovers can be
//! combined into click, double click and drag gestures by [`State`].

use super::{Message, State, ViewContext, RENAME_INPUT_ID};
use crate::domain::tab_strip::{Entry, Tab};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, mouse_area, text_input, tooltip, Container, Id, Row, Scrollable, Text,
};
use iced::{mouse, Element, Length};

pub(super) fn view<'a>(state: &'a State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let scheme = *ctx.scheme;
    let current = state.strip.current_index();
    let drop_target = state
        .drag
        .and_then(|drag| drag.over.filter(|over| *over != drag.from));

    let tabs = state
        .strip
        .entries()
        .iter()
        .enumerate()
        .fold(Row::new().height(Length::Fill), |row, (index, entry)| {
            let highlighted = drop_target == Some(index);
            let body = match entry {
                Entry::Document(tab) => {
                    let editing = state
                        .editing
                        .as_ref()
                        .filter(|rename| rename.index == index)
                        .map(|rename| rename.value.as_str());
                    document_tab(
                        index,
                        tab,
                        editing,
                        current == Some(index),
                        highlighted,
                        scheme,
                        ctx,
                    )
                }
                Entry::AddTrigger => add_trigger(highlighted, scheme, ctx),
            };
            row.push(
                mouse_area(body)
                    .on_press(Message::TabPressed(index))
                    .on_release(Message::TabReleased(index))
                    .on_enter(Message::TabHovered(index))
                    .interaction(mouse::Interaction::Pointer),
            )
        });

    let scroller = Scrollable::new(tabs)
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .width(Length::Fill)
        .height(Length::Fill);

    mouse_area(
        Container::new(scroller)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::TAB_HEIGHT))
            .style(styles::container::tab_bar(scheme)),
    )
    .on_exit(Message::StripExited)
    .into()
}

fn document_tab<'a>(
    index: usize,
    tab: &'a Tab<super::ImageCanvas>,
    editing: Option<&'a str>,
    selected: bool,
    drop_target: bool,
    scheme: ColorScheme,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let label: Element<'a, Message> = match editing {
        Some(value) => text_input("", value)
            .id(Id::new(RENAME_INPUT_ID))
            .on_input(Message::RenameInput)
            .on_submit(Message::RenameSubmit)
            .size(typography::BODY)
            .padding(spacing::XXS)
            .width(Length::Fixed(sizing::RENAME_INPUT_WIDTH))
            .into(),
        None => Text::new(tab.label()).size(typography::BODY).into(),
    };

    let close = button(Text::new("×").size(typography::BODY))
        .padding([0.0, spacing::XXS])
        .on_press(Message::CloseTab(index))
        .style(styles::button::tab_glyph(scheme));

    let close = tooltip(
        close,
        Text::new(ctx.i18n.tr("tab-close")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .padding(spacing::XXS)
    .style(styles::container::dropdown(scheme));

    Container::new(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(label)
            .push(close),
    )
    .padding([0.0, spacing::SM])
    .height(Length::Fill)
    .align_y(Vertical::Center)
    .style(styles::container::tab(scheme, selected, drop_target))
    .into()
}

fn add_trigger<'a>(
    drop_target: bool,
    scheme: ColorScheme,
    ctx: &ViewContext<'a>,
) -> Element<'a, Message> {
    let plus = Container::new(Text::new("+").size(typography::TITLE_SM))
        .padding([0.0, spacing::SM])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .style(styles::container::tab(scheme, false, drop_target));

    tooltip(
        plus,
        Text::new(ctx.i18n.tr("tab-add")).size(typography::CAPTION),
        tooltip::Position::Bottom,
    )
    .padding(spacing::XXS)
    .style(styles::container::dropdown(scheme))
    .into()
}
