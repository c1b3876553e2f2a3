// SPDX-License-Identifier: MPL-2.0
//! "New Canvas" dialog: a name field and one card per aspect ratio preset.
//!
//! The dialog never creates anything itself. Accepting yields the trimmed
//! name (or the fallback the caller computed) and the selected ratio as an
//! [`Event::Accepted`]; the owner decides what to do with it.

mod preview;

use crate::domain::aspect::{AspectRatio, PRESETS, SQUARE};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, text_input, Column, Container, Id, Row, Space, Text};
use iced::{Element, Length};

/// Identifier of the name field, focused when the dialog opens.
pub const NAME_INPUT_ID: &str = "new-canvas-name";

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    SelectAspect(AspectRatio),
    Accept,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Accepted { name: String, aspect: AspectRatio },
    Cancelled,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    name: String,
    fallback: String,
    selected: AspectRatio,
}

impl State {
    /// `fallback` is used when the name is left blank. `initial` is
    /// preselected if it is a preset, otherwise 1:1 is.
    #[must_use]
    pub fn new(fallback: impl Into<String>, initial: AspectRatio) -> Self {
        let selected = if initial.preset_index().is_some() {
            initial
        } else {
            SQUARE
        };
        Self {
            name: String::new(),
            fallback: fallback.into(),
            selected,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(name) => {
                self.name = name;
                Event::None
            }
            Message::SelectAspect(aspect) => {
                self.selected = aspect;
                Event::None
            }
            Message::Accept => {
                let (name, aspect) = self.result();
                Event::Accepted { name, aspect }
            }
            Message::Cancel => Event::Cancelled,
        }
    }

    /// Name and ratio that accepting now would produce.
    pub fn result(&self) -> (String, AspectRatio) {
        let trimmed = self.name.trim();
        let name = if trimmed.is_empty() {
            self.fallback.clone()
        } else {
            trimmed.to_string()
        };
        (name, self.selected)
    }

    pub fn selected(&self) -> AspectRatio {
        self.selected
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let scheme = *ctx.scheme;

        let name_input = text_input(&self.fallback, &self.name)
            .id(Id::new(NAME_INPUT_ID))
            .on_input(Message::NameChanged)
            .on_submit(Message::Accept)
            .padding(spacing::XS)
            .size(typography::BODY);

        let cards = PRESETS
            .chunks(sizing::PREVIEWS_PER_ROW)
            .fold(Column::new().spacing(spacing::XS), |grid, row| {
                grid.push(row.iter().fold(
                    Row::new().spacing(spacing::XS),
                    |cards, aspect| {
                        cards.push(preview::card(*aspect, *aspect == self.selected, scheme))
                    },
                ))
            });

        let actions = Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(Space::new().width(Length::Fill))
            .push(
                button(Text::new(ctx.i18n.tr("dialog-cancel")).size(typography::BODY))
                    .padding([spacing::XXS, spacing::MD])
                    .on_press(Message::Cancel)
                    .style(styles::button::secondary(scheme)),
            )
            .push(
                button(Text::new(ctx.i18n.tr("dialog-create")).size(typography::BODY))
                    .padding([spacing::XXS, spacing::MD])
                    .on_press(Message::Accept)
                    .style(styles::button::primary(scheme)),
            );

        let content = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(ctx.i18n.tr("dialog-new-canvas-title")).size(typography::TITLE_MD))
            .push(Text::new(ctx.i18n.tr("dialog-new-canvas-name")).size(typography::CAPTION))
            .push(name_input)
            .push(Text::new(ctx.i18n.tr("dialog-new-canvas-aspect")).size(typography::CAPTION))
            .push(cards)
            .push(actions);

        Container::new(content)
            .width(Length::Fixed(sizing::DIALOG_WIDTH))
            .padding(spacing::LG)
            .style(styles::container::dialog(scheme))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratio(width: u32, height: u32) -> AspectRatio {
        AspectRatio::new(width, height).expect("positive ratio")
    }

    #[test]
    fn blank_name_uses_fallback() {
        let mut dialog = State::new("Untitled 2", SQUARE);
        dialog.update(Message::NameChanged("   ".into()));
        dialog.update(Message::SelectAspect(ratio(16, 9)));

        assert_eq!(
            dialog.update(Message::Accept),
            Event::Accepted {
                name: "Untitled 2".into(),
                aspect: ratio(16, 9),
            }
        );
    }

    #[test]
    fn name_is_trimmed() {
        let mut dialog = State::new("Untitled", SQUARE);
        dialog.update(Message::NameChanged("  Poster ".into()));
        assert_eq!(dialog.result(), ("Poster".to_string(), SQUARE));
    }

    #[test]
    fn selecting_a_card_replaces_previous_selection() {
        let mut dialog = State::new("Untitled", SQUARE);
        dialog.update(Message::SelectAspect(ratio(4, 3)));
        dialog.update(Message::SelectAspect(ratio(9, 16)));
        assert_eq!(dialog.selected(), ratio(9, 16));
        assert_eq!(
            PRESETS.iter().filter(|p| **p == dialog.selected()).count(),
            1
        );
    }

    #[test]
    fn initial_selection_falls_back_to_square() {
        assert_eq!(State::new("x", ratio(21, 9)).selected(), SQUARE);
        assert_eq!(State::new("x", ratio(5, 4)).selected(), ratio(5, 4));
    }

    #[test]
    fn cancel_produces_no_result() {
        let mut dialog = State::new("Untitled", SQUARE);
        dialog.update(Message::NameChanged("Kept?".into()));
        assert_eq!(dialog.update(Message::Cancel), Event::Cancelled);
    }
}
