// SPDX-License-Identifier: MPL-2.0
//! Tabbed canvas workspace.
//!
//! The pane owns a [`TabStrip`] of [`ImageCanvas`] documents and renders the
//! tab bar above the current canvas. Tab gestures (press, double press,
//! drag, close) arrive as [`Message`]s; anything the pane cannot decide on
//! its own, like what to create when "+" is pressed, leaves as an [`Event`].

pub mod canvas;
mod tab_bar;

pub use canvas::ImageCanvas;

use crate::domain::aspect::AspectRatio;
use crate::domain::tab_strip::{TabEvent, TabStrip};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Text};
use iced::{Color, Element, Length};
use std::time::{Duration, Instant};

/// Identifier of the inline rename field, used to focus it.
pub const RENAME_INPUT_ID: &str = "image-pane-rename";

/// Two presses on the same tab within this window start a rename.
pub const DOUBLE_PRESS_INTERVAL: Duration = Duration::from_millis(400);

#[derive(Debug, Clone)]
pub enum Message {
    TabPressed(usize),
    TabReleased(usize),
    TabHovered(usize),
    /// Cursor left the tab bar, abandoning any drag in progress.
    StripExited,
    CloseTab(usize),
    RenameInput(String),
    RenameSubmit,
    RenameCancel,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The "+" tab was activated.
    CreateRequested,
    /// The inline rename field appeared and should receive focus.
    RenameStarted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rename {
    index: usize,
    value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    from: usize,
    over: Option<usize>,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
}

#[derive(Debug)]
pub struct State {
    strip: TabStrip<ImageCanvas>,
    editing: Option<Rename>,
    drag: Option<Drag>,
    last_press: Option<(usize, Instant)>,
    fill: Color,
}

impl Default for State {
    fn default() -> Self {
        Self::new(ColorScheme::dark().canvas_fill)
    }
}

impl State {
    /// Creates an empty pane. New canvases are filled with `fill`.
    #[must_use]
    pub fn new(fill: Color) -> Self {
        Self {
            strip: TabStrip::new(),
            editing: None,
            drag: None,
            last_press: None,
            fill,
        }
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::TabPressed(index) => {
                self.drag = self.strip.is_document(index).then_some(Drag {
                    from: index,
                    over: None,
                });
                self.press_at(index, Instant::now())
            }
            Message::TabHovered(index) => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.over = Some(index);
                }
                Event::None
            }
            Message::TabReleased(index) => {
                if let Some(drag) = self.drag.take() {
                    if drag.from != index {
                        self.reorder(drag.from, index);
                    }
                }
                Event::None
            }
            Message::StripExited => {
                self.drag = None;
                Event::None
            }
            Message::CloseTab(index) => {
                self.close_tab(index);
                Event::None
            }
            Message::RenameInput(value) => {
                if let Some(editing) = self.editing.as_mut() {
                    editing.value = value;
                }
                Event::None
            }
            Message::RenameSubmit => {
                if let Some(Rename { index, value }) = self.editing.take() {
                    let label = value.trim();
                    if !label.is_empty() {
                        self.rename_tab(index, label);
                    }
                }
                Event::None
            }
            Message::RenameCancel => {
                self.editing = None;
                Event::None
            }
        }
    }

    /// Creates a canvas just before "+" and makes it current.
    ///
    /// Any drag in progress is dropped, since its indices no longer hold.
    pub fn add_tab(&mut self, label: impl Into<String>, aspect: AspectRatio) -> usize {
        self.drag = None;
        let label = label.into();
        let canvas = ImageCanvas::new(aspect, self.fill);
        let (index, events) = self.strip.insert(canvas, label.clone());
        tracing::info!(index, %label, %aspect, "canvas created");
        self.apply(events);
        index
    }

    /// Relabels a canvas. Returns `false` for positions that are not
    /// documents.
    pub fn rename_tab(&mut self, index: usize, label: impl Into<String>) -> bool {
        let events = self.strip.rename(index, label);
        let renamed = !events.is_empty();
        self.apply(events);
        renamed
    }

    pub fn close_tab(&mut self, index: usize) -> bool {
        self.drag = None;
        let events = self.strip.close(index);
        let closed = !events.is_empty();
        self.apply(events);
        closed
    }

    pub fn close_current(&mut self) -> bool {
        match self.strip.current_index() {
            Some(index) => self.close_tab(index),
            None => false,
        }
    }

    /// Moves the current canvas to its next preset ratio.
    pub fn cycle_current_aspect_ratio(&mut self) -> Option<AspectRatio> {
        let tab = self.strip.current_mut()?;
        let aspect = tab.document_mut().cycle_aspect_ratio();
        tracing::debug!(label = tab.label(), %aspect, "aspect ratio cycled");
        Some(aspect)
    }

    pub fn set_current_aspect_ratio(&mut self, width: u32, height: u32) -> bool {
        self.strip
            .current_mut()
            .is_some_and(|tab| tab.document_mut().set_aspect_ratio(width, height))
    }

    /// Opens the inline rename field on the current tab.
    pub fn begin_rename_current(&mut self) -> bool {
        match self.strip.current_index() {
            Some(index) => self.begin_rename(index),
            None => false,
        }
    }

    pub fn is_renaming(&self) -> bool {
        self.editing.is_some()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.strip.current_index()
    }

    pub fn current_label(&self) -> Option<&str> {
        self.strip.current().map(|tab| tab.label())
    }

    pub fn current_canvas(&self) -> Option<&ImageCanvas> {
        self.strip.current().map(|tab| tab.document())
    }

    pub fn labels(&self) -> Vec<&str> {
        self.strip.labels()
    }

    pub fn len(&self) -> usize {
        self.strip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strip.is_empty()
    }

    pub fn strip(&self) -> &TabStrip<ImageCanvas> {
        &self.strip
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let scheme = *ctx.scheme;
        let tabs = tab_bar::view(self, &ctx);

        let body: Element<'a, Message> = match self.current_canvas() {
            Some(canvas) => Container::new(canvas.view(ctx.scheme))
                .padding(spacing::MD)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Container::new(
                Text::new(ctx.i18n.tr("image-pane-empty")).size(typography::BODY),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .into(),
        };

        Column::new()
            .push(tabs)
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .style(styles::container::image_area(scheme)),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn press_at(&mut self, index: usize, now: Instant) -> Event {
        let double = self.last_press.is_some_and(|(previous, at)| {
            previous == index && now.saturating_duration_since(at) <= DOUBLE_PRESS_INTERVAL
        });

        if double && self.strip.is_document(index) {
            self.last_press = None;
            self.drag = None;
            return if self.begin_rename(index) {
                Event::RenameStarted
            } else {
                Event::None
            };
        }

        self.last_press = Some((index, now));
        let events = self.strip.press(index);
        self.apply(events)
    }

    fn reorder(&mut self, from: usize, to: usize) {
        let events = self.strip.reorder(from, to);
        self.apply(events);
    }

    fn begin_rename(&mut self, index: usize) -> bool {
        let Some(tab) = self.strip.get(index) else {
            return false;
        };
        self.editing = Some(Rename {
            index,
            value: tab.label().to_string(),
        });
        true
    }

    /// Reacts to settled strip notifications.
    fn apply(&mut self, events: Vec<TabEvent>) -> Event {
        let mut outcome = Event::None;
        for event in events {
            match event {
                TabEvent::Activated => outcome = Event::CreateRequested,
                TabEvent::CurrentChanged { index } => {
                    tracing::debug!(index, "current canvas changed");
                }
                TabEvent::Closed { index, label } => {
                    tracing::info!(index, %label, "canvas closed");
                    self.editing = None;
                }
                TabEvent::Renamed { index, label } => {
                    tracing::info!(index, %label, "canvas renamed");
                }
                TabEvent::Reordered { from, to } => {
                    tracing::debug!(from, to, "canvas moved");
                    self.editing = None;
                }
            }
        }
        outcome
    }
}
