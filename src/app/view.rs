// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is the menu bar above a row of the side pane and the image
//! pane. An open menu, the "New Canvas" dialog and the about dialog are
//! stacked on top.

use super::{Action, Message};
use crate::i18n::fluent::I18n;
use crate::ui::about;
use crate::ui::components::modal::modal;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::image_pane;
use crate::ui::menu_bar::{self, MenuBar};
use crate::ui::new_canvas_dialog;
use crate::ui::side_pane::{self, CanvasSummary};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
    pub menu_bar: &'a MenuBar<Action>,
    pub image_pane: &'a image_pane::State,
    pub dialog: Option<&'a new_canvas_dialog::State>,
    pub about_open: bool,
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scheme = *ctx.scheme;

    let menu = ctx
        .menu_bar
        .view(menu_bar::ViewContext {
            i18n: ctx.i18n,
            scheme: ctx.scheme,
        })
        .map(Message::Menu);

    let current = ctx
        .image_pane
        .current_label()
        .zip(ctx.image_pane.current_canvas())
        .map(|(label, canvas)| CanvasSummary {
            label,
            aspect: canvas.aspect_ratio(),
        });

    let side = side_pane::view(side_pane::ViewContext {
        i18n: ctx.i18n,
        scheme: ctx.scheme,
        current,
    })
    .map(Message::SidePane);

    let pane = ctx
        .image_pane
        .view(image_pane::ViewContext {
            i18n: ctx.i18n,
            scheme: ctx.scheme,
        })
        .map(Message::ImagePane);

    let mut column = Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(menu)
        .push(
            Row::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(side)
                .push(pane),
        );

    if let Some(key) = ctx.config_warning {
        column = column.push(
            Container::new(
                Text::new(ctx.i18n.tr(key))
                    .size(typography::CAPTION)
                    .color(scheme.warning),
            )
            .width(Length::Fill)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::menu_bar(scheme)),
        );
    }

    let window = Container::new(column)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::window(scheme));

    let overlay = ctx.menu_bar.overlay(menu_bar::ViewContext {
        i18n: ctx.i18n,
        scheme: ctx.scheme,
    });
    let base: Element<'_, Message> = match overlay {
        Some(dropdown) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(window)
            .push(dropdown.map(Message::Menu))
            .into(),
        None => window.into(),
    };

    if let Some(dialog) = ctx.dialog {
        let content = dialog
            .view(new_canvas_dialog::ViewContext {
                i18n: ctx.i18n,
                scheme: ctx.scheme,
            })
            .map(Message::NewCanvasDialog);
        return modal(
            base,
            content,
            Message::NewCanvasDialog(new_canvas_dialog::Message::Cancel),
            scheme,
        );
    }

    if ctx.about_open {
        let content = about::view(about::ViewContext {
            i18n: ctx.i18n,
            scheme: ctx.scheme,
        })
        .map(Message::About);
        return modal(base, content, Message::About(about::Message::Close), scheme);
    }

    base
}
