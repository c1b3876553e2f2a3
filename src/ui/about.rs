// SPDX-License-Identifier: MPL-2.0
//! About dialog listing product, version, toolkit and platform.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Element, Length};

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Homepage from Cargo.toml, empty when the manifest declares none.
const HOMEPAGE: &str = env!("CARGO_PKG_HOMEPAGE");

const TOOLKIT: &str = "iced 0.14";

/// Shortcut advertised for leaving the application.
pub const EXIT_SHORTCUT: &str = "Ctrl+Q";

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
}

#[derive(Debug, Clone)]
pub enum Message {
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Closed,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::Close => Event::Closed,
    }
}

/// Label/value pairs shown in the dialog, in display order.
pub fn info_rows(i18n: &I18n) -> Vec<(String, String)> {
    let mut rows = vec![
        (i18n.tr("about-product"), i18n.tr("app-title")),
        (i18n.tr("about-version"), APP_VERSION.to_string()),
        (i18n.tr("about-toolkit"), TOOLKIT.to_string()),
        (
            i18n.tr("about-platform"),
            format!("{} ({})", std::env::consts::OS, std::env::consts::ARCH),
        ),
    ];
    if !HOMEPAGE.is_empty() {
        rows.push((i18n.tr("about-homepage"), HOMEPAGE.to_string()));
    }
    rows
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scheme = *ctx.scheme;
    let product = ctx.i18n.tr("app-title");
    let title = Text::new(ctx.i18n.tr_with_args("about-title", &[("product", product.as_str())]))
        .size(typography::TITLE_MD);

    let rows = info_rows(ctx.i18n).into_iter().fold(
        Column::new().spacing(spacing::XS),
        |column, (label, value)| {
            column.push(
                Row::new()
                    .spacing(spacing::SM)
                    .align_y(Vertical::Center)
                    .push(
                        Text::new(label)
                            .size(typography::BODY)
                            .width(Length::FillPortion(1)),
                    )
                    .push(
                        Text::new(value)
                            .size(typography::BODY)
                            .width(Length::FillPortion(2)),
                    ),
            )
        },
    );

    let hint = Text::new(
        ctx.i18n
            .tr_with_args("about-exit-hint", &[("shortcut", EXIT_SHORTCUT)]),
    )
    .size(typography::CAPTION);

    let close = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("about-close")).size(typography::BODY))
                .padding([spacing::XXS, spacing::MD])
                .on_press(Message::Close)
                .style(styles::button::primary(scheme)),
        );

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(rows)
        .push(hint)
        .push(close);

    Container::new(content)
        .width(Length::Fixed(sizing::DIALOG_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::dialog(scheme))
        .into()
}
