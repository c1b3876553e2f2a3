// SPDX-License-Identifier: MPL-2.0
//! Modal overlay.

use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{center, mouse_area, opaque, Stack};
use iced::Element;

/// Stacks `content` centered above `base`. Everything below the dialog is
/// dimmed and swallows input; pressing the dimmed area emits `on_blur`.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
    scheme: ColorScheme,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let backdrop = mouse_area(center(opaque(content)).style(styles::container::backdrop(scheme)))
        .on_press(on_blur);

    Stack::new().push(base).push(opaque(backdrop)).into()
}
