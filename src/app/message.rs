// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{about, image_pane, menu_bar, new_canvas_dialog, side_pane};
use iced::keyboard::{Key, Modifiers};

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Menu(menu_bar::Message),
    SidePane(side_pane::Message),
    ImagePane(image_pane::Message),
    NewCanvasDialog(new_canvas_dialog::Message),
    About(about::Message),
    /// A key press no widget consumed.
    KeyPressed { key: Key, modifiers: Modifiers },
    /// Escape, delivered whether or not a widget consumed it.
    EscapePressed,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PEDIT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
