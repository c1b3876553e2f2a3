// SPDX-License-Identifier: MPL-2.0
//! Main window actions and the menu bar that exposes them.

use crate::ui::menu_bar::{ActionSpec, ItemSpec, MenuSpec};

/// Everything the main window can do in response to a menu entry or its
/// shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Exit,
    About,
    NewCanvas,
    NewDefaultCanvas,
    RenameCanvas,
    CycleAspectRatio,
    CloseCanvas,
}

impl Action {
    /// Resolves a menu handler name. Handlers the window does not
    /// implement yield `None` and stay unwired.
    #[must_use]
    pub fn from_handler(name: &str) -> Option<Self> {
        let action = match name {
            "close" => Action::Exit,
            "on_about" => Action::About,
            "on_new_canvas" => Action::NewCanvas,
            "on_new_default_canvas" => Action::NewDefaultCanvas,
            "on_rename_canvas" => Action::RenameCanvas,
            "on_cycle_aspect_ratio" => Action::CycleAspectRatio,
            "on_close_canvas" => Action::CloseCanvas,
            _ => return None,
        };
        Some(action)
    }
}

const FILE: &[ItemSpec] = &[
    ItemSpec::Action(
        ActionSpec::new("Open", "menu-file-open")
            .shortcut("Ctrl+O")
            .triggered("on_open"),
    ),
    ItemSpec::Action(
        ActionSpec::new("Save", "menu-file-save")
            .shortcut("Ctrl+S")
            .triggered("on_save"),
    ),
    ItemSpec::Separator,
    ItemSpec::Action(
        ActionSpec::new("Exit", "menu-file-exit")
            .shortcut("Ctrl+Q")
            .triggered("close")
            .status_tip("tip-file-exit"),
    ),
];

const EDIT: &[ItemSpec] = &[
    ItemSpec::Action(
        ActionSpec::new("Undo", "menu-edit-undo")
            .shortcut("Ctrl+Z")
            .triggered("on_undo"),
    ),
    ItemSpec::Action(
        ActionSpec::new("Redo", "menu-edit-redo")
            .shortcut("Ctrl+Y")
            .triggered("on_redo"),
    ),
];

const CANVAS: &[ItemSpec] = &[
    ItemSpec::Action(
        ActionSpec::new("New Canvas", "menu-canvas-new")
            .shortcut("Ctrl+N")
            .triggered("on_new_canvas")
            .status_tip("tip-canvas-new"),
    ),
    ItemSpec::Action(
        ActionSpec::new("New Default Canvas", "menu-canvas-new-default")
            .shortcut("Ctrl+Shift+N")
            .triggered("on_new_default_canvas")
            .status_tip("tip-canvas-new-default"),
    ),
    ItemSpec::Separator,
    ItemSpec::Action(
        ActionSpec::new("Rename", "menu-canvas-rename")
            .shortcut("F2")
            .triggered("on_rename_canvas"),
    ),
    ItemSpec::Action(
        ActionSpec::new("Cycle Aspect Ratio", "menu-canvas-cycle-aspect")
            .shortcut("Ctrl+R")
            .triggered("on_cycle_aspect_ratio")
            .status_tip("tip-canvas-cycle-aspect"),
    ),
    ItemSpec::Action(
        ActionSpec::new("Close", "menu-canvas-close")
            .shortcut("Ctrl+W")
            .triggered("on_close_canvas"),
    ),
];

const HELP: &[ItemSpec] = &[
    ItemSpec::Action(ActionSpec::new("About", "menu-help-about").triggered("on_about")),
    ItemSpec::Submenu {
        name: "More",
        text: "menu-help-more",
        items: &[
            ItemSpec::Action(ActionSpec::new("Docs", "menu-help-docs").triggered("on_docs")),
            ItemSpec::Action(
                ActionSpec::new("Check for Updates", "menu-help-check-updates")
                    .triggered("on_check_updates"),
            ),
        ],
    },
];

pub const MENU_SPEC: &[MenuSpec] = &[
    MenuSpec {
        name: "File",
        text: "menu-file",
        items: FILE,
    },
    MenuSpec {
        name: "Edit",
        text: "menu-edit",
        items: EDIT,
    },
    MenuSpec {
        name: "Canvas",
        text: "menu-canvas",
        items: CANVAS,
    },
    MenuSpec {
        name: "Help",
        text: "menu-help",
        items: HELP,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::i18n::fluent::I18n;
    use crate::ui::menu_bar::MenuBar;
    use iced::keyboard::{Key, Modifiers};

    fn menu_bar() -> MenuBar<Action> {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        MenuBar::build(MENU_SPEC, &i18n, Action::from_handler)
    }

    #[test]
    fn unknown_handlers_resolve_to_none() {
        for handler in ["on_open", "on_save", "on_undo", "on_redo", "on_docs", "on_check_updates", ""] {
            assert_eq!(Action::from_handler(handler), None, "{handler}");
        }
        assert_eq!(Action::from_handler("close"), Some(Action::Exit));
    }

    #[test]
    fn wires_window_actions_only() {
        let bar = menu_bar();
        let wired = |path: &str| bar.item(path).expect(path).is_wired();

        for path in [
            "File/Exit",
            "Canvas/New Canvas",
            "Canvas/New Default Canvas",
            "Canvas/Rename",
            "Canvas/Cycle Aspect Ratio",
            "Canvas/Close",
            "Help/About",
        ] {
            assert!(wired(path), "{path} should be wired");
        }
        for path in [
            "File/Open",
            "File/Save",
            "Edit/Undo",
            "Edit/Redo",
            "Help/More/Docs",
            "Help/More/Check for Updates",
        ] {
            assert!(!wired(path), "{path} should be unwired");
        }
    }

    #[test]
    fn titles_are_translated() {
        let bar = menu_bar();
        let titles: Vec<&str> = bar.menus().iter().map(|menu| menu.label.as_str()).collect();
        assert_eq!(titles, ["File", "Edit", "Canvas", "Help"]);
    }

    #[test]
    fn shortcuts_dispatch_actions() {
        let bar = menu_bar();
        let key = |c: &str| Key::Character(c.into());

        assert_eq!(
            bar.action_for_key(&key("n"), Modifiers::COMMAND),
            Some(Action::NewCanvas)
        );
        assert_eq!(
            bar.action_for_key(&key("N"), Modifiers::COMMAND | Modifiers::SHIFT),
            Some(Action::NewDefaultCanvas)
        );
        assert_eq!(
            bar.action_for_key(&key("q"), Modifiers::COMMAND),
            Some(Action::Exit)
        );
        assert_eq!(bar.action_for_key(&key("s"), Modifiers::COMMAND), None);
    }
}
