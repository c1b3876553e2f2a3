// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the panes.
//!
//! The `App` struct wires together the menu bar, the side pane and the
//! tabbed image pane, and owns the modal dialogs. Policy decisions such as
//! what the "+" tab creates or which shortcut exits live in the update
//! loop so user-facing behavior is easy to audit.

pub mod action;
pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use action::{Action, MENU_SPEC};
pub use message::{Flags, Message};

use crate::domain::aspect::AspectRatio;
use crate::i18n::fluent::I18n;
use crate::ui::image_pane;
use crate::ui::menu_bar::MenuBar;
use crate::ui::new_canvas_dialog;
use crate::ui::theming::AppTheme;
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::RefCell;
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme: AppTheme,
    menu_bar: MenuBar<Action>,
    image_pane: image_pane::State,
    /// Open "New Canvas" dialog, if any.
    dialog: Option<new_canvas_dialog::State>,
    about_open: bool,
    /// Fluent key of a startup problem shown under the workspace.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("canvases", &self.image_pane.labels())
            .field("current", &self.image_pane.current_index())
            .field("dialog_open", &self.dialog.is_some())
            .field("about_open", &self.about_open)
            .finish()
    }
}

/// Builds the window settings from the persisted size.
pub fn window_settings(config: &Config) -> window::Settings {
    let (width, height) = config.window.clamped_size();

    window::Settings {
        size: iced::Size::new(width, height),
        min_size: Some(iced::Size::new(
            config::defaults::MIN_WINDOW_WIDTH,
            config::defaults::MIN_WINDOW_HEIGHT,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    paths::init_cli_overrides(flags.config_dir);
    let (config, config_warning) = config::load();
    let settings = window_settings(&config);

    // iced 0.14 requires an `Fn` boot closure; the startup state is only
    // consumed once.
    let boot_state = RefCell::new(Some((flags.lang, config, config_warning)));
    let boot = move || match boot_state.borrow_mut().take() {
        Some((lang, config, warning)) => {
            let i18n = I18n::new(lang, &config);
            (App::new(i18n, config, warning), Task::none())
        }
        None => (App::default(), Task::none()),
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(settings)
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::new(I18n::default(), Config::default(), None)
    }
}

impl App {
    fn new(i18n: I18n, config: Config, config_warning: Option<String>) -> Self {
        let theme = AppTheme::new(config.general.theme_mode);
        let menu_bar = MenuBar::build(MENU_SPEC, &i18n, Action::from_handler);

        if let Some(key) = &config_warning {
            tracing::warn!(key = %key, "starting with default settings");
        }
        tracing::info!(
            locale = %i18n.current_locale(),
            theme = ?config.general.theme_mode,
            "application started"
        );

        let mut app = Self {
            image_pane: image_pane::State::new(theme.colors.canvas_fill),
            i18n,
            config,
            theme,
            menu_bar,
            dialog: None,
            about_open: false,
            config_warning,
        };
        app.sync_menu();
        app
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match self.image_pane.current_label() {
            Some(label) => format!("{label} - {app_name}"),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::Menu(menu_message) => update::handle_menu_message(self, menu_message),
            Message::SidePane(side_message) => update::handle_side_pane_message(self, &side_message),
            Message::ImagePane(pane_message) => update::handle_image_pane_message(self, pane_message),
            Message::NewCanvasDialog(dialog_message) => {
                update::handle_dialog_message(self, dialog_message)
            }
            Message::About(about_message) => update::handle_about_message(self, &about_message),
            Message::KeyPressed { key, modifiers } => update::handle_key_press(self, &key, modifiers),
            Message::EscapePressed => update::handle_escape(self),
        };
        self.sync_menu();
        task
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            scheme: &self.theme.colors,
            menu_bar: &self.menu_bar,
            image_pane: &self.image_pane,
            dialog: self.dialog.as_ref(),
            about_open: self.about_open,
            config_warning: self.config_warning.as_deref(),
        })
    }

    /// Label the next canvas gets when the user does not choose one.
    fn next_default_label(&self) -> String {
        crate::domain::naming::unique_label(
            &self.i18n.tr("canvas-default-name"),
            self.image_pane.labels(),
        )
    }

    fn default_aspect_ratio(&self) -> AspectRatio {
        self.config.workspace.default_aspect_ratio
    }

    /// Canvas entries only make sense while a canvas is open.
    fn sync_menu(&mut self) {
        let has_canvas = !self.image_pane.is_empty();
        for path in ["Canvas/Rename", "Canvas/Cycle Aspect Ratio", "Canvas/Close"] {
            self.menu_bar.set_enabled(path, has_canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::PlusTabAction;
    use crate::domain::aspect::PRESETS;
    use crate::ui::theming::ThemeMode;
    use crate::ui::{about, image_pane, menu_bar, new_canvas_dialog, side_pane};
    use iced::keyboard::{key::Named, Key, Modifiers};

    fn english(config: Config) -> App {
        let i18n = I18n::new(Some("en-US".into()), &config);
        App::new(i18n, config, None)
    }

    fn app() -> App {
        english(Config::default())
    }

    fn ratio(width: u32, height: u32) -> AspectRatio {
        AspectRatio::new(width, height).expect("positive ratio")
    }

    fn press_plus(app: &mut App) {
        let plus = app.image_pane.strip().add_trigger_index();
        let _ = app.update(Message::ImagePane(image_pane::Message::TabPressed(plus)));
    }

    fn accept_dialog(app: &mut App, name: &str, aspect: AspectRatio) {
        let _ = app.update(Message::NewCanvasDialog(
            new_canvas_dialog::Message::NameChanged(name.into()),
        ));
        let _ = app.update(Message::NewCanvasDialog(
            new_canvas_dialog::Message::SelectAspect(aspect),
        ));
        let _ = app.update(Message::NewCanvasDialog(new_canvas_dialog::Message::Accept));
    }

    #[test]
    fn starts_empty_with_canvas_entries_disabled() {
        let app = app();
        assert!(app.image_pane.is_empty());
        assert!(!app.menu_bar.item("Canvas/Close").expect("registered").enabled);
        assert!(app.menu_bar.item("Canvas/New Canvas").expect("registered").enabled);
        assert_eq!(app.title(), "PEdit");
    }

    #[test]
    fn plus_tab_opens_dialog_by_default() {
        let mut app = app();
        press_plus(&mut app);
        assert!(app.dialog.is_some());
        assert!(app.image_pane.is_empty());

        accept_dialog(&mut app, "", ratio(16, 9));
        assert!(app.dialog.is_none());
        assert_eq!(app.image_pane.labels(), ["Untitled"]);
        assert_eq!(
            app.image_pane.current_canvas().map(|c| c.aspect_ratio()),
            Some(ratio(16, 9))
        );
        assert_eq!(app.title(), "Untitled - PEdit");
    }

    #[test]
    fn blank_names_get_the_next_numbered_variant() {
        let mut app = app();
        press_plus(&mut app);
        accept_dialog(&mut app, "", ratio(1, 1));
        press_plus(&mut app);
        accept_dialog(&mut app, "  ", ratio(4, 3));
        assert_eq!(app.image_pane.labels(), ["Untitled", "Untitled 2"]);
    }

    #[test]
    fn plus_tab_can_create_default_canvas_directly() {
        let mut config = Config::default();
        config.workspace.plus_tab_action = PlusTabAction::Default;
        config.workspace.default_aspect_ratio = ratio(9, 16);
        let mut app = english(config);

        press_plus(&mut app);
        assert!(app.dialog.is_none());
        assert_eq!(app.image_pane.labels(), ["Untitled"]);
        assert_eq!(
            app.image_pane.current_canvas().map(|c| c.aspect_ratio()),
            Some(ratio(9, 16))
        );
    }

    #[test]
    fn typed_names_are_made_unique_on_creation() {
        let mut app = app();
        for _ in 0..2 {
            press_plus(&mut app);
            accept_dialog(&mut app, "Sketch", ratio(1, 1));
        }
        press_plus(&mut app);
        accept_dialog(&mut app, "", ratio(1, 1));
        press_plus(&mut app);
        accept_dialog(&mut app, "Untitled", ratio(1, 1));
        assert_eq!(
            app.image_pane.labels(),
            ["Sketch", "Sketch 2", "Untitled", "Untitled 2"]
        );
    }

    #[test]
    fn pressing_plus_with_direct_creation_never_drags() {
        let mut config = Config::default();
        config.workspace.plus_tab_action = PlusTabAction::Default;
        let mut app = english(config);
        press_plus(&mut app);
        press_plus(&mut app);
        assert_eq!(app.image_pane.labels(), ["Untitled", "Untitled 2"]);

        press_plus(&mut app);
        let _ = app.update(Message::ImagePane(image_pane::Message::TabHovered(0)));
        let _ = app.update(Message::ImagePane(image_pane::Message::TabReleased(0)));
        assert_eq!(
            app.image_pane.labels(),
            ["Untitled", "Untitled 2", "Untitled 3"]
        );
        assert_eq!(app.image_pane.current_label(), Some("Untitled 3"));
    }

    #[test]
    fn dialog_cancel_creates_nothing() {
        let mut app = app();
        let _ = app.update(Message::SidePane(side_pane::Message::NewCanvas));
        assert!(app.dialog.is_some());
        let _ = app.update(Message::NewCanvasDialog(new_canvas_dialog::Message::Cancel));
        assert!(app.dialog.is_none());
        assert!(app.image_pane.is_empty());
    }

    #[test]
    fn dialog_preselects_configured_ratio() {
        let mut config = Config::default();
        config.workspace.default_aspect_ratio = ratio(3, 2);
        let mut app = english(config);
        let _ = app.update(Message::Menu(menu_bar::Message::Activate(
            "Canvas/New Canvas".into(),
        )));
        assert_eq!(app.dialog.as_ref().map(|d| d.selected()), Some(ratio(3, 2)));
    }

    #[test]
    fn shortcuts_drive_canvas_actions() {
        let mut app = app();
        let ctrl = |c: &str| Message::KeyPressed {
            key: Key::Character(c.into()),
            modifiers: Modifiers::COMMAND,
        };

        let _ = app.update(Message::KeyPressed {
            key: Key::Character("N".into()),
            modifiers: Modifiers::COMMAND | Modifiers::SHIFT,
        });
        assert_eq!(app.image_pane.len(), 1);

        let _ = app.update(ctrl("r"));
        assert_eq!(
            app.image_pane.current_canvas().map(|c| c.aspect_ratio()),
            Some(PRESETS[1])
        );

        let _ = app.update(ctrl("w"));
        assert!(app.image_pane.is_empty());
    }

    #[test]
    fn shortcuts_are_ignored_behind_modals() {
        let mut app = app();
        let _ = app.update(Message::Menu(menu_bar::Message::Activate("Help/About".into())));
        assert!(app.about_open);

        let _ = app.update(Message::KeyPressed {
            key: Key::Character("N".into()),
            modifiers: Modifiers::COMMAND | Modifiers::SHIFT,
        });
        assert!(app.image_pane.is_empty());

        let _ = app.update(Message::About(about::Message::Close));
        assert!(!app.about_open);
    }

    #[test]
    fn escape_dismisses_front_most_layer() {
        let mut app = app();
        let _ = app.update(Message::SidePane(side_pane::Message::NewCanvas));
        let _ = app.update(Message::Menu(menu_bar::Message::TitlePressed(0)));

        let _ = app.update(Message::EscapePressed);
        assert!(!app.menu_bar.is_open());
        assert!(app.dialog.is_some());

        let _ = app.update(Message::EscapePressed);
        assert!(app.dialog.is_none());
    }

    #[test]
    fn rename_via_menu_and_inline_field() {
        let mut app = app();
        let _ = app.update(Message::Menu(menu_bar::Message::Activate(
            "Canvas/New Default Canvas".into(),
        )));
        let _ = app.update(Message::KeyPressed {
            key: Key::Named(Named::F2),
            modifiers: Modifiers::empty(),
        });
        assert!(app.image_pane.is_renaming());

        let _ = app.update(Message::ImagePane(image_pane::Message::RenameInput(
            "Poster".into(),
        )));
        let _ = app.update(Message::ImagePane(image_pane::Message::RenameSubmit));
        assert_eq!(app.image_pane.labels(), ["Poster"]);
    }

    #[test]
    fn unwired_menu_entries_do_nothing() {
        let mut app = app();
        let _ = app.update(Message::Menu(menu_bar::Message::Activate("File/Open".into())));
        let _ = app.update(Message::Menu(menu_bar::Message::Activate(
            "Help/More/Docs".into(),
        )));
        assert!(app.image_pane.is_empty());
        assert!(app.dialog.is_none() && !app.about_open);
    }

    #[test]
    fn theme_follows_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let app = english(config);
        assert!(matches!(app.theme(), Theme::Light));
        assert!(matches!(App::default().theme(), Theme::Dark));
    }

    #[test]
    fn window_settings_use_clamped_size() {
        let mut config = Config::default();
        config.window.width = 10.0;
        let settings = window_settings(&config);
        assert_eq!(settings.size.width, config::defaults::MIN_WINDOW_WIDTH);
        assert!(settings.min_size.is_some());
    }
}
