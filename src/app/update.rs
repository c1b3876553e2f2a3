// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component updates return events; the handlers here decide what each
//! event means for the window as a whole.

use super::config::PlusTabAction;
use super::{Action, App, Message};
use crate::domain::naming::unique_label;
use crate::ui::about;
use crate::ui::image_pane::{self, Event as ImagePaneEvent};
use crate::ui::menu_bar::{self, Event as MenuEvent};
use crate::ui::new_canvas_dialog::{self, Event as DialogEvent};
use crate::ui::side_pane::{self, Event as SidePaneEvent};
use iced::keyboard::{Key, Modifiers};
use iced::widget::{operation, Id};
use iced::Task;

pub(super) fn handle_menu_message(app: &mut App, message: menu_bar::Message) -> Task<Message> {
    match app.menu_bar.update(message) {
        MenuEvent::Triggered(action) => perform(app, action),
        MenuEvent::None => Task::none(),
    }
}

pub(super) fn handle_side_pane_message(app: &mut App, message: &side_pane::Message) -> Task<Message> {
    match side_pane::update(message) {
        SidePaneEvent::NewCanvasRequested => perform(app, Action::NewCanvas),
        SidePaneEvent::CycleAspectRatioRequested => perform(app, Action::CycleAspectRatio),
    }
}

pub(super) fn handle_image_pane_message(
    app: &mut App,
    message: image_pane::Message,
) -> Task<Message> {
    match app.image_pane.update(message) {
        ImagePaneEvent::None => Task::none(),
        ImagePaneEvent::CreateRequested => match app.config.workspace.plus_tab_action {
            PlusTabAction::Dialog => open_new_canvas_dialog(app),
            PlusTabAction::Default => create_default_canvas(app),
        },
        ImagePaneEvent::RenameStarted => operation::focus(Id::new(image_pane::RENAME_INPUT_ID)),
    }
}

pub(super) fn handle_dialog_message(
    app: &mut App,
    message: new_canvas_dialog::Message,
) -> Task<Message> {
    let Some(dialog) = app.dialog.as_mut() else {
        return Task::none();
    };

    match dialog.update(message) {
        DialogEvent::None => {}
        DialogEvent::Accepted { name, aspect } => {
            app.dialog = None;
            let label = unique_label(&name, app.image_pane.labels());
            app.image_pane.add_tab(label, aspect);
        }
        DialogEvent::Cancelled => {
            app.dialog = None;
            tracing::debug!("new canvas dialog cancelled");
        }
    }
    Task::none()
}

pub(super) fn handle_about_message(app: &mut App, message: &about::Message) -> Task<Message> {
    match about::update(message) {
        about::Event::Closed => app.about_open = false,
    }
    Task::none()
}

/// Shortcuts are inert while a modal is in front.
pub(super) fn handle_key_press(app: &mut App, key: &Key, modifiers: Modifiers) -> Task<Message> {
    if app.dialog.is_some() || app.about_open {
        return Task::none();
    }
    match app.menu_bar.action_for_key(key, modifiers) {
        Some(action) => {
            app.menu_bar.close();
            perform(app, action)
        }
        None => Task::none(),
    }
}

/// Dismisses the front-most layer: open menu, then dialogs, then an
/// inline rename.
pub(super) fn handle_escape(app: &mut App) -> Task<Message> {
    if app.menu_bar.is_open() {
        app.menu_bar.close();
    } else if app.dialog.is_some() {
        return handle_dialog_message(app, new_canvas_dialog::Message::Cancel);
    } else if app.about_open {
        app.about_open = false;
    } else if app.image_pane.is_renaming() {
        return handle_image_pane_message(app, image_pane::Message::RenameCancel);
    }
    Task::none()
}

fn perform(app: &mut App, action: Action) -> Task<Message> {
    tracing::info!(?action, "menu action");
    match action {
        Action::Exit => iced::exit(),
        Action::About => {
            app.about_open = true;
            Task::none()
        }
        Action::NewCanvas => open_new_canvas_dialog(app),
        Action::NewDefaultCanvas => create_default_canvas(app),
        Action::RenameCanvas => {
            if app.image_pane.begin_rename_current() {
                operation::focus(Id::new(image_pane::RENAME_INPUT_ID))
            } else {
                Task::none()
            }
        }
        Action::CycleAspectRatio => {
            app.image_pane.cycle_current_aspect_ratio();
            Task::none()
        }
        Action::CloseCanvas => {
            app.image_pane.close_current();
            Task::none()
        }
    }
}

fn open_new_canvas_dialog(app: &mut App) -> Task<Message> {
    app.dialog = Some(new_canvas_dialog::State::new(
        app.next_default_label(),
        app.default_aspect_ratio(),
    ));
    operation::focus(Id::new(new_canvas_dialog::NAME_INPUT_ID))
}

fn create_default_canvas(app: &mut App) -> Task<Message> {
    let label = app.next_default_label();
    let aspect = app.default_aspect_ratio();
    app.image_pane.add_tab(label, aspect);
    Task::none()
}
