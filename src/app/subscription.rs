// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Shortcuts only fire for key presses no widget captured, so typing in a
//! text field never triggers a menu action. Escape is the exception: it is
//! always forwarded, since it dismisses whatever is in front.

use super::Message;
use iced::keyboard::{self, key::Named, Key, Modifiers};
use iced::{event, Event, Subscription};

pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            route_key(key, modifiers, status)
        }
        _ => None,
    })
}

fn route_key(key: Key, modifiers: Modifiers, status: event::Status) -> Option<Message> {
    if matches!(key, Key::Named(Named::Escape)) {
        return Some(Message::EscapePressed);
    }

    match status {
        event::Status::Ignored => Some(Message::KeyPressed { key, modifiers }),
        event::Status::Captured => None,
    }
}
