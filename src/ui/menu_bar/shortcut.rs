// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts written as `"Ctrl+Shift+N"`.
//!
//! `Ctrl` maps to the platform command modifier, so `Ctrl+S` is `⌘S` on
//! macOS.

use iced::keyboard::{self, key::Named, Key, Modifiers};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Trigger {
    Character(String),
    Named(Named),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    trigger: Trigger,
    command: bool,
    shift: bool,
    alt: bool,
}

impl Shortcut {
    /// Whether a key press with `modifiers` fires this shortcut. Modifiers
    /// must match exactly, so `Ctrl+N` does not fire on `Ctrl+Shift+N`.
    pub fn matches(&self, key: &Key, modifiers: Modifiers) -> bool {
        if modifiers.command() != self.command
            || modifiers.shift() != self.shift
            || modifiers.alt() != self.alt
        {
            return false;
        }

        match (&self.trigger, key.as_ref()) {
            (Trigger::Character(expected), keyboard::Key::Character(pressed)) => {
                pressed.to_lowercase() == *expected
            }
            (Trigger::Named(expected), keyboard::Key::Named(pressed)) => *expected == pressed,
            _ => false,
        }
    }
}

/// Error returned for shortcut strings that cannot be bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseShortcutError(String);

impl fmt::Display for ParseShortcutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid shortcut '{}'", self.0)
    }
}

impl std::error::Error for ParseShortcutError {}

const NAMED_KEYS: &[(&str, Named)] = &[
    ("F1", Named::F1),
    ("F2", Named::F2),
    ("F3", Named::F3),
    ("F4", Named::F4),
    ("F5", Named::F5),
    ("F6", Named::F6),
    ("F7", Named::F7),
    ("F8", Named::F8),
    ("F9", Named::F9),
    ("F10", Named::F10),
    ("F11", Named::F11),
    ("F12", Named::F12),
    ("Esc", Named::Escape),
    ("Escape", Named::Escape),
    ("Enter", Named::Enter),
    ("Return", Named::Enter),
    ("Tab", Named::Tab),
    ("Space", Named::Space),
    ("Del", Named::Delete),
    ("Delete", Named::Delete),
    ("Backspace", Named::Backspace),
    ("Home", Named::Home),
    ("End", Named::End),
    ("PgUp", Named::PageUp),
    ("PgDown", Named::PageDown),
    ("Left", Named::ArrowLeft),
    ("Right", Named::ArrowRight),
    ("Up", Named::ArrowUp),
    ("Down", Named::ArrowDown),
];

impl FromStr for Shortcut {
    type Err = ParseShortcutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseShortcutError(s.to_string());
        let mut parts: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = parts.pop().filter(|key| !key.is_empty()).ok_or_else(invalid)?;

        let mut shortcut = Shortcut {
            trigger: Trigger::Character(String::new()),
            command: false,
            shift: false,
            alt: false,
        };

        for modifier in parts {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" | "cmd" | "command" => shortcut.command = true,
                "shift" => shortcut.shift = true,
                "alt" | "option" => shortcut.alt = true,
                _ => return Err(invalid()),
            }
        }

        shortcut.trigger = if let Some((_, named)) = NAMED_KEYS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
        {
            Trigger::Named(*named)
        } else if key.chars().count() == 1 {
            Trigger::Character(key.to_lowercase())
        } else {
            return Err(invalid());
        };

        Ok(shortcut)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.command {
            f.write_str(if cfg!(target_os = "macos") { "⌘+" } else { "Ctrl+" })?;
        }
        if self.shift {
            f.write_str("Shift+")?;
        }
        if self.alt {
            f.write_str("Alt+")?;
        }
        match &self.trigger {
            Trigger::Character(c) => f.write_str(&c.to_uppercase()),
            Trigger::Named(named) => {
                let name = NAMED_KEYS
                    .iter()
                    .find(|(_, candidate)| candidate == named)
                    .map_or("?", |(name, _)| name);
                f.write_str(name)
            }
        }
    }
}
