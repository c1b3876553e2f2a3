// SPDX-License-Identifier: MPL-2.0
//! Declarative menu descriptions.
//!
//! A menu is described once as static data and translated into a
//! [`MenuBar`](super::MenuBar) at startup. `name` fields form the registry
//! path (`"File/Open"`) and stay the same in every language; `text` fields
//! are Fluent message ids.

/// One top-level menu.
#[derive(Debug, Clone, Copy)]
pub struct MenuSpec {
    pub name: &'static str,
    pub text: &'static str,
    pub items: &'static [ItemSpec],
}

#[derive(Debug, Clone, Copy)]
pub enum ItemSpec {
    Action(ActionSpec),
    Separator,
    Submenu {
        name: &'static str,
        text: &'static str,
        items: &'static [ItemSpec],
    },
}

/// A clickable entry. `triggered` names the handler to wire it to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    pub name: &'static str,
    pub text: &'static str,
    pub shortcut: Option<&'static str>,
    pub triggered: Option<&'static str>,
    pub enabled: bool,
    pub checkable: bool,
    pub checked: bool,
    pub status_tip: Option<&'static str>,
}

impl ActionSpec {
    pub const fn new(name: &'static str, text: &'static str) -> Self {
        Self {
            name,
            text,
            shortcut: None,
            triggered: None,
            enabled: true,
            checkable: false,
            checked: false,
            status_tip: None,
        }
    }

    pub const fn shortcut(mut self, shortcut: &'static str) -> Self {
        self.shortcut = Some(shortcut);
        self
    }

    pub const fn triggered(mut self, handler: &'static str) -> Self {
        self.triggered = Some(handler);
        self
    }

    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Makes the entry a toggle, initially `checked`.
    pub const fn checkable(mut self, checked: bool) -> Self {
        self.checkable = true;
        self.checked = checked;
        self
    }

    /// Fluent id of the hint shown when hovering the entry.
    pub const fn status_tip(mut self, tip: &'static str) -> Self {
        self.status_tip = Some(tip);
        self
    }
}

impl From<ActionSpec> for ItemSpec {
    fn from(action: ActionSpec) -> Self {
        ItemSpec::Action(action)
    }
}
