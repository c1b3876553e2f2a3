// SPDX-License-Identifier: MPL-2.0
//! Menu bar built from a declarative [`MenuSpec`] list.
//!
//! [`MenuBar::build`] translates labels, parses shortcuts and wires each
//! `triggered` handler name to an action through a resolver. Names the
//! resolver does not know are left unwired: the entry is still shown and
//! still registered under its path, it simply does nothing when activated.
//!
//! Every menu, submenu and entry is reachable by a `/`-separated path made
//! of the untranslated names, e.g. `"File/Open"` or `"Help/More/Docs"`.

pub mod shortcut;
pub mod spec;

pub use shortcut::{ParseShortcutError, Shortcut};
pub use spec::{ActionSpec, ItemSpec, MenuSpec};

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{border, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::keyboard::{Key, Modifiers};
use iced::widget::{
    button, mouse_area, opaque, tooltip, Column, Container, Row, Space, Stack, Text,
};
use iced::{Element, Length, Padding};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    TitlePressed(usize),
    TitleHovered(usize),
    ToggleSubmenu(String),
    Activate(String),
    Dismiss,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<A> {
    None,
    Triggered(A),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: &'a ColorScheme,
}

/// A clickable menu entry after translation and wiring.
#[derive(Debug, Clone)]
pub struct MenuItem<A> {
    pub path: String,
    pub label: String,
    pub shortcut: Option<Shortcut>,
    pub action: Option<A>,
    pub enabled: bool,
    pub checkable: bool,
    pub checked: bool,
    pub status_tip: Option<String>,
}

impl<A> MenuItem<A> {
    pub fn is_wired(&self) -> bool {
        self.action.is_some()
    }
}

#[derive(Debug, Clone)]
pub enum MenuEntry<A> {
    Item(MenuItem<A>),
    Separator,
    Submenu(Menu<A>),
}

/// A top-level menu or a nested submenu.
#[derive(Debug, Clone)]
pub struct Menu<A> {
    pub path: String,
    pub label: String,
    pub entries: Vec<MenuEntry<A>>,
}

#[derive(Debug, Clone)]
pub struct MenuBar<A> {
    menus: Vec<Menu<A>>,
    open: Option<usize>,
    expanded: HashSet<String>,
}

impl<A: Clone> MenuBar<A> {
    /// Builds the bar. `resolve` maps a handler name to its action, or
    /// `None` when the window has no such handler.
    pub fn build(spec: &[MenuSpec], i18n: &I18n, resolve: impl Fn(&str) -> Option<A>) -> Self {
        let menus = spec
            .iter()
            .map(|menu| Menu {
                path: menu.name.to_string(),
                label: i18n.tr(menu.text),
                entries: build_entries(menu.name, menu.items, i18n, &resolve),
            })
            .collect();

        Self {
            menus,
            open: None,
            expanded: HashSet::new(),
        }
    }

    pub fn update(&mut self, message: Message) -> Event<A> {
        match message {
            Message::TitlePressed(index) => {
                self.open = if self.open == Some(index) || index >= self.menus.len() {
                    None
                } else {
                    Some(index)
                };
                self.expanded.clear();
                Event::None
            }
            Message::TitleHovered(index) => {
                if self.open.is_some() && index < self.menus.len() && self.open != Some(index) {
                    self.open = Some(index);
                    self.expanded.clear();
                }
                Event::None
            }
            Message::ToggleSubmenu(path) => {
                if !self.expanded.remove(&path) {
                    self.expanded.insert(path);
                }
                Event::None
            }
            Message::Activate(path) => self.activate(&path),
            Message::Dismiss => {
                self.close();
                Event::None
            }
        }
    }

    /// Runs the entry at `path` as if it had been clicked.
    pub fn activate(&mut self, path: &str) -> Event<A> {
        let Some(item) = find_item_mut(&mut self.menus, path) else {
            return Event::None;
        };
        if !item.enabled {
            return Event::None;
        }
        if item.checkable {
            item.checked = !item.checked;
        }
        let action = item.action.clone();
        self.close();

        match action {
            Some(action) => {
                tracing::debug!(path, "menu action triggered");
                Event::Triggered(action)
            }
            None => {
                tracing::debug!(path, "menu entry is not wired");
                Event::None
            }
        }
    }

    /// Action bound to the shortcut `key` + `modifiers`, if any enabled and
    /// wired entry declares it.
    pub fn action_for_key(&self, key: &Key, modifiers: Modifiers) -> Option<A> {
        let mut found = None;
        walk(&self.menus, &mut |entry| {
            if found.is_some() {
                return;
            }
            if let MenuEntry::Item(item) = entry {
                let bound = item
                    .shortcut
                    .as_ref()
                    .is_some_and(|shortcut| shortcut.matches(key, modifiers));
                if bound && item.enabled {
                    found = item.action.clone();
                }
            }
        });
        found
    }
}

impl<A> MenuBar<A> {
    pub fn menus(&self) -> &[Menu<A>] {
        &self.menus
    }

    pub fn item(&self, path: &str) -> Option<&MenuItem<A>> {
        let mut found = None;
        walk(&self.menus, &mut |entry| {
            if let MenuEntry::Item(item) = entry {
                if found.is_none() && item.path == path {
                    found = Some(item);
                }
            }
        });
        found
    }

    /// Whether `path` names a menu, submenu or entry.
    pub fn contains(&self, path: &str) -> bool {
        if self.menus.iter().any(|menu| menu.path == path) {
            return true;
        }
        let mut found = false;
        walk(&self.menus, &mut |entry| match entry {
            MenuEntry::Item(item) => found |= item.path == path,
            MenuEntry::Submenu(menu) => found |= menu.path == path,
            MenuEntry::Separator => {}
        });
        found
    }

    pub fn set_enabled(&mut self, path: &str, enabled: bool) -> bool {
        match find_item_mut(&mut self.menus, path) {
            Some(item) => {
                item.enabled = enabled;
                true
            }
            None => false,
        }
    }

    pub fn open_menu(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn close(&mut self) {
        self.open = None;
        self.expanded.clear();
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let scheme = *ctx.scheme;

        let titles = self
            .menus
            .iter()
            .enumerate()
            .fold(Row::new().height(Length::Fill), |row, (index, menu)| {
                let title = button(
                    Container::new(Text::new(menu.label.as_str()).size(typography::BODY))
                        .center_x(Length::Fill)
                        .center_y(Length::Fill),
                )
                .width(Length::Fixed(sizing::MENU_TITLE_WIDTH))
                .height(Length::Fill)
                .padding(0.0)
                .on_press(Message::TitlePressed(index))
                .style(styles::button::menu_item(scheme, self.open == Some(index)));

                row.push(mouse_area(title).on_enter(Message::TitleHovered(index)))
            });

        Container::new(titles)
            .width(Length::Fill)
            .height(Length::Fixed(sizing::MENU_BAR_HEIGHT))
            .padding([0.0, spacing::XXS])
            .style(styles::container::menu_bar(scheme))
            .into()
    }

    /// Dropdown of the open menu, meant to be stacked over the whole
    /// window. The strip under the bar stays uncovered so titles keep
    /// receiving hovers; anywhere else outside the list dismisses it.
    pub fn overlay<'a>(&'a self, ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
        let index = self.open?;
        let menu = self.menus.get(index)?;
        let scheme = *ctx.scheme;

        let list = Container::new(self.entries_view(&menu.entries, 0, scheme))
            .width(Length::Fixed(sizing::MENU_DROPDOWN_WIDTH))
            .padding(spacing::XXS)
            .style(styles::container::dropdown(scheme));

        let positioned = Container::new(list).padding(Padding {
            top: sizing::MENU_BAR_HEIGHT,
            right: 0.0,
            bottom: 0.0,
            left: spacing::XXS + index as f32 * sizing::MENU_TITLE_WIDTH,
        });

        let dismiss = Column::new()
            .push(Space::new().height(Length::Fixed(sizing::MENU_BAR_HEIGHT)))
            .push(opaque(
                mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
                    .on_press(Message::Dismiss),
            ));

        Some(
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(dismiss)
                .push(positioned)
                .into(),
        )
    }

    fn entries_view<'a>(
        &'a self,
        entries: &'a [MenuEntry<A>],
        depth: usize,
        scheme: ColorScheme,
    ) -> Column<'a, Message> {
        entries
            .iter()
            .fold(Column::new().width(Length::Fill), |column, entry| match entry {
                MenuEntry::Item(item) => column.push(item_view(item, scheme)),
                MenuEntry::Separator => column.push(
                    Container::new(
                        Container::new(Space::new().width(Length::Fill))
                            .height(Length::Fixed(border::WIDTH_SM))
                            .style(styles::container::separator(scheme)),
                    )
                    .padding([spacing::XXS, 0.0]),
                ),
                MenuEntry::Submenu(submenu) => {
                    let expanded = self.expanded.contains(&submenu.path);
                    let header = button(
                        Row::new()
                            .height(Length::Fill)
                            .align_y(Vertical::Center)
                            .push(Text::new(submenu.label.as_str()).size(typography::BODY))
                            .push(Space::new().width(Length::Fill))
                            .push(Text::new(if expanded { "▾" } else { "▸" }).size(typography::CAPTION)),
                    )
                    .width(Length::Fill)
                    .height(Length::Fixed(sizing::MENU_ITEM_HEIGHT))
                    .padding([0.0, spacing::XS])
                    .on_press(Message::ToggleSubmenu(submenu.path.clone()))
                    .style(styles::button::menu_item(scheme, expanded));

                    let column = column.push(header);
                    if expanded {
                        column.push(
                            Container::new(self.entries_view(&submenu.entries, depth + 1, scheme))
                                .padding(Padding {
                                    left: spacing::SM,
                                    ..Padding::ZERO
                                }),
                        )
                    } else {
                        column
                    }
                }
            })
    }
}

fn item_view<'a, A>(item: &'a MenuItem<A>, scheme: ColorScheme) -> Element<'a, Message> {
    let mark = if item.checkable && item.checked { "✓" } else { "" };
    let shortcut = item
        .shortcut
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();

    let row = Row::new()
        .height(Length::Fill)
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(
            Container::new(Text::new(mark).size(typography::CAPTION))
                .width(Length::Fixed(spacing::SM)),
        )
        .push(Text::new(item.label.as_str()).size(typography::BODY))
        .push(Space::new().width(Length::Fill))
        .push(Text::new(shortcut).size(typography::CAPTION));

    let entry = button(row)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::MENU_ITEM_HEIGHT))
        .padding([0.0, spacing::XS])
        .on_press_maybe(item.enabled.then(|| Message::Activate(item.path.clone())))
        .style(styles::button::menu_item(scheme, false));

    match &item.status_tip {
        Some(tip) => tooltip(
            entry,
            Text::new(tip.as_str()).size(typography::CAPTION),
            tooltip::Position::Right,
        )
        .padding(spacing::XXS)
        .style(styles::container::dropdown(scheme))
        .into(),
        None => entry.into(),
    }
}

fn build_entries<A>(
    prefix: &str,
    items: &[ItemSpec],
    i18n: &I18n,
    resolve: &impl Fn(&str) -> Option<A>,
) -> Vec<MenuEntry<A>> {
    items
        .iter()
        .map(|item| match item {
            ItemSpec::Separator => MenuEntry::Separator,
            ItemSpec::Submenu { name, text, items } => {
                let path = format!("{prefix}/{name}");
                MenuEntry::Submenu(Menu {
                    entries: build_entries(&path, items, i18n, resolve),
                    label: i18n.tr(text),
                    path,
                })
            }
            ItemSpec::Action(spec) => {
                let path = format!("{prefix}/{}", spec.name);
                let shortcut = spec.shortcut.and_then(|text| match text.parse::<Shortcut>() {
                    Ok(shortcut) => Some(shortcut),
                    Err(err) => {
                        tracing::warn!(path = %path, "ignoring shortcut: {err}");
                        None
                    }
                });
                let action = spec.triggered.and_then(|handler| {
                    let action = resolve(handler);
                    if action.is_none() {
                        tracing::debug!(path = %path, handler, "no action for menu handler");
                    }
                    action
                });
                MenuEntry::Item(MenuItem {
                    label: i18n.tr(spec.text),
                    shortcut,
                    action,
                    enabled: spec.enabled,
                    checkable: spec.checkable,
                    checked: spec.checked,
                    status_tip: spec.status_tip.map(|tip| i18n.tr(tip)),
                    path,
                })
            }
        })
        .collect()
}

fn walk<'a, A>(menus: &'a [Menu<A>], visit: &mut impl FnMut(&'a MenuEntry<A>)) {
    for menu in menus {
        walk_entries(&menu.entries, visit);
    }
}

fn walk_entries<'a, A>(entries: &'a [MenuEntry<A>], visit: &mut impl FnMut(&'a MenuEntry<A>)) {
    for entry in entries {
        visit(entry);
        if let MenuEntry::Submenu(menu) = entry {
            walk_entries(&menu.entries, visit);
        }
    }
}

fn find_item_mut<'a, A>(menus: &'a mut [Menu<A>], path: &str) -> Option<&'a mut MenuItem<A>> {
    menus
        .iter_mut()
        .find_map(|menu| find_in_entries(&mut menu.entries, path))
}

fn find_in_entries<'a, A>(
    entries: &'a mut [MenuEntry<A>],
    path: &str,
) -> Option<&'a mut MenuItem<A>> {
    entries.iter_mut().find_map(|entry| match entry {
        MenuEntry::Item(item) if item.path == path => Some(item),
        MenuEntry::Submenu(menu) => find_in_entries(&mut menu.entries, path),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use iced::keyboard::key::Named;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Act {
        New,
        Rename,
        About,
    }

    const SPEC: &[MenuSpec] = &[
        MenuSpec {
            name: "File",
            text: "menu-file",
            items: &[
                ItemSpec::Action(ActionSpec::new("Open", "menu-file-open").shortcut("Ctrl+O").triggered("on_open")),
                ItemSpec::Separator,
                ItemSpec::Action(ActionSpec::new("New", "menu-canvas-new").shortcut("Ctrl+N").triggered("on_new")),
                ItemSpec::Action(
                    ActionSpec::new("Rename", "menu-canvas-rename")
                        .shortcut("F2")
                        .triggered("on_rename")
                        .enabled(false),
                ),
                ItemSpec::Action(ActionSpec::new("Grid", "menu-grid").checkable(false)),
                ItemSpec::Action(ActionSpec::new("Broken", "menu-broken").shortcut("Hyper+Q")),
            ],
        },
        MenuSpec {
            name: "Help",
            text: "menu-help",
            items: &[
                ItemSpec::Action(ActionSpec::new("About", "menu-help-about").triggered("on_about")),
                ItemSpec::Submenu {
                    name: "More",
                    text: "menu-help-more",
                    items: &[ItemSpec::Action(
                        ActionSpec::new("Docs", "menu-help-docs").triggered("on_docs"),
                    )],
                },
            ],
        },
    ];

    fn resolve(handler: &str) -> Option<Act> {
        match handler {
            "on_new" => Some(Act::New),
            "on_rename" => Some(Act::Rename),
            "on_about" => Some(Act::About),
            _ => None,
        }
    }

    fn bar() -> MenuBar<Act> {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        MenuBar::build(SPEC, &i18n, resolve)
    }

    #[test]
    fn registers_every_path() {
        let bar = bar();
        for path in [
            "File",
            "File/Open",
            "File/New",
            "Help/About",
            "Help/More",
            "Help/More/Docs",
        ] {
            assert!(bar.contains(path), "missing {path}");
        }
        assert!(!bar.contains("Help/Docs"));
        assert!(!bar.contains("Edit"));
    }

    #[test]
    fn unknown_handlers_stay_unwired() {
        let mut bar = bar();
        let open = bar.item("File/Open").expect("registered");
        assert!(!open.is_wired());
        assert_eq!(open.label, "Open…");
        assert!(!bar.item("Help/More/Docs").expect("registered").is_wired());
        assert_eq!(bar.activate("File/Open"), Event::None);
    }

    #[test]
    fn activating_closes_and_triggers() {
        let mut bar = bar();
        bar.update(Message::TitlePressed(1));
        assert_eq!(bar.open_menu(), Some(1));
        assert_eq!(
            bar.update(Message::Activate("Help/About".into())),
            Event::Triggered(Act::About)
        );
        assert!(!bar.is_open());
    }

    #[test]
    fn disabled_entries_do_nothing() {
        let mut bar = bar();
        assert_eq!(bar.activate("File/Rename"), Event::None);
        assert!(bar.set_enabled("File/Rename", true));
        assert_eq!(bar.activate("File/Rename"), Event::Triggered(Act::Rename));
        assert!(!bar.set_enabled("File/Nope", true));
    }

    #[test]
    fn checkable_entries_toggle() {
        let mut bar = bar();
        bar.activate("File/Grid");
        assert!(bar.item("File/Grid").expect("registered").checked);
        bar.activate("File/Grid");
        assert!(!bar.item("File/Grid").expect("registered").checked);
    }

    #[test]
    fn invalid_shortcut_is_dropped() {
        let bar = bar();
        assert!(bar.item("File/Broken").expect("registered").shortcut.is_none());
    }

    #[test]
    fn shortcuts_resolve_to_wired_enabled_actions() {
        let mut bar = bar();
        let n = Key::Character("n".into());
        assert_eq!(bar.action_for_key(&n, Modifiers::COMMAND), Some(Act::New));
        assert_eq!(bar.action_for_key(&n, Modifiers::empty()), None);

        let f2 = Key::Named(Named::F2);
        assert_eq!(bar.action_for_key(&f2, Modifiers::empty()), None);
        bar.set_enabled("File/Rename", true);
        assert_eq!(bar.action_for_key(&f2, Modifiers::empty()), Some(Act::Rename));

        let o = Key::Character("o".into());
        assert_eq!(bar.action_for_key(&o, Modifiers::COMMAND), None);
    }

    #[test]
    fn hovering_switches_only_while_open() {
        let mut bar = bar();
        bar.update(Message::TitleHovered(1));
        assert_eq!(bar.open_menu(), None);

        bar.update(Message::TitlePressed(0));
        bar.update(Message::TitleHovered(1));
        assert_eq!(bar.open_menu(), Some(1));

        bar.update(Message::TitlePressed(1));
        assert_eq!(bar.open_menu(), None);
    }

    #[test]
    fn submenus_expand_and_reset_on_close() {
        let mut bar = bar();
        bar.update(Message::TitlePressed(1));
        bar.update(Message::ToggleSubmenu("Help/More".into()));
        assert!(bar.expanded.contains("Help/More"));
        bar.update(Message::ToggleSubmenu("Help/More".into()));
        assert!(bar.expanded.is_empty());

        bar.update(Message::ToggleSubmenu("Help/More".into()));
        bar.update(Message::Dismiss);
        assert!(!bar.is_open());
        assert!(bar.expanded.is_empty());
    }
}
