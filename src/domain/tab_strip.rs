// SPDX-License-Identifier: MPL-2.0
//! Ordered canvas documents with a permanently-last "+" entry.
//!
//! The strip behaves like a native tab bar: removing or moving entries shifts
//! the current pointer, and every move is followed by a corrective move that
//! pins the [`Entry::AddTrigger`] back to the end. Compound operations run
//! with notifications paused so callers only see the settled outcome, which
//! each mutator returns as a list of [`TabEvent`]s.
//!
//! Positions are entry indices. Because the add trigger is always last,
//! document positions are `0..len()`.

use std::ops::{Deref, DerefMut};

/// A document together with the label shown on its tab.
#[derive(Debug, Clone, PartialEq)]
pub struct Tab<D> {
    label: String,
    document: D,
}

impl<D> Tab<D> {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut D {
        &mut self.document
    }
}

/// One slot in the strip.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<D> {
    Document(Tab<D>),
    /// The "+" tab. Never closable, never a document.
    AddTrigger,
}

impl<D> Entry<D> {
    pub fn as_tab(&self) -> Option<&Tab<D>> {
        match self {
            Entry::Document(tab) => Some(tab),
            Entry::AddTrigger => None,
        }
    }

    pub fn is_add_trigger(&self) -> bool {
        matches!(self, Entry::AddTrigger)
    }
}

/// Settled notifications produced by strip operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabEvent {
    /// The "+" entry was pressed. The owner decides what to create.
    Activated,
    /// A different document became current. Never refers to the add trigger.
    CurrentChanged { index: usize },
    Closed { index: usize, label: String },
    Renamed { index: usize, label: String },
    /// A document drag settled at a new position.
    Reordered { from: usize, to: usize },
}

#[derive(Debug)]
pub struct TabStrip<D> {
    entries: Vec<Entry<D>>,
    current: usize,
    paused: u32,
    repinning: bool,
    selection_moved: bool,
    pending: Vec<TabEvent>,
}

impl<D> Default for TabStrip<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> TabStrip<D> {
    /// Creates a strip holding only the add trigger, which is nominally
    /// current and inert.
    pub fn new() -> Self {
        Self {
            entries: vec![Entry::AddTrigger],
            current: 0,
            paused: 0,
            repinning: false,
            selection_moved: false,
            pending: Vec::new(),
        }
    }

    /// Appends a document just before the add trigger and selects it.
    pub fn insert(&mut self, document: D, label: impl Into<String>) -> (usize, Vec<TabEvent>) {
        let label = label.into();
        let index = self.add_trigger_index();
        tracing::debug!(index, %label, "inserting tab");

        self.host_insert(index, Entry::Document(Tab { label, document }));
        self.host_set_current(index);
        self.pin_add_trigger();

        (index, self.take_events())
    }

    /// Removes the document at `index`. Ignored for the add trigger and
    /// out-of-range positions.
    pub fn close(&mut self, index: usize) -> Vec<TabEvent> {
        if !self.is_document(index) {
            return Vec::new();
        }

        {
            let mut strip = self.pause();
            let was_current = strip.current == index;
            let removed = strip.host_remove(index);

            if was_current {
                let target = if strip.is_document(index) {
                    index
                } else if index > 0 && strip.is_document(index - 1) {
                    index - 1
                } else {
                    strip.add_trigger_index()
                };
                strip.host_set_current(target);
            }

            if let Entry::Document(tab) = removed {
                tracing::debug!(index, label = %tab.label, "closed tab");
                strip.pending.push(TabEvent::Closed {
                    index,
                    label: tab.label,
                });
            }
        }

        self.take_events()
    }

    /// Replaces a document label. Uniqueness is not re-checked.
    pub fn rename(&mut self, index: usize, label: impl Into<String>) -> Vec<TabEvent> {
        let label = label.into();
        let Some(Entry::Document(tab)) = self.entries.get_mut(index) else {
            return Vec::new();
        };

        tab.label.clone_from(&label);
        self.pending.push(TabEvent::Renamed { index, label });
        self.take_events()
    }

    /// Applies a drag from `from` to `to`, then moves the add trigger back to
    /// the end. Dragging the add trigger itself therefore has no lasting
    /// effect and reports nothing.
    pub fn reorder(&mut self, from: usize, to: usize) -> Vec<TabEvent> {
        let count = self.entries.len();
        if from >= count || to >= count || from == to {
            return Vec::new();
        }

        let dragged_document = self.is_document(from);

        {
            let mut strip = self.pause();
            strip.host_move(from, to);

            if dragged_document {
                let settled = to.min(strip.add_trigger_index().saturating_sub(1));
                if settled != from {
                    tracing::debug!(from, to = settled, "reordered tab");
                    strip
                        .pending
                        .push(TabEvent::Reordered { from, to: settled });
                }
            }
        }

        self.take_events()
    }

    /// Makes the document at `index` current. The add trigger cannot be
    /// selected this way.
    pub fn select(&mut self, index: usize) -> Vec<TabEvent> {
        if !self.is_document(index) {
            return Vec::new();
        }
        self.host_set_current(index);
        self.take_events()
    }

    /// Primary click on an entry.
    pub fn press(&mut self, index: usize) -> Vec<TabEvent> {
        if self.is_add_trigger(index) {
            return vec![TabEvent::Activated];
        }
        self.select(index)
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of entries including the add trigger.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[Entry<D>] {
        &self.entries
    }

    pub fn add_trigger_index(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn is_add_trigger(&self, index: usize) -> bool {
        self.entries.get(index).is_some_and(Entry::is_add_trigger)
    }

    pub fn is_document(&self, index: usize) -> bool {
        matches!(self.entries.get(index), Some(Entry::Document(_)))
    }

    /// Index of the current document, `None` when the add trigger is the
    /// nominal current entry.
    pub fn current_index(&self) -> Option<usize> {
        self.is_document(self.current).then_some(self.current)
    }

    pub fn current(&self) -> Option<&Tab<D>> {
        self.get(self.current)
    }

    pub fn current_mut(&mut self) -> Option<&mut Tab<D>> {
        let index = self.current;
        self.get_mut(index)
    }

    pub fn get(&self, index: usize) -> Option<&Tab<D>> {
        self.entries.get(index).and_then(Entry::as_tab)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Tab<D>> {
        match self.entries.get_mut(index) {
            Some(Entry::Document(tab)) => Some(tab),
            _ => None,
        }
    }

    pub fn tabs(&self) -> impl Iterator<Item = &Tab<D>> {
        self.entries.iter().filter_map(Entry::as_tab)
    }

    pub fn labels(&self) -> Vec<&str> {
        self.tabs().map(Tab::label).collect()
    }

    fn take_events(&mut self) -> Vec<TabEvent> {
        std::mem::take(&mut self.pending)
    }

    fn pause(&mut self) -> Paused<'_, D> {
        self.paused += 1;
        Paused { strip: self }
    }

    // Native tab bar mechanics. These shift `current` the way a host widget
    // does and report selection changes unless paused.

    fn host_insert(&mut self, at: usize, entry: Entry<D>) {
        self.entries.insert(at, entry);
        if at <= self.current {
            self.current += 1;
        }
    }

    fn host_remove(&mut self, at: usize) -> Entry<D> {
        let removed = self.entries.remove(at);
        if at < self.current {
            self.current -= 1;
        } else if at == self.current {
            self.current = at.min(self.entries.len() - 1);
            self.selection_moved = true;
            self.notify_current();
        }
        removed
    }

    fn host_move(&mut self, from: usize, to: usize) {
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);

        if self.current == from {
            self.current = to;
        } else if from < self.current && self.current <= to {
            self.current -= 1;
        } else if to <= self.current && self.current < from {
            self.current += 1;
        }

        self.on_moved();
    }

    fn host_set_current(&mut self, index: usize) {
        if index != self.current {
            self.current = index;
            self.selection_moved = true;
            self.notify_current();
        }
    }

    fn notify_current(&mut self) {
        if self.paused > 0 {
            return;
        }
        self.selection_moved = false;
        if self.is_document(self.current) {
            self.pending.push(TabEvent::CurrentChanged {
                index: self.current,
            });
        }
    }

    /// Move handler: keeps the add trigger last. The corrective move runs
    /// under the repinning flag so it does not re-enter this handler.
    fn on_moved(&mut self) {
        if self.repinning {
            return;
        }
        self.pin_add_trigger();
    }

    fn pin_add_trigger(&mut self) {
        let last = self.entries.len() - 1;
        let Some(position) = self.entries.iter().position(Entry::is_add_trigger) else {
            return;
        };
        if position != last {
            let mut strip = Repinning::new(self);
            strip.host_move(position, last);
        }
    }
}

/// Suppresses selection notifications until dropped, then reports the
/// settled current document if it changed.
struct Paused<'a, D> {
    strip: &'a mut TabStrip<D>,
}

impl<D> Deref for Paused<'_, D> {
    type Target = TabStrip<D>;

    fn deref(&self) -> &Self::Target {
        self.strip
    }
}

impl<D> DerefMut for Paused<'_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.strip
    }
}

impl<D> Drop for Paused<'_, D> {
    fn drop(&mut self) {
        self.strip.paused -= 1;
        if self.strip.paused == 0 && self.strip.selection_moved {
            self.strip.notify_current();
        }
    }
}

struct Repinning<'a, D> {
    strip: &'a mut TabStrip<D>,
}

impl<'a, D> Repinning<'a, D> {
    fn new(strip: &'a mut TabStrip<D>) -> Self {
        strip.repinning = true;
        Self { strip }
    }
}

impl<D> Deref for Repinning<'_, D> {
    type Target = TabStrip<D>;

    fn deref(&self) -> &Self::Target {
        self.strip
    }
}

impl<D> DerefMut for Repinning<'_, D> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.strip
    }
}

impl<D> Drop for Repinning<'_, D> {
    fn drop(&mut self) {
        self.strip.repinning = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_with(labels: &[&str]) -> TabStrip<u32> {
        let mut strip = TabStrip::new();
        for (n, label) in labels.iter().enumerate() {
            strip.insert(n as u32, *label);
        }
        strip
    }

    fn assert_pinned(strip: &TabStrip<u32>) {
        let entries = strip.entries();
        assert!(entries.last().is_some_and(Entry::is_add_trigger));
        assert_eq!(
            entries.iter().filter(|e| e.is_add_trigger()).count(),
            1,
            "exactly one add trigger"
        );
    }

    #[test]
    fn new_strip_holds_only_the_add_trigger() {
        let strip: TabStrip<u32> = TabStrip::new();
        assert_eq!(strip.entry_count(), 1);
        assert!(strip.is_empty());
        assert_eq!(strip.current_index(), None);
        assert!(strip.current().is_none());
    }

    #[test]
    fn insert_goes_before_trigger_and_selects() {
        let mut strip = strip_with(&["A"]);
        let (index, events) = strip.insert(7, "B");

        assert_eq!(index, 1);
        assert_eq!(events, vec![TabEvent::CurrentChanged { index: 1 }]);
        assert_eq!(strip.labels(), vec!["A", "B"]);
        assert_eq!(strip.current_index(), Some(1));
        assert_pinned(&strip);
    }

    #[test]
    fn pressing_trigger_activates_without_selecting() {
        let mut strip = strip_with(&["A"]);
        let events = strip.press(strip.add_trigger_index());

        assert_eq!(events, vec![TabEvent::Activated]);
        assert_eq!(strip.current_index(), Some(0));
        assert_eq!(strip.len(), 1);
    }

    #[test]
    fn pressing_document_selects_it() {
        let mut strip = strip_with(&["A", "B"]);
        assert_eq!(
            strip.press(0),
            vec![TabEvent::CurrentChanged { index: 0 }]
        );
        assert!(strip.press(0).is_empty(), "already current");
    }

    #[test]
    fn closing_current_selects_same_index() {
        let mut strip = strip_with(&["A", "B", "C"]);
        strip.select(1);

        let events = strip.close(1);
        assert_eq!(
            events,
            vec![
                TabEvent::Closed {
                    index: 1,
                    label: "B".into()
                },
                TabEvent::CurrentChanged { index: 1 },
            ]
        );
        assert_eq!(strip.current().map(Tab::label), Some("C"));
    }

    #[test]
    fn closing_last_document_falls_back_to_previous() {
        let mut strip = strip_with(&["A", "B"]);

        let events = strip.close(1);
        assert_eq!(
            events,
            vec![
                TabEvent::Closed {
                    index: 1,
                    label: "B".into()
                },
                TabEvent::CurrentChanged { index: 0 },
            ]
        );
        assert_eq!(strip.current().map(Tab::label), Some("A"));
        assert_pinned(&strip);
    }

    #[test]
    fn closing_other_tab_keeps_current_document() {
        let mut strip = strip_with(&["A", "B", "C"]);

        let events = strip.close(0);
        assert_eq!(
            events,
            vec![TabEvent::Closed {
                index: 0,
                label: "A".into()
            }]
        );
        assert_eq!(strip.current().map(Tab::label), Some("C"));
        assert_eq!(strip.current_index(), Some(1));
    }

    #[test]
    fn closing_only_document_leaves_inert_trigger() {
        let mut strip = strip_with(&["A"]);

        let events = strip.close(0);
        assert_eq!(
            events,
            vec![TabEvent::Closed {
                index: 0,
                label: "A".into()
            }]
        );
        assert_eq!(strip.entry_count(), 1);
        assert_eq!(strip.current_index(), None);

        let (index, _) = strip.insert(1, "B");
        assert_eq!(index, 0);
        assert_pinned(&strip);
    }

    #[test]
    fn invalid_positions_are_ignored() {
        let mut strip = strip_with(&["A"]);
        let trigger = strip.add_trigger_index();

        assert!(strip.close(trigger).is_empty());
        assert!(strip.close(42).is_empty());
        assert!(strip.rename(trigger, "x").is_empty());
        assert!(strip.rename(42, "x").is_empty());
        assert!(strip.select(trigger).is_empty());
        assert!(strip.reorder(0, 42).is_empty());
        assert_eq!(strip.labels(), vec!["A"]);
        assert_pinned(&strip);
    }

    #[test]
    fn rename_does_not_check_uniqueness() {
        let mut strip = strip_with(&["A", "B"]);
        let events = strip.rename(1, "A");

        assert_eq!(
            events,
            vec![TabEvent::Renamed {
                index: 1,
                label: "A".into()
            }]
        );
        assert_eq!(strip.labels(), vec!["A", "A"]);
    }

    #[test]
    fn dragging_trigger_is_cancelled_silently() {
        let mut strip = strip_with(&["A", "B", "C"]);
        strip.select(2);

        for target in 0..3 {
            let events = strip.reorder(strip.add_trigger_index(), target);
            assert!(events.is_empty(), "no events for target {target}");
            assert_eq!(strip.labels(), vec!["A", "B", "C"]);
            assert_eq!(strip.current_index(), Some(2));
            assert!(!strip.repinning);
            assert_pinned(&strip);
        }
    }

    #[test]
    fn dragging_document_onto_trigger_stops_before_it() {
        let mut strip = strip_with(&["A", "B", "C"]);
        let events = strip.reorder(0, 3);

        assert_eq!(events, vec![TabEvent::Reordered { from: 0, to: 2 }]);
        assert_eq!(strip.labels(), vec!["B", "C", "A"]);
        assert_pinned(&strip);
    }

    #[test]
    fn current_document_follows_a_drag() {
        let mut strip = strip_with(&["A", "B", "C"]);
        strip.select(0);

        let events = strip.reorder(0, 2);
        assert_eq!(events, vec![TabEvent::Reordered { from: 0, to: 2 }]);
        assert_eq!(strip.current().map(Tab::label), Some("A"));
        assert_eq!(strip.current_index(), Some(2));
    }

    #[test]
    fn interleaved_inserts_and_closes_keep_trigger_last() {
        let mut strip: TabStrip<u32> = TabStrip::new();
        let mut seed: u32 = 0x2545_f491;

        for step in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let roll = (seed >> 16) as usize;
            match roll % 4 {
                0 | 1 => {
                    strip.insert(step, format!("tab {step}"));
                }
                2 => {
                    strip.close(roll % (strip.entry_count() + 1));
                }
                _ => {
                    let count = strip.entry_count();
                    strip.reorder(roll % count, (roll / 7) % count);
                }
            }
            assert_pinned(&strip);
            if !strip.is_empty() {
                assert!(strip.current_index().is_some(), "step {step}");
            }
        }
    }

    #[test]
    fn paused_guard_releases_on_drop() {
        let mut strip = strip_with(&["A"]);
        {
            let _paused = strip.pause();
        }
        assert_eq!(strip.paused, 0);
    }
}
