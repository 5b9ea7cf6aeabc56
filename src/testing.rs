//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures and a fake host that plays the role of the
//! browser: it executes widget effects, keeps the rendered DOM state, and runs
//! scheduled tasks in virtual time.

#![doc(hidden)]

use crate::types::{Record, RecordId, SearchData};
use crate::widget::{Effect, Event, Key, KeyStroke, SearchWidget, Task};
use crate::LoadingState;
use std::collections::BTreeMap;
use std::time::Duration;

/// Create a record with the given id, name and parent.
///
/// This is the canonical implementation used across all tests.
pub fn make_record(id: u32, name: &str, parent: Option<&str>) -> Record {
    Record {
        id: RecordId(id),
        kind: 128,
        name: name.to_string(),
        url: format!("classes/{}.html", name.to_lowercase().replace(' ', "_")),
        classes: "tsd-kind-class".to_string(),
        parent: parent.map(str::to_string),
    }
}

/// `count` records named `Symbol0`, `Symbol1`, ... with ids matching positions.
pub fn make_records(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| make_record(i as u32, &format!("Symbol{}", i), Some("module")))
        .collect()
}

/// Wrap records into a payload with a small kind table.
pub fn make_data(rows: Vec<Record>) -> SearchData {
    let mut kinds = BTreeMap::new();
    kinds.insert(1, "Module".to_string());
    kinds.insert(128, "Class".to_string());
    SearchData { kinds, rows }
}

/// The three-record fixture: `Foo`, `Bar`, `Foobar`.
pub fn foo_bar_data() -> SearchData {
    make_data(vec![
        make_record(0, "Foo", None),
        make_record(1, "Bar", None),
        make_record(2, "Foobar", None),
    ])
}

/// A host simulation driving a [`SearchWidget`].
///
/// Effects are applied to a tiny model of the page; `Schedule` effects land in
/// a timer queue that [`FakeHost::advance`] drains in due-time order.
#[derive(Debug)]
pub struct FakeHost {
    pub widget: SearchWidget,
    /// Virtual clock.
    pub now: Duration,
    timers: Vec<(Duration, u64, Task)>,
    timer_seq: u64,
    /// Text currently shown in the input field.
    pub field_value: String,
    /// Whether the browser considers the field focused.
    pub field_focused: bool,
    /// State class currently on the root container.
    pub state_class: Option<&'static str>,
    pub has_focus_class: bool,
    /// Markup of the rendered result items.
    pub rendered: Vec<String>,
    /// Currently marked result, as last reported by the widget.
    pub current: Option<usize>,
    /// Urls the page navigated to.
    pub navigations: Vec<String>,
    /// How many times the default action of a key press was suppressed.
    pub prevented: usize,
    /// Number of deferred index batches that ran.
    pub batch_cycles: usize,
    /// Every effect ever applied, in order.
    pub log: Vec<Effect>,
}

impl FakeHost {
    pub fn new(widget: SearchWidget) -> Self {
        Self {
            widget,
            now: Duration::ZERO,
            timers: Vec::new(),
            timer_seq: 0,
            field_value: String::new(),
            field_focused: false,
            state_class: None,
            has_focus_class: false,
            rendered: Vec::new(),
            current: None,
            navigations: Vec::new(),
            prevented: 0,
            batch_cycles: 0,
            log: Vec::new(),
        }
    }

    /// Dispatch an event and apply the resulting effects.
    pub fn send(&mut self, event: Event) {
        let effects = self.widget.dispatch(event);
        for effect in effects {
            self.apply(effect);
        }
    }

    /// The user focuses the field (click or tab).
    pub fn focus(&mut self) {
        if !self.field_focused {
            self.field_focused = true;
            self.send(Event::FocusIn);
        }
    }

    /// The field loses focus (click elsewhere).
    pub fn blur(&mut self) {
        if self.field_focused {
            self.field_focused = false;
            self.send(Event::FocusOut);
        }
    }

    /// The user replaces the field contents.
    pub fn type_text(&mut self, text: &str) {
        self.field_value = text.to_string();
        self.send(Event::Input(text.to_string()));
    }

    pub fn press(&mut self, key: Key) {
        self.send(Event::KeyDown(key));
    }

    /// A key press somewhere on the page outside the field.
    pub fn press_on_page(&mut self, stroke: KeyStroke) {
        self.send(Event::DocumentKeyDown(stroke));
    }

    /// Number of timers waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Advance the virtual clock, firing every timer that comes due.
    pub fn advance(&mut self, by: Duration) {
        let until = self.now + by;
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, (due, _, _))| *due <= until)
                .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                .map(|(pos, _)| pos);
            let Some(pos) = next else {
                break;
            };
            let (due, _, task) = self.timers.remove(pos);
            self.now = due;
            if task == Task::IndexBatch {
                self.batch_cycles += 1;
            }
            self.send(Event::Timer(task));
        }
        self.now = until;
    }

    /// Fire timers until none are left.
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.timers.iter().map(|(due, _, _)| *due).min() {
            let by = due.saturating_sub(self.now);
            self.advance(by);
        }
    }

    pub fn state(&self) -> LoadingState {
        self.widget.loading_state()
    }

    fn apply(&mut self, effect: Effect) {
        self.log.push(effect.clone());
        match effect {
            Effect::SetStateClass { add, .. } => self.state_class = Some(add.as_str()),
            Effect::SetFocusClass(on) => self.has_focus_class = on,
            Effect::SetFieldValue(value) => self.field_value = value,
            Effect::RenderResults(items) => {
                self.rendered = items.iter().map(|item| item.html.clone()).collect();
                self.current = None;
            }
            Effect::MarkCurrent(current) => self.current = current,
            Effect::Navigate(url) => self.navigations.push(url),
            Effect::BlurField => self.blur(),
            Effect::FocusField => self.focus(),
            Effect::PreventDefault => self.prevented += 1,
            Effect::Schedule { task, delay } => {
                self.timer_seq += 1;
                self.timers.push((self.now + delay, self.timer_seq, task));
            }
        }
    }
}
