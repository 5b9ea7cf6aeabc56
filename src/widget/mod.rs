// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search widget as a host-agnostic state machine.
//!
//! The host owns the page. It forwards DOM events as [`Event`]s to
//! [`SearchWidget::dispatch`] and applies the returned [`Effect`]s in order.
//! Nothing here touches a clock or a DOM, so the whole widget runs the same
//! under wasm, in a native test harness, or in a headless driver.
//!
//! # Lifecycle
//!
//! The first focus requests the index. The payload is loaded and the first
//! batch of records indexed inline; later batches are handed back to the host
//! as [`Task::IndexBatch`] timers so typing stays responsive while a large
//! site is indexed. Queries typed meanwhile are kept, and evaluated once when
//! the last batch lands.
//!
//! ```text
//! FocusIn ─▶ load payload ─▶ batch ─▶ Schedule(IndexBatch) ─▶ batch ─▶ … ─▶ Ready
//!                │                                                          │
//!                └──▶ Failure                              evaluate buffered query
//! ```

mod cursor;
mod event;
mod loading;

pub use cursor::{Cursor, Direction};
pub use event::*;
pub use loading::{ClassChange, LoadingMachine, LoadingState};

use crate::config::WidgetConfig;
use crate::index::{BatchedBuild, BuildStep, Index};
use crate::render::{render_results, RenderedResult};
use crate::search::{search, SearchOptions};
use crate::source::DataSource;
use std::collections::BTreeMap;
use std::mem;
use std::time::Duration;

/// How many blur delays a press on a result may hold the focus for. A press
/// released outside the results never reports a release.
const MAX_BLUR_RETRIES: u32 = 10;

/// One search widget instance.
#[derive(Debug)]
pub struct SearchWidget {
    config: WidgetConfig,
    /// Taken on the first load request.
    source: DataSource,
    loader: LoadingMachine,
    build: Option<BatchedBuild>,
    index: Option<Index>,
    kinds: BTreeMap<u32, String>,
    /// Trimmed text of the last input.
    query: String,
    has_focus: bool,
    /// Bumped on every focus gain; deferred blurs from an older epoch are stale.
    focus_epoch: u64,
    result_pressed: bool,
    /// Retries spent by the pending held blur.
    blur_retries: u32,
    results: Vec<RenderedResult>,
    cursor: Cursor,
}

impl SearchWidget {
    pub fn new(config: WidgetConfig, source: impl Into<DataSource>) -> Self {
        Self {
            config: config.normalized(),
            source: source.into(),
            loader: LoadingMachine::default(),
            build: None,
            index: None,
            kinds: BTreeMap::new(),
            query: String::new(),
            has_focus: false,
            focus_epoch: 0,
            result_pressed: false,
            blur_retries: 0,
            results: Vec::new(),
            cursor: Cursor::default(),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn loading_state(&self) -> LoadingState {
        self.loader.state()
    }

    /// The state class currently shown on the page.
    pub fn shown_state(&self) -> LoadingState {
        self.loader.shown()
    }

    /// Committed query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Results currently rendered.
    pub fn results(&self) -> &[RenderedResult] {
        &self.results
    }

    /// Highlighted result position.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor.current()
    }

    /// The index, once loading has finished.
    pub fn index(&self) -> Option<&Index> {
        self.index.as_ref()
    }

    /// Handle one event and return the effects the host must apply, in order.
    pub fn dispatch(&mut self, event: Event) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            Event::FocusIn => {
                self.focus_epoch += 1;
                self.set_has_focus(true, &mut effects);
                self.request_load(&mut effects);
            }
            Event::FocusOut => self.focus_out(&mut effects),
            Event::Input(text) => self.set_query(&text, &mut effects),
            Event::KeyDown(key) => self.key_down(key, &mut effects),
            Event::DocumentKeyDown(stroke) => {
                if !self.has_focus && stroke.is_typing() {
                    effects.push(Effect::FocusField);
                }
            }
            Event::ResultPointerDown => self.result_pressed = true,
            Event::ResultPointerUp => {
                self.result_pressed = false;
                self.set_has_focus(false, &mut effects);
            }
            Event::Timer(task) => self.run_task(task, &mut effects),
        }
        effects
    }

    fn run_task(&mut self, task: Task, effects: &mut Vec<Effect>) {
        match task {
            Task::IndexBatch => match self.build.take() {
                Some(build) => self.run_batch(build, effects),
                None => tracing::trace!("no index build in progress"),
            },
            Task::RevealLoading => {
                if let Some(change) = self.loader.reveal_loading() {
                    effects.push(class_effect(change));
                }
            }
            Task::CommitBlur { epoch } => {
                if epoch == self.focus_epoch {
                    self.set_has_focus(false, effects);
                } else {
                    tracing::trace!(epoch, current = self.focus_epoch, "stale blur ignored");
                }
            }
            Task::RetryBlur { epoch } => {
                if epoch != self.focus_epoch {
                    tracing::trace!(epoch, current = self.focus_epoch, "stale blur ignored");
                } else if self.result_pressed && self.blur_retries < MAX_BLUR_RETRIES {
                    self.blur_retries += 1;
                    let delay = self.config.blur_delay();
                    effects.push(self.schedule(Task::RetryBlur { epoch }, delay));
                } else {
                    if self.result_pressed {
                        tracing::debug!(retries = self.blur_retries, "result press never released");
                    }
                    self.result_pressed = false;
                    self.set_has_focus(false, effects);
                }
            }
        }
    }

    /// Load the payload and start indexing. Only the first request does anything.
    fn request_load(&mut self, effects: &mut Vec<Effect>) {
        if self.loader.state() != LoadingState::Idle {
            return;
        }
        self.enter(LoadingState::Loading, effects);
        effects.push(self.schedule(Task::RevealLoading, self.config.loading_delay()));

        let source = mem::replace(&mut self.source, DataSource::Unavailable);
        match source.load() {
            Ok(data) => {
                tracing::debug!(records = data.len(), "search payload loaded");
                self.kinds = data.kinds;
                let build = BatchedBuild::new(data.rows, self.config.boost, self.config.batch_size);
                self.run_batch(build, effects);
            }
            Err(err) => {
                tracing::warn!(error = %err, "search payload unavailable");
                self.enter(LoadingState::Failure, effects);
            }
        }
    }

    fn run_batch(&mut self, build: BatchedBuild, effects: &mut Vec<Effect>) {
        match build.step() {
            BuildStep::Pending(build) => {
                self.build = Some(build);
                effects.push(self.schedule(Task::IndexBatch, self.config.batch_delay()));
            }
            BuildStep::Complete(index) => {
                self.index = Some(index);
                self.enter(LoadingState::Ready, effects);
                self.update_results(effects);
            }
        }
    }

    fn enter(&mut self, state: LoadingState, effects: &mut Vec<Effect>) {
        if let Ok(Some(change)) = self.loader.transition(state) {
            effects.push(class_effect(change));
        }
    }

    fn schedule(&self, task: Task, delay: Duration) -> Effect {
        Effect::Schedule { task, delay }
    }

    fn set_has_focus(&mut self, value: bool, effects: &mut Vec<Effect>) {
        if self.has_focus == value {
            return;
        }
        self.has_focus = value;
        effects.push(Effect::SetFocusClass(value));

        if value {
            self.set_query("", effects);
            effects.push(Effect::SetFieldValue(String::new()));
        } else {
            effects.push(Effect::SetFieldValue(self.query.clone()));
        }
    }

    fn focus_out(&mut self, effects: &mut Vec<Effect>) {
        let epoch = self.focus_epoch;
        let task = if self.result_pressed {
            // keep the results up until the click on them completes
            self.blur_retries = 0;
            Task::RetryBlur { epoch }
        } else {
            Task::CommitBlur { epoch }
        };
        effects.push(self.schedule(task, self.config.blur_delay()));
    }

    fn set_query(&mut self, text: &str, effects: &mut Vec<Effect>) {
        self.query = text.trim().to_string();
        self.update_results(effects);
    }

    /// Replace the rendered results. Only a ready index with a query yields any.
    fn update_results(&mut self, effects: &mut Vec<Effect>) {
        self.results = match &self.index {
            Some(index) if self.loader.state() == LoadingState::Ready && !self.query.is_empty() => {
                let outcome = search(index, &self.query, SearchOptions::from(&self.config));
                render_results(index, &self.kinds, &outcome.hits, &self.query, &self.config.base)
            }
            _ => Vec::new(),
        };
        self.cursor.reset();
        effects.push(Effect::RenderResults(self.results.clone()));
    }

    fn key_down(&mut self, key: Key, effects: &mut Vec<Effect>) {
        if key == Key::Other {
            return;
        }
        effects.push(Effect::PreventDefault);
        match key {
            Key::Enter => {
                if let Some(result) = self
                    .cursor
                    .target(self.results.len())
                    .and_then(|i| self.results.get(i))
                {
                    effects.push(Effect::Navigate(result.href.clone()));
                    effects.push(Effect::BlurField);
                }
            }
            Key::Escape => effects.push(Effect::BlurField),
            Key::ArrowUp => self.move_cursor(Direction::Up, effects),
            Key::ArrowDown => self.move_cursor(Direction::Down, effects),
            Key::Other => {}
        }
    }

    fn move_cursor(&mut self, direction: Direction, effects: &mut Vec<Effect>) {
        if let Some(current) = self.cursor.step(direction, self.results.len()) {
            effects.push(Effect::MarkCurrent(Some(current)));
        }
    }
}

fn class_effect(change: ClassChange) -> Effect {
    Effect::SetStateClass {
        remove: change.remove,
        add: change.add,
    }
}
