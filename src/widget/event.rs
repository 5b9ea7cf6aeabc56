// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What goes into the widget, and what comes out.
//!
//! The host translates DOM listeners into [`Event`]s and applies the returned
//! [`Effect`]s to the page. Timers are part of the loop: a
//! [`Effect::Schedule`] asks the host to send back [`Event::Timer`] with the
//! same [`Task`] once the delay has passed.

use super::loading::LoadingState;
use crate::render::RenderedResult;
use serde::{Deserialize, Serialize, Serializer};
use std::time::Duration;

/// Key code of Enter.
pub const KEY_ENTER: u32 = 13;
/// Key code of Escape.
pub const KEY_ESCAPE: u32 = 27;
/// Key code of the up arrow.
pub const KEY_UP: u32 = 38;
/// Key code of the down arrow.
pub const KEY_DOWN: u32 = 40;

/// Key codes that look like typing: digits, letters, numpad.
pub const TYPING_KEY_CODES: std::ops::RangeInclusive<u32> = 48..=111;

/// A key pressed inside the search field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Key {
    Enter,
    Escape,
    ArrowUp,
    ArrowDown,
    /// Anything else. Passed through untouched.
    Other,
}

impl Key {
    /// Classify a DOM `keyCode`.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            KEY_ENTER => Key::Enter,
            KEY_ESCAPE => Key::Escape,
            KEY_UP => Key::ArrowUp,
            KEY_DOWN => Key::ArrowDown,
            _ => Key::Other,
        }
    }
}

/// A key pressed anywhere on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyStroke {
    pub key_code: u32,
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyStroke {
    pub fn new(key_code: u32) -> Self {
        Self {
            key_code,
            ..Self::default()
        }
    }

    /// Plain typing: no modifier held and a printable key code.
    pub fn is_typing(&self) -> bool {
        !(self.alt || self.ctrl || self.meta) && TYPING_KEY_CODES.contains(&self.key_code)
    }
}

/// Deferred work the widget asks the host to schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "task", rename_all = "camelCase")]
pub enum Task {
    /// Index the next batch of records.
    IndexBatch,
    /// Show the loading affordance if the index is still loading.
    RevealLoading,
    /// Commit a focus loss, unless focus came back since.
    CommitBlur { epoch: u64 },
    /// Re-check a focus loss held back by a pressed result.
    RetryBlur { epoch: u64 },
}

/// Input to [`SearchWidget::dispatch`](super::SearchWidget::dispatch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Event {
    /// The search field gained focus.
    FocusIn,
    /// The search field lost focus.
    FocusOut,
    /// The field's text changed.
    Input(String),
    /// A key went down inside the field.
    KeyDown(Key),
    /// A key went down somewhere on the page.
    DocumentKeyDown(KeyStroke),
    /// Pointer pressed on the results list.
    ResultPointerDown,
    /// Pointer released on the results list.
    ResultPointerUp,
    /// A scheduled task came due.
    Timer(Task),
}

/// Output of [`SearchWidget::dispatch`](super::SearchWidget::dispatch), applied by the host
/// in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "camelCase")]
pub enum Effect {
    /// Swap the loading state class on the search container.
    SetStateClass { remove: LoadingState, add: LoadingState },
    /// Set or clear the `has-focus` class.
    SetFocusClass(bool),
    /// Replace the text shown in the field.
    SetFieldValue(String),
    /// Clear the results container and fill it with these rows.
    RenderResults(Vec<RenderedResult>),
    /// Mark the result at this position as current (`None` clears the mark).
    MarkCurrent(Option<usize>),
    /// Follow a link.
    Navigate(String),
    /// Take focus away from the field.
    BlurField,
    /// Move focus into the field.
    FocusField,
    /// Suppress the default action of the key being handled.
    PreventDefault,
    /// Send `Event::Timer(task)` back after `delay`.
    Schedule {
        task: Task,
        #[serde(rename = "delayMs", serialize_with = "serialize_millis")]
        delay: Duration,
    },
}

fn serialize_millis<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(delay.as_millis() as u64)
}
