// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The loading lifecycle of the index.
//!
//! ```text
//! Idle ──request──▶ Loading ──last batch──▶ Ready
//!   │                  │
//!   └──────────────────┴──bad payload──▶ Failure
//! ```
//!
//! Only forward edges exist and `Failure` has none leaving it. The logical
//! state and the state shown on the page are tracked separately: `Loading` is
//! entered the moment the index is requested, but the page keeps showing
//! `idle` until the loading delay has passed. Fast builds never flash a
//! spinner.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the index is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadingState {
    Idle,
    Loading,
    Ready,
    Failure,
}

impl LoadingState {
    /// CSS class mirroring the state on the search container.
    pub fn as_str(self) -> &'static str {
        match self {
            LoadingState::Idle => "idle",
            LoadingState::Loading => "loading",
            LoadingState::Ready => "ready",
            LoadingState::Failure => "failure",
        }
    }

    /// Is `next` a legal successor of this state?
    pub fn can_transition_to(self, next: LoadingState) -> bool {
        use LoadingState::{Failure, Idle, Loading, Ready};
        matches!(
            (self, next),
            (Idle, Loading) | (Idle, Failure) | (Loading, Ready) | (Loading, Failure)
        )
    }

    /// Terminal states never change again.
    pub fn is_terminal(self) -> bool {
        matches!(self, LoadingState::Ready | LoadingState::Failure)
    }
}

impl fmt::Display for LoadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A change of the state class shown on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassChange {
    pub remove: LoadingState,
    pub add: LoadingState,
}

/// Logical state plus the state currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingMachine {
    state: LoadingState,
    shown: LoadingState,
}

impl Default for LoadingMachine {
    fn default() -> Self {
        Self {
            state: LoadingState::Idle,
            shown: LoadingState::Idle,
        }
    }
}

impl LoadingMachine {
    pub fn state(&self) -> LoadingState {
        self.state
    }

    /// State reflected by the page's CSS class.
    pub fn shown(&self) -> LoadingState {
        self.shown
    }

    /// Move to `next`. Illegal edges change nothing and return the current state.
    ///
    /// Entering `Loading` is silent; every other transition is shown at once
    /// through the returned [`ClassChange`].
    pub fn transition(&mut self, next: LoadingState) -> Result<Option<ClassChange>, LoadingState> {
        if !self.state.can_transition_to(next) {
            tracing::trace!(from = %self.state, to = %next, "loading transition rejected");
            return Err(self.state);
        }
        tracing::debug!(from = %self.state, to = %next, "loading state changed");
        self.state = next;
        if next == LoadingState::Loading {
            return Ok(None);
        }
        Ok(Some(self.show(next)))
    }

    /// Surface `Loading` on the page if it is still the logical state.
    pub fn reveal_loading(&mut self) -> Option<ClassChange> {
        if self.state == LoadingState::Loading && self.shown != LoadingState::Loading {
            Some(self.show(LoadingState::Loading))
        } else {
            None
        }
    }

    fn show(&mut self, state: LoadingState) -> ClassChange {
        let change = ClassChange {
            remove: self.shown,
            add: state,
        };
        self.shown = state;
        change
    }
}
