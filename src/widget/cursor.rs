// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyboard highlight within the rendered results.

/// Direction of an arrow key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Position of the highlighted result, if any.
///
/// The cursor never points past the list it was moved over. Replacing the
/// list resets it with [`Cursor::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    current: Option<usize>,
}

impl Cursor {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Move over a list of `len` results.
    ///
    /// With nothing highlighted, `Down` lands on the first result and `Up` on
    /// the last. Moving past either end stays put. Returns the new position
    /// only if it changed.
    pub fn step(&mut self, direction: Direction, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let next = match (self.current, direction) {
            (None, Direction::Down) => 0,
            (None, Direction::Up) => len - 1,
            (Some(i), Direction::Down) => (i + 1).min(len - 1),
            (Some(i), Direction::Up) => i.saturating_sub(1),
        };
        if self.current == Some(next) {
            return None;
        }
        self.current = Some(next);
        self.current
    }

    /// The result Enter should follow: the highlighted one, else the first.
    pub fn target(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.current.filter(|&i| i < len).unwrap_or(0))
    }
}
