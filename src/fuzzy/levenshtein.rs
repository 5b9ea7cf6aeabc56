// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early exits.
//!
//! Two flavors. [`levenshtein_within`] compares whole strings. [`match_distance`]
//! is the one the query engine uses: it measures how closely a pattern fits
//! somewhere inside a token, with each end of the token optionally left open.
//! An open end costs nothing to skip, which is exactly what a `*` wildcard means.
//!
//! The key insight for both: if every cell of a DP row exceeds the bound,
//! no later row can come back under it, so the DP stops early.

/// Are these strings within `max` edits of each other?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return false immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    // Use character counts, not byte lengths, for Unicode correctness
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if (a_len as isize - b_len as isize).unsigned_abs() > max {
        return false;
    }

    match_distance(a, b, Anchor::Both, max).is_some()
}

/// Which ends of the text must line up with the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Pattern must cover the whole text.
    Both,
    /// Pattern must start at the start of the text (prefix match).
    Start,
    /// Pattern must end at the end of the text (suffix match).
    End,
    /// Pattern may sit anywhere inside the text (substring match).
    Neither,
}

impl Anchor {
    /// Anchor implied by a `*` on either side of a term.
    pub fn from_wildcards(leading: bool, trailing: bool) -> Self {
        match (leading, trailing) {
            (false, false) => Anchor::Both,
            (false, true) => Anchor::Start,
            (true, false) => Anchor::End,
            (true, true) => Anchor::Neither,
        }
    }

    fn open_start(self) -> bool {
        matches!(self, Anchor::End | Anchor::Neither)
    }

    fn open_end(self) -> bool {
        matches!(self, Anchor::Start | Anchor::Neither)
    }
}

/// Smallest number of edits turning `pattern` into a slice of `text`, if at most `max`.
///
/// Which slices count depends on `anchor`: with `Anchor::Neither` any substring
/// of `text` may be chosen (Sellers' approximate substring matching), with
/// `Anchor::Both` it is plain Levenshtein distance.
///
/// The DP runs with the pattern along the rows, so an open start is a zero
/// first row and an open end is a minimum over the last row.
pub fn match_distance(pattern: &str, text: &str, anchor: Anchor, max: usize) -> Option<usize> {
    let text: Vec<char> = text.chars().collect();
    let t_len = text.len();

    let mut row: Vec<usize> = if anchor.open_start() {
        vec![0; t_len + 1]
    } else {
        (0..=t_len).collect()
    };

    for (i, pc) in pattern.chars().enumerate() {
        let mut prev = row[0];
        row[0] = i + 1;
        let mut min_row = row[0];

        for (j, tc) in text.iter().enumerate() {
            let temp = row[j + 1];
            let cost = usize::from(pc != *tc);
            row[j + 1] = (row[j + 1] + 1).min(row[j] + 1).min(prev + cost);
            prev = temp;
            min_row = min_row.min(row[j + 1]);
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return None;
        }
    }

    let distance = if anchor.open_end() {
        row.iter().copied().min().unwrap_or(0)
    } else {
        row[t_len]
    };
    (distance <= max).then_some(distance)
}
