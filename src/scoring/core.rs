// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! A single clause matching a single token scores
//!
//! ```text
//! boost(field) × coverage × edit_penalty
//! ```
//!
//! where `coverage` is the share of the token the term accounts for and
//! `edit_penalty` shrinks with every edit the fuzzy stage needed. A record's
//! score sums, over clauses and fields, the best token score in each field.
//!
//! # Key Invariant: Coverage Ordering
//!
//! For a fixed field and distance, a token fully covered by the term (coverage
//! 1.0) always scores at least as high as any token it only partially covers.
//! That's what puts the exact name ahead of longer names containing it.

/// Coverage of a token that is no longer than the term.
pub const FULL_COVERAGE: f64 = 1.0;

/// Share of the token covered by the term, in `(0, 1]`.
///
/// Measured in chars. A fuzzy term can be longer than the token it matched
/// (`fooo` against `foo`); coverage caps at full.
pub fn coverage(term_chars: usize, token_chars: usize) -> f64 {
    if token_chars == 0 || term_chars >= token_chars {
        return FULL_COVERAGE;
    }
    term_chars as f64 / token_chars as f64
}

/// Score multiplier for a match needing `distance` edits: 1, 1/2, 1/3, ...
pub fn edit_penalty(distance: usize) -> f64 {
    1.0 / (1.0 + distance as f64)
}

/// Score of one clause matching one token in a field with the given boost.
pub fn token_score(boost: f64, term_chars: usize, token_chars: usize, distance: usize) -> f64 {
    boost * coverage(term_chars, token_chars) * edit_penalty(distance)
}
