// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for approximate substring matching.
//!
//! Checks the anchors against each other: loosening an anchor can only lower
//! the distance, and the fully anchored distance agrees with
//! `levenshtein_within`.

#![no_main]

use arbitrary::Arbitrary;
use docsift::{levenshtein_within, match_distance, Anchor};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    text: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let pattern: String = input.pattern.chars().take(24).collect();
    let text: String = input.text.chars().take(48).collect();
    let max = usize::from(input.max % 4);

    let both = match_distance(&pattern, &text, Anchor::Both, max);
    let start = match_distance(&pattern, &text, Anchor::Start, max);
    let end = match_distance(&pattern, &text, Anchor::End, max);
    let neither = match_distance(&pattern, &text, Anchor::Neither, max);

    // INVARIANT 1: reported distances never exceed the bound
    for distance in [both, start, end, neither].into_iter().flatten() {
        assert!(distance <= max);
    }

    // INVARIANT 2: a looser anchor never does worse
    let at_most = |tight: Option<usize>, loose: Option<usize>| match (tight, loose) {
        (Some(t), Some(l)) => l <= t,
        (Some(_), None) => false,
        (None, _) => true,
    };
    assert!(at_most(both, start));
    assert!(at_most(both, end));
    assert!(at_most(start, neither));
    assert!(at_most(end, neither));

    // INVARIANT 3: the anchored case is plain edit distance
    assert_eq!(both.is_some(), levenshtein_within(&pattern, &text, max));
});
