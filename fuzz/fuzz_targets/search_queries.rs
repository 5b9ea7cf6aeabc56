// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary queries at a fixed index and checks the result invariants:
//! never more than the limit, ranked order, and the fuzzy stage only as a
//! fallback. Queries are free text typed by users; emoji, `~~~` and stray
//! stars must all come back as ordinary results.

#![no_main]

use docsift::testing::{make_record, make_records};
use docsift::{build_index, render_results, search, BoostOptions, Index, SearchOptions, Stage};
use libfuzzer_sys::fuzz_target;

fn fixture() -> Index {
    let mut rows = make_records(120);
    rows.push(make_record(500, "EventEmitter", None));
    rows.push(make_record(501, "emit", Some("EventEmitter")));
    rows.push(make_record(502, "Map<K, V>", Some("collections")));
    rows.push(make_record(503, "straße", Some("i18n")));
    build_index(rows, BoostOptions::default())
}

fuzz_target!(|query: &[u8]| {
    static INDEX: std::sync::OnceLock<Index> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(fixture);

    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeout
    let query: String = query.chars().take(64).collect();

    // INVARIANT 1: search() never panics and respects the limit
    let outcome = search(index, &query, SearchOptions::default());
    assert!(outcome.len() <= 10);

    // INVARIANT 2: ranked by score, then id
    for pair in outcome.hits.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].id < pair[1].id)
        );
    }

    // INVARIANT 3: hits come from the fuzzy stage only if the substring stage found nothing
    if outcome.stage() == Some(Stage::Fuzzy) {
        assert_eq!(outcome.stages, vec![Stage::Wildcard, Stage::Fuzzy]);
    }

    // INVARIANT 4: rendering never panics, one row per hit
    let rows = render_results(index, &Default::default(), &outcome.hits, query.trim(), "/");
    assert_eq!(rows.len(), outcome.len());
});
