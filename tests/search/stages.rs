//! Tests for the two search stages and how they hand over.
//!
//! The fuzzy stage is a fallback: it runs only when the substring stage found
//! nothing, and the result set always comes from a single stage.

use crate::common::{api_data, foo_bar_data, index_of, names};
use docsift::{search, SearchOptions, Stage};

#[test]
fn test_substring_query_finds_containing_names() {
    let index = index_of(foo_bar_data());
    let outcome = search(&index, "foo", SearchOptions::default());

    assert_eq!(names(&index, &outcome), vec!["Foo", "Foobar"]);
    assert_eq!(outcome.stage(), Some(Stage::Wildcard));
}

#[test]
fn test_typo_recovers_through_fuzzy_stage() {
    let index = index_of(foo_bar_data());
    let outcome = search(&index, "fp", SearchOptions::default());

    assert_eq!(names(&index, &outcome), vec!["Foo", "Foobar"]);
    assert_eq!(outcome.stages, vec![Stage::Wildcard, Stage::Fuzzy]);
}

#[test]
fn test_fuzzy_stage_skipped_when_substring_matches() {
    let index = index_of(api_data());
    let outcome = search(&index, "emit", SearchOptions::default());

    assert_eq!(outcome.stages, vec![Stage::Wildcard]);
    assert_eq!(outcome.len(), 6);
}

#[test]
fn test_missing_letter_matches_within_one_edit() {
    let index = index_of(api_data());
    let outcome = search(&index, "emiter", SearchOptions::default());

    assert_eq!(outcome.stage(), Some(Stage::Fuzzy));
    let found = names(&index, &outcome);
    assert_eq!(&found[..2], &["EventEmitter", "createEmitter"]);
    // `emit` itself is two edits away from `emiter`, only its parent matches
    assert!(found.contains(&"emit".to_string()));
}

#[test]
fn test_two_typos_find_nothing() {
    let index = index_of(foo_bar_data());
    let outcome = search(&index, "fpp", SearchOptions::default());

    assert!(outcome.is_empty());
    assert_eq!(outcome.stage(), None);
    assert_eq!(outcome.stages.len(), 2);
}

#[test]
fn test_terms_combine_with_or() {
    let index = index_of(api_data());
    let outcome = search(&index, "event listener", SearchOptions::default());

    assert_eq!(
        names(&index, &outcome),
        vec!["Listener", "removeListener", "EventEmitter", "emit", "on", "off"]
    );
}

#[test]
fn test_hyphenated_query_splits_into_terms() {
    let index = index_of(api_data());
    assert_eq!(
        search(&index, "event-listener", SearchOptions::default()),
        search(&index, "event listener", SearchOptions::default())
    );
}

#[test]
fn test_empty_and_blank_queries() {
    let index = index_of(api_data());
    for query in ["", " ", "\t\n"] {
        let outcome = search(&index, query, SearchOptions::default());
        assert!(outcome.is_empty());
        assert!(outcome.stages.is_empty(), "no stage should run for {:?}", query);
    }
}

#[test]
fn test_case_insensitive() {
    let index = index_of(api_data());
    assert_eq!(
        search(&index, "EVENTEMITTER", SearchOptions::default()),
        search(&index, "eventemitter", SearchOptions::default())
    );
}
