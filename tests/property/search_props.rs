//! Search invariants over random payloads and queries.

use docsift::{
    build_index, evaluate, search, BoostOptions, Index, Query, Record, RecordId, SearchOptions,
    Stage,
};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Identifier-like names, optionally camel-cased or hyphenated.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][a-zA-Z0-9]{0,9}(-[a-z]{1,5})?").unwrap()
}

fn records_strategy() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((name_strategy(), prop::option::of(name_strategy())), 0..40).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, parent))| Record {
                    id: RecordId(i as u32 * 3),
                    kind: 1,
                    url: format!("r{}.html", i),
                    name,
                    classes: String::new(),
                    parent,
                })
                .collect()
        },
    )
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 *~-]{0,12}").unwrap()
}

fn index(records: Vec<Record>) -> Index {
    build_index(records, BoostOptions::default())
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_never_exceeds_limit(
        records in records_strategy(),
        query in query_strategy(),
        limit in 1usize..15,
    ) {
        let index = index(records);
        let outcome = search(&index, &query, SearchOptions { limit, fuzzy_distance: 1 });
        prop_assert!(outcome.len() <= limit);
    }

    #[test]
    fn prop_blank_query_is_empty(records in records_strategy(), blanks in "[ \t]{0,4}") {
        let index = index(records);
        let outcome = search(&index, &blanks, SearchOptions::default());
        prop_assert!(outcome.is_empty());
        prop_assert!(outcome.stages.is_empty());
    }

    #[test]
    fn prop_fuzzy_runs_iff_substring_empty(
        records in records_strategy(),
        query in query_strategy(),
    ) {
        prop_assume!(!query.trim().is_empty());
        let index = index(records);
        let outcome = search(&index, &query, SearchOptions::default());
        let substring_empty = evaluate(&index, &Query::wrapped(query.trim(), 0)).is_empty();

        prop_assert_eq!(outcome.stages.contains(&Stage::Fuzzy), substring_empty);
        if !substring_empty {
            prop_assert_eq!(outcome.stage(), Some(Stage::Wildcard));
        }
    }

    #[test]
    fn prop_ranked_by_score_then_id(records in records_strategy(), query in query_strategy()) {
        let index = index(records);
        let outcome = search(&index, &query, SearchOptions { limit: 100, fuzzy_distance: 1 });
        for pair in outcome.hits.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(a.score > b.score || (a.score == b.score && a.id < b.id));
        }
    }

    #[test]
    fn prop_hits_resolve_to_records(records in records_strategy(), query in query_strategy()) {
        let index = index(records);
        let outcome = search(&index, &query, SearchOptions::default());
        for hit in &outcome.hits {
            let record = index.record(hit.id);
            prop_assert!(record.is_some());
            prop_assert_eq!(index.record_at(hit.slot).map(|r| r.id), Some(hit.id));
        }
    }

    #[test]
    fn prop_name_is_found_by_itself(
        records in records_strategy().prop_filter("non-empty", |r| !r.is_empty()),
        pick in any::<prop::sample::Index>(),
    ) {
        let target = pick.get(&records).clone();
        let index = index(records);
        let outcome = search(&index, &target.name, SearchOptions { limit: 100, fuzzy_distance: 1 });
        prop_assert!(outcome.hits.iter().any(|hit| hit.id == target.id));
    }
}
