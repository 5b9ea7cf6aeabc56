// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Evaluating one parsed query against the index.
//!
//! Each clause looks for matching vocabulary terms, then fans out over their
//! postings. Exact and prefix clauses without edits narrow the vocabulary by
//! binary search (it's sorted); everything else scans it. Documentation
//! vocabularies are identifier lists, a few thousand terms at most, so the
//! scan is cheap next to rendering.

use crate::fuzzy::{match_distance, Anchor};
use crate::index::{Field, Index};
use crate::query::{Clause, Query};
use crate::scoring::token_score;
use crate::types::RecordId;
use std::collections::HashMap;
use std::ops::Range;

/// A matching record and its score. Unordered until ranked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub id: RecordId,
    /// Index slot of the record.
    pub slot: u32,
    pub score: f64,
}

/// Every record matching at least one clause, with summed scores.
///
/// Per clause, only the best token in each field of a record counts, so a
/// name repeating the term doesn't outrank one saying it once.
pub fn evaluate(index: &Index, query: &Query) -> Vec<Hit> {
    let mut scores: HashMap<u32, f64> = HashMap::new();

    for clause in query.clauses() {
        let mut best: HashMap<(u32, Field), f64> = HashMap::new();
        let term_chars = clause.term.chars().count();
        let max = usize::from(clause.edit_distance);
        let anchor = clause.anchor();

        for term_idx in candidate_terms(index, clause) {
            let token = &index.vocabulary()[term_idx];
            let Some(distance) = match_distance(&clause.term, token, anchor, max) else {
                continue;
            };
            let token_chars = token.chars().count();

            for posting in index.postings(term_idx) {
                let boost = index.boost(posting.field);
                let score = token_score(boost, term_chars, token_chars, distance);
                let entry = best.entry((posting.slot, posting.field)).or_insert(0.0);
                if score > *entry {
                    *entry = score;
                }
            }
        }

        for ((slot, _), score) in best {
            *scores.entry(slot).or_insert(0.0) += score;
        }
    }

    scores
        .into_iter()
        .filter_map(|(slot, score)| {
            index.record_at(slot).map(|record| Hit {
                id: record.id,
                slot,
                score,
            })
        })
        .collect()
}

/// Vocabulary positions worth testing against a clause.
fn candidate_terms(index: &Index, clause: &Clause) -> Range<usize> {
    let vocabulary = index.vocabulary();
    if clause.edit_distance > 0 {
        return 0..vocabulary.len();
    }
    match clause.anchor() {
        Anchor::Both => match vocabulary.binary_search(&clause.term) {
            Ok(pos) => pos..pos + 1,
            Err(_) => 0..0,
        },
        Anchor::Start => {
            let start = vocabulary.partition_point(|t| t.as_str() < clause.term.as_str());
            let len = vocabulary[start..].partition_point(|t| t.starts_with(clause.term.as_str()));
            start..start + len
        }
        Anchor::End | Anchor::Neither => 0..vocabulary.len(),
    }
}
