// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two-stage search core: substring → fuzzy.
//!
//! Stage 1 wraps every query term as `*term*` and asks for containment. If you
//! type `emit` you get `EventEmitter`, `emit`, `emitter`. That covers the
//! overwhelming majority of documentation lookups.
//!
//! Stage 2 only runs when stage 1 came back empty. It repeats the same query
//! as `*term~1*`, tolerating one edit, so `emiter` still finds `emitter`.
//! Running it unconditionally would flood precise queries with near misses,
//! so the stages never mix: the result set comes from exactly one of them.
//!
//! Results are ranked by [`compare_hits`] and cut to the UI budget (10 by
//! default). The index holds every match; the cut is presentation only.

use super::evaluate::{evaluate, Hit};
use crate::config::{WidgetConfig, DEFAULT_FUZZY_DISTANCE, DEFAULT_LIMIT};
use crate::index::Index;
use crate::query::Query;
use crate::scoring::ranking::compare_hits;
use serde::{Deserialize, Serialize};

/// Which stage of the search produced a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// `*term*` containment.
    Wildcard,
    /// `*term~N*` containment within N edits.
    Fuzzy,
}

/// Search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Maximum number of results to return (default: 10)
    pub limit: usize,
    /// Edits tolerated by the fallback stage; 0 disables it (default: 1)
    pub fuzzy_distance: u8,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            fuzzy_distance: DEFAULT_FUZZY_DISTANCE,
        }
    }
}

impl From<&WidgetConfig> for SearchOptions {
    fn from(config: &WidgetConfig) -> Self {
        Self {
            limit: config.limit,
            fuzzy_distance: config.fuzzy_distance,
        }
    }
}

/// Ranked hits plus a record of which stages ran.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub hits: Vec<Hit>,
    /// Stages evaluated, in order. Empty for an empty query.
    pub stages: Vec<Stage>,
}

impl SearchOutcome {
    /// The stage the hits came from, if there are any.
    pub fn stage(&self) -> Option<Stage> {
        if self.hits.is_empty() {
            None
        } else {
            self.stages.last().copied()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }
}

/// Run the two-stage search for free-text input.
///
/// The input is trimmed first; an empty query returns an empty outcome
/// without touching the index.
pub fn search(index: &Index, input: &str, options: SearchOptions) -> SearchOutcome {
    let text = input.trim();
    let mut outcome = SearchOutcome::default();
    if text.is_empty() {
        return outcome;
    }

    outcome.stages.push(Stage::Wildcard);
    let mut hits = evaluate(index, &Query::wrapped(text, 0));

    if hits.is_empty() && options.fuzzy_distance > 0 {
        outcome.stages.push(Stage::Fuzzy);
        hits = evaluate(index, &Query::wrapped(text, options.fuzzy_distance));
    }

    hits.sort_by(compare_hits);
    hits.truncate(options.limit);

    tracing::debug!(
        query = text,
        stages = outcome.stages.len(),
        hits = hits.len(),
        "search finished"
    );

    outcome.hits = hits;
    outcome
}
