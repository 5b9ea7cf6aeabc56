// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The inverted index over record names and parent names.
//!
//! Two fields per record, weighted differently: the record's own `name` and the
//! `parent` it lives in. Each distinct normalized token maps to the postings of
//! the records (and fields) containing it. The vocabulary is kept sorted, so
//! iteration order, and therefore ranking ties, never depend on hash order.
//!
//! # Invariants
//!
//! 1. **VOCABULARY_SORTED**: `vocabulary` is strictly ascending (no duplicates)
//! 2. **POSTINGS_ALIGNED**: `postings.len() == vocabulary.len()`, no list empty
//! 3. **POSTINGS_SORTED**: each list is sorted by `(slot, field)`, no duplicates
//! 4. **SLOTS_VALID**: every posting slot indexes into `records`
//!
//! An [`Index`] is only ever produced by [`IndexBuilder::build`] and has no
//! mutating methods. Once the widget reports `Ready`, it is read-only for the
//! rest of the page's life.

mod builder;

pub use builder::*;

use crate::config::BoostOptions;
use crate::types::{Record, RecordId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The two indexed text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Parent,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Name, Field::Parent];

    /// The text this field indexes for a record.
    pub fn text(self, record: &Record) -> Option<&str> {
        match self {
            Field::Name => Some(record.name.as_str()),
            Field::Parent => record.parent_name(),
        }
    }

    /// Boost multiplier for this field.
    pub fn boost(self, boosts: &BoostOptions) -> f64 {
        match self {
            Field::Name => boosts.name,
            Field::Parent => boosts.parent,
        }
    }
}

/// One occurrence of a token: which record, which field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Posting {
    /// Position of the record in [`Index::records`].
    pub slot: u32,
    pub field: Field,
}

/// Immutable search index.
#[derive(Debug, Clone)]
pub struct Index {
    records: Vec<Record>,
    slots: HashMap<RecordId, u32>,
    vocabulary: Vec<String>,
    postings: Vec<Vec<Posting>>,
    boosts: BoostOptions,
}

impl Index {
    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look a record up by its reference key.
    pub fn record(&self, id: RecordId) -> Option<&Record> {
        self.slots
            .get(&id)
            .and_then(|&slot| self.records.get(slot as usize))
    }

    /// Record at an index slot (posting target).
    pub fn record_at(&self, slot: u32) -> Option<&Record> {
        self.records.get(slot as usize)
    }

    /// All records, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Sorted distinct tokens.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Postings of the token at `term_idx` in the vocabulary.
    pub fn postings(&self, term_idx: usize) -> &[Posting] {
        self.postings.get(term_idx).map_or(&[], Vec::as_slice)
    }

    /// Tokens together with their postings, in vocabulary order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[Posting])> {
        self.vocabulary
            .iter()
            .map(String::as_str)
            .zip(self.postings.iter().map(Vec::as_slice))
    }

    pub fn boosts(&self) -> &BoostOptions {
        &self.boosts
    }

    /// Boost of a single field.
    pub fn boost(&self, field: Field) -> f64 {
        field.boost(&self.boosts)
    }
}
