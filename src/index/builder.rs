// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cooperative index construction.
//!
//! A large documentation site carries tens of thousands of records. Indexing
//! them in one go would freeze the page the moment the user focuses the search
//! field, which is exactly when they start typing. So the build is sliced:
//! [`BatchedBuild::step`] indexes at most one batch and hands control back.
//! The caller decides when the next slice runs; the widget schedules it as a
//! deferred task so input events get handled in between.
//!
//! # Usage
//!
//! ```
//! use docsift::config::BoostOptions;
//! use docsift::index::{BatchedBuild, BuildStep};
//!
//! let mut build = BatchedBuild::new(Vec::new(), BoostOptions::default(), 100);
//! let index = loop {
//!     match build.step() {
//!         BuildStep::Pending(rest) => build = rest, // yield to the event loop here
//!         BuildStep::Complete(index) => break index,
//!     }
//! };
//! assert!(index.is_empty());
//! ```

use super::{Field, Index, Posting};
use crate::config::BoostOptions;
use crate::types::Record;
use crate::util::tokenize;
use std::collections::{BTreeMap, HashMap};
use std::vec;

/// Accumulates records into an inverted index.
#[derive(Debug)]
pub struct IndexBuilder {
    boosts: BoostOptions,
    records: Vec<Record>,
    terms: BTreeMap<String, Vec<Posting>>,
}

impl IndexBuilder {
    pub fn new(boosts: BoostOptions) -> Self {
        Self {
            boosts,
            records: Vec::new(),
            terms: BTreeMap::new(),
        }
    }

    /// Tokenize both fields of a record and add its postings.
    pub fn add(&mut self, record: Record) {
        let slot = self.records.len() as u32;
        for field in Field::ALL {
            let Some(text) = field.text(&record) else {
                continue;
            };
            for token in tokenize(text) {
                let postings = self.terms.entry(token).or_default();
                let posting = Posting { slot, field };
                // Slots only grow, so a repeat can only be the last entry
                if postings.last() != Some(&posting) {
                    postings.push(posting);
                }
            }
        }
        self.records.push(record);
    }

    /// Number of records added so far.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Freeze the accumulated postings into an [`Index`].
    pub fn build(self) -> Index {
        let slots: HashMap<_, _> = self
            .records
            .iter()
            .enumerate()
            .map(|(slot, record)| (record.id, slot as u32))
            .collect();

        let (vocabulary, mut postings): (Vec<String>, Vec<Vec<Posting>>) =
            self.terms.into_iter().unzip();
        for list in &mut postings {
            list.sort_unstable();
            list.dedup();
        }

        Index {
            records: self.records,
            slots,
            vocabulary,
            postings,
            boosts: self.boosts,
        }
    }
}

/// Outcome of one build slice.
#[derive(Debug)]
pub enum BuildStep {
    /// More records remain; call [`BatchedBuild::step`] again later.
    Pending(BatchedBuild),
    /// The last batch ran and the index is final.
    Complete(Index),
}

/// An index build that runs one bounded batch at a time.
#[derive(Debug)]
pub struct BatchedBuild {
    builder: IndexBuilder,
    pending: vec::IntoIter<Record>,
    batch_size: usize,
    total: usize,
    batches: usize,
}

impl BatchedBuild {
    /// Prepare a build over `records`. A `batch_size` of zero is treated as one.
    pub fn new(records: Vec<Record>, boosts: BoostOptions, batch_size: usize) -> Self {
        Self {
            builder: IndexBuilder::new(boosts),
            total: records.len(),
            pending: records.into_iter(),
            batch_size: batch_size.max(1),
            batches: 0,
        }
    }

    /// Index the next batch of records.
    pub fn step(mut self) -> BuildStep {
        for record in self.pending.by_ref().take(self.batch_size) {
            self.builder.add(record);
        }
        self.batches += 1;

        tracing::debug!(
            indexed = self.builder.len(),
            total = self.total,
            batch = self.batches,
            "index batch done"
        );

        if self.pending.as_slice().is_empty() {
            BuildStep::Complete(self.builder.build())
        } else {
            BuildStep::Pending(self)
        }
    }

    /// Records indexed so far.
    pub fn indexed(&self) -> usize {
        self.builder.len()
    }

    /// Total records in this build.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Batches run so far.
    pub fn batches(&self) -> usize {
        self.batches
    }
}

/// Build an index synchronously, in one pass.
pub fn build_index(records: Vec<Record>, boosts: BoostOptions) -> Index {
    let mut builder = IndexBuilder::new(boosts);
    for record in records {
        builder.add(record);
    }
    builder.build()
}
