// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query clauses and their textual syntax.
//!
//! A query is a list of clauses, one per term. Each clause says how its term
//! may sit inside an indexed token:
//!
//! | Syntax    | Meaning                                  |
//! |-----------|------------------------------------------|
//! | `foo`     | token is exactly `foo`                   |
//! | `foo*`    | token starts with `foo`                  |
//! | `*foo`    | token ends with `foo`                    |
//! | `*foo*`   | token contains `foo`                     |
//! | `*foo~1*` | token contains `foo` give or take 1 edit |
//!
//! Terms split on the same separators the indexer uses, and are normalized
//! the same way, so a query term and an indexed token are always comparable.
//! Anything that doesn't parse as syntax is just part of the term: the parser
//! never fails, since it runs on every keystroke of free text.

use crate::fuzzy::Anchor;
use crate::util::normalize::is_separator;
use crate::util::normalize_token;
use std::fmt;

/// Largest edit distance a clause may ask for.
///
/// Beyond two edits, short identifiers match nearly everything.
pub const MAX_EDIT_DISTANCE: u8 = 2;

/// A single term with its wildcard and edit-distance modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    /// Normalized term text, never empty.
    pub term: String,
    /// `*` before the term: anything may precede it in the token.
    pub leading: bool,
    /// `*` after the term: anything may follow it in the token.
    pub trailing: bool,
    /// `~N`: edits tolerated between term and token.
    pub edit_distance: u8,
}

impl Clause {
    /// How the term must line up with a token.
    pub fn anchor(&self) -> Anchor {
        Anchor::from_wildcards(self.leading, self.trailing)
    }

    /// Parse one whitespace-free piece of query text.
    fn parse(piece: &str) -> Option<Self> {
        let leading = piece.starts_with('*');
        let mut body = piece.trim_start_matches('*');
        let mut trailing = body.ends_with('*');
        body = body.trim_end_matches('*');

        let mut edit_distance = 0;
        if let Some((term, distance)) = body.rsplit_once('~') {
            if let Ok(distance) = distance.parse::<u8>() {
                edit_distance = distance.min(MAX_EDIT_DISTANCE);
                // `*foo*~1` and `*foo~1*` mean the same thing
                trailing |= term.ends_with('*');
                body = term.trim_end_matches('*');
            }
        }

        let term = normalize_token(body);
        if term.is_empty() {
            return None;
        }
        Some(Clause {
            term,
            leading,
            trailing,
            edit_distance,
        })
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.leading {
            f.write_str("*")?;
        }
        f.write_str(&self.term)?;
        if self.edit_distance > 0 {
            write!(f, "~{}", self.edit_distance)?;
        }
        if self.trailing {
            f.write_str("*")?;
        }
        Ok(())
    }
}

/// A parsed query: clauses combined with OR semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    clauses: Vec<Clause>,
}

impl Query {
    /// Parse query text, honoring `*` and `~N` modifiers.
    pub fn parse(text: &str) -> Self {
        let clauses = text
            .split(is_separator)
            .filter(|piece| !piece.is_empty())
            .filter_map(Clause::parse)
            .collect();
        Self { clauses }
    }

    /// Every term of `text` wrapped as `*term*`, with at least `edit_distance` edits.
    ///
    /// `Query::wrapped("foo", 0)` is the substring query `*foo*`;
    /// `Query::wrapped("foo", 1)` is its typo-tolerant sibling `*foo~1*`.
    pub fn wrapped(text: &str, edit_distance: u8) -> Self {
        let mut query = Self::parse(text);
        for clause in &mut query.clauses {
            clause.leading = true;
            clause.trailing = true;
            clause.edit_distance = clause
                .edit_distance
                .max(edit_distance)
                .min(MAX_EDIT_DISTANCE);
        }
        query
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}
