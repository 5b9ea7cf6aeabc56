// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records the widget searches over.
//!
//! A documentation generator emits one [`Record`] per page or symbol, plus a
//! table mapping numeric kinds to human labels. Together they form the
//! [`SearchData`] payload. Nothing here changes after the payload is parsed:
//! the index builder consumes the rows, the query engine reads them back by id.
//!
//! # Invariants
//!
//! - **Record ids are unique** within one payload. The source parser rejects
//!   duplicates, so `RecordId → Record` lookups are unambiguous.
//! - **Urls are relative**. The widget joins them with the configured base
//!   prefix at render time; records never carry the base themselves.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Stable record identifier, the reference key of the index.
///
/// Keeps record ids apart from row positions: payloads usually number rows
/// densely from zero, but nothing requires it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct RecordId(pub u32);

impl RecordId {
    /// Get the underlying value.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        RecordId(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// One searchable documentation entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    /// Key into [`SearchData::kinds`].
    pub kind: u32,
    pub name: String,
    /// Relative url, joined with the widget's base prefix when rendered.
    pub url: String,
    /// Opaque style classes forwarded to the rendered list item.
    #[serde(default)]
    pub classes: String,
    /// Display name of the enclosing entity (module, class, ...), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl Record {
    /// Parent name, treating an empty string the same as a missing one.
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_deref().filter(|p| !p.is_empty())
    }
}

/// The full payload: every record plus the kind label table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchData {
    #[serde(default)]
    pub kinds: BTreeMap<u32, String>,
    pub rows: Vec<Record>,
}

impl SearchData {
    /// Human label for a record kind (`"Class"`, `"Function"`, ...).
    pub fn kind_label(&self, kind: u32) -> Option<&str> {
        self.kinds.get(&kind).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
