// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where the search payload comes from.
//!
//! Generated pages deliver the payload one of two ways: already resident (the
//! host parsed it up front), or as an inline string referenced from the search
//! container's `data-index` attribute. Older generators wrapped that string in
//! a global assignment, `typedoc.search.data = {...};`, meant to be evaluated.
//! We never evaluate anything. The assignment wrapper is peeled off and the
//! rest goes through typed deserialization like any other JSON.

use crate::error::SourceError;
use crate::types::{RecordId, SearchData};
use std::collections::HashSet;

/// A search payload, in either delivery form.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Already parsed by the host.
    Resident(SearchData),
    /// Raw payload text, parsed on first load.
    Inline(String),
    /// The page supplied nothing. Loading fails.
    Unavailable,
}

impl DataSource {
    /// Turn the source into validated search data.
    pub fn load(self) -> Result<SearchData, SourceError> {
        let data = match self {
            DataSource::Resident(data) => data,
            DataSource::Inline(text) => parse_payload(&text)?,
            DataSource::Unavailable => return Err(SourceError::Missing),
        };
        check_unique_ids(&data)?;
        Ok(data)
    }
}

impl From<SearchData> for DataSource {
    fn from(data: SearchData) -> Self {
        DataSource::Resident(data)
    }
}

/// Parse inline payload text, with or without the legacy assignment wrapper.
pub fn parse_payload(text: &str) -> Result<SearchData, SourceError> {
    let body = strip_assignment(text.trim());
    Ok(serde_json::from_str(body)?)
}

/// `a.b.c = {...};` → `{...}`. Anything that isn't such an assignment is returned as is.
fn strip_assignment(text: &str) -> &str {
    let Some(eq) = text.find('=') else {
        return text;
    };
    let target = text[..eq].trim();
    let is_identifier_path = !target.is_empty() && target.split('.').all(is_identifier);
    if !is_identifier_path {
        return text;
    }
    let value = text[eq + 1..].trim();
    value.strip_suffix(';').map_or(value, str::trim_end)
}

fn is_identifier(part: &str) -> bool {
    !part.is_empty()
        && part
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

fn check_unique_ids(data: &SearchData) -> Result<(), SourceError> {
    let mut seen: HashSet<RecordId> = HashSet::with_capacity(data.rows.len());
    for row in &data.rows {
        if !seen.insert(row.id) {
            return Err(SourceError::DuplicateId(row.id));
        }
    }
    Ok(())
}
