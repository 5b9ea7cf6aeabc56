// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning hits into result markup.
//!
//! Each hit becomes one list item linking to the record's page. The first
//! case-insensitive occurrence of the raw query is bolded in the name and in
//! the parent, and a non-empty parent is shown as a `parent.` prefix:
//!
//! ```text
//! <li class="tsd-kind-method"><a href="../classes/emitter.html#on" class="tsd-kind-icon">
//!     <span class="parent"><b>Emit</b>ter.</span>on
//! </a></li>
//! ```
//!
//! The raw query is matched literally. Record text is escaped, so names like
//! `Array<T>` render as text rather than markup.

use crate::index::Index;
use crate::search::Hit;
use crate::types::{Record, RecordId};
use crate::util::html::{escape, find_case_insensitive};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A run of text, marked if it matched the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub marked: bool,
}

/// Text split around its first query match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlighted {
    pub segments: Vec<Segment>,
}

impl Highlighted {
    /// Mark the first case-insensitive occurrence of `query` in `text`.
    pub fn new(text: &str, query: &str) -> Self {
        let mut segments = Vec::with_capacity(3);
        let mut push = |text: &str, marked: bool| {
            if !text.is_empty() {
                segments.push(Segment {
                    text: text.to_string(),
                    marked,
                });
            }
        };
        match find_case_insensitive(text, query) {
            Some(range) => {
                push(&text[..range.start], false);
                push(&text[range.clone()], true);
                push(&text[range.end..], false);
            }
            None => push(text, false),
        }
        Self { segments }
    }

    /// Is any part of the text marked?
    pub fn has_match(&self) -> bool {
        self.segments.iter().any(|s| s.marked)
    }

    /// Escaped markup with the match wrapped in `<b>`.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.marked {
                out.push_str("<b>");
                out.push_str(&escape(&segment.text));
                out.push_str("</b>");
            } else {
                out.push_str(&escape(&segment.text));
            }
        }
        out
    }
}

/// One rendered result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedResult {
    pub id: RecordId,
    /// Absolute link target: base prefix plus record url.
    pub href: String,
    /// Human label of the record kind, when the kind table knows it.
    pub kind: Option<String>,
    pub name: Highlighted,
    pub parent: Option<Highlighted>,
    /// Complete `<li>` markup.
    pub html: String,
}

/// Render a single record for the given raw query.
pub fn render_record(
    record: &Record,
    query: &str,
    base: &str,
    kind: Option<&str>,
) -> RenderedResult {
    let href = format!("{}{}", base, record.url);
    let name = Highlighted::new(&record.name, query);
    let parent = record.parent_name().map(|p| Highlighted::new(p, query));

    let mut label = String::new();
    if let Some(parent) = &parent {
        label.push_str("<span class=\"parent\">");
        label.push_str(&parent.to_html());
        label.push_str(".</span>");
    }
    label.push_str(&name.to_html());

    let html = format!(
        "<li class=\"{}\"><a href=\"{}\" class=\"tsd-kind-icon\">{}</a></li>",
        escape(&record.classes),
        escape(&href),
        label
    );

    RenderedResult {
        id: record.id,
        href,
        kind: kind.map(str::to_string),
        name,
        parent,
        html,
    }
}

/// Render ranked hits, in order. Hits whose record is missing are skipped.
pub fn render_results(
    index: &Index,
    kinds: &BTreeMap<u32, String>,
    hits: &[Hit],
    query: &str,
    base: &str,
) -> Vec<RenderedResult> {
    hits.iter()
        .filter_map(|hit| index.record_at(hit.slot))
        .map(|record| {
            let kind = kinds.get(&record.kind).map(String::as_str);
            render_record(record, query, base, kind)
        })
        .collect()
}
