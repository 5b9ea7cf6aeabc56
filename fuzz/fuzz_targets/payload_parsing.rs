// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search payload parsing.
//!
//! The payload arrives as page text. Whatever it holds, loading either yields
//! data with unique ids or an error, and a widget fed with it ends up in
//! `ready` or `failure` without panicking.

#![no_main]

use docsift::{DataSource, Event, LoadingState, SearchWidget, Task, WidgetConfig};
use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|text: &[u8]| {
    let text = String::from_utf8_lossy(text).into_owned();

    // INVARIANT 1: parsing never panics, and accepted payloads have unique ids
    if let Ok(data) = DataSource::Inline(text.clone()).load() {
        let ids: HashSet<_> = data.rows.iter().map(|row| row.id).collect();
        assert_eq!(ids.len(), data.rows.len());
    }

    // INVARIANT 2: a widget always settles in a terminal state
    let config = WidgetConfig {
        batch_size: 7,
        ..WidgetConfig::default()
    };
    let mut widget = SearchWidget::new(config, DataSource::Inline(text));
    widget.dispatch(Event::FocusIn);
    while widget.loading_state() == LoadingState::Loading {
        widget.dispatch(Event::Timer(Task::IndexBatch));
    }
    assert!(widget.loading_state().is_terminal());
});
