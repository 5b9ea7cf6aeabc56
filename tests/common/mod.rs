//! Shared test utilities and fixtures.

#![allow(dead_code)]

use docsift::testing::FakeHost;
use docsift::{
    build_index, BoostOptions, Index, LoadingState, Record, SearchData, SearchOutcome, SearchWidget,
    WidgetConfig,
};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

// Re-export canonical test utilities from docsift::testing
pub use docsift::testing::{foo_bar_data, make_data, make_record, make_records};

/// A small API surface: a class, its members, and a free function.
pub fn api_data() -> SearchData {
    make_data(vec![
        make_record(0, "EventEmitter", None),
        make_record(1, "emit", Some("EventEmitter")),
        make_record(2, "on", Some("EventEmitter")),
        make_record(3, "off", Some("EventEmitter")),
        make_record(4, "createEmitter", None),
        make_record(5, "Listener", None),
        make_record(6, "removeListener", Some("EventEmitter")),
    ])
}

pub fn index_of(data: SearchData) -> Index {
    build_index(data.rows, BoostOptions::default())
}

/// Record names of the hits, in rank order.
pub fn names(index: &Index, outcome: &SearchOutcome) -> Vec<String> {
    outcome
        .hits
        .iter()
        .filter_map(|hit| index.record(hit.id))
        .map(|record: &Record| record.name.clone())
        .collect()
}

/// Route widget logs to the test output. Filter with `RUST_LOG=docsift=debug`.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init();
}

/// A host around a widget with default configuration.
pub fn host(data: SearchData) -> FakeHost {
    init_tracing();
    FakeHost::new(SearchWidget::new(WidgetConfig::default(), data))
}

/// A host whose widget has been focused and has finished loading.
pub fn ready_host(data: SearchData) -> FakeHost {
    let mut host = host(data);
    host.focus();
    host.run_until_idle();
    assert_eq!(host.state(), LoadingState::Ready);
    host
}
