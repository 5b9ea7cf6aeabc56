//! Tests for index loading: batching, the deferred loading class, failure,
//! and queries typed before the index is ready.

use crate::common::{foo_bar_data, host, index_of, make_data, make_record, make_records};
use docsift::testing::FakeHost;
use docsift::{
    search, DataSource, Effect, Event, LoadingState, SearchOptions, SearchWidget, Task,
    WidgetConfig,
};
use std::time::Duration;

const MS: Duration = Duration::from_millis(1);

fn one_record_batches() -> FakeHost {
    let config = WidgetConfig {
        batch_size: 1,
        ..WidgetConfig::default()
    };
    FakeHost::new(SearchWidget::new(config, foo_bar_data()))
}

#[test]
fn test_nothing_loads_before_focus() {
    let mut host = host(foo_bar_data());
    host.type_text("foo");

    assert_eq!(host.state(), LoadingState::Idle);
    assert!(host.rendered.is_empty());
    assert_eq!(host.pending_timers(), 0);
}

#[test]
fn test_large_payload_is_indexed_in_slices() {
    let mut host = host(make_data(make_records(250)));
    host.focus();

    assert_eq!(host.state(), LoadingState::Loading);
    assert_eq!(host.widget.index().map(|index| index.len()), None);

    // input between slices is accepted and kept
    host.advance(10 * MS);
    assert_eq!(host.state(), LoadingState::Loading);
    host.type_text("symbol1");
    assert!(host.rendered.is_empty());

    host.advance(10 * MS);
    assert_eq!(host.state(), LoadingState::Ready);
    assert_eq!(host.batch_cycles, 2);
    assert_eq!(host.widget.index().map(|index| index.len()), Some(250));
    assert_eq!(host.rendered.len(), 10);
    assert!(host.rendered[0].contains("<b>Symbol1</b></a>"));
}

#[test]
fn test_index_matches_single_pass_build() {
    let mut host = host(make_data(make_records(250)));
    host.focus();
    host.run_until_idle();

    let direct = index_of(make_data(make_records(250)));
    let batched = host.widget.index().unwrap();
    assert_eq!(batched.vocabulary(), direct.vocabulary());
    for term_idx in 0..direct.vocabulary().len() {
        assert_eq!(batched.postings(term_idx), direct.postings(term_idx));
    }
}

#[test]
fn test_fast_load_never_shows_loading() {
    let mut host = host(make_data(make_records(250)));
    host.focus();
    host.run_until_idle();

    assert_eq!(host.state_class, Some("ready"));
    assert!(!host.log.iter().any(|effect| matches!(
        effect,
        Effect::SetStateClass {
            add: LoadingState::Loading,
            ..
        }
    )));
}

#[test]
fn test_slow_load_reveals_loading_after_delay() {
    let config = WidgetConfig {
        batch_delay_ms: 400,
        ..WidgetConfig::default()
    };
    let mut host = FakeHost::new(SearchWidget::new(config, make_data(make_records(250))));
    host.focus();

    host.advance(499 * MS);
    assert_eq!(host.state_class, None);
    assert_eq!(host.widget.loading_state(), LoadingState::Loading);
    assert_eq!(host.widget.shown_state(), LoadingState::Idle);

    host.advance(MS);
    assert_eq!(host.state_class, Some("loading"));
    assert_eq!(host.widget.shown_state(), LoadingState::Loading);

    host.run_until_idle();
    assert_eq!(host.state_class, Some("ready"));
    assert!(host.log.contains(&Effect::SetStateClass {
        remove: LoadingState::Loading,
        add: LoadingState::Ready,
    }));
}

#[test]
fn test_query_typed_while_loading_matches_direct_search() {
    let mut host = one_record_batches();
    host.focus();
    host.type_text("bar");
    assert_eq!(host.state(), LoadingState::Loading);
    assert!(host.rendered.is_empty());

    host.run_until_idle();

    let index = index_of(foo_bar_data());
    let direct: Vec<u32> = search(&index, "bar", SearchOptions::default())
        .hits
        .iter()
        .map(|hit| hit.id.get())
        .collect();
    let shown: Vec<u32> = host.widget.results().iter().map(|row| row.id.get()).collect();
    assert_eq!(shown, direct);
    assert_eq!(shown, vec![1, 2]);
}

#[test]
fn test_buffered_query_evaluated_once_with_last_value() {
    let mut host = one_record_batches();
    host.focus();
    host.type_text("foo");
    host.type_text("bar");
    host.run_until_idle();

    let ready_at = host
        .log
        .iter()
        .position(|effect| {
            matches!(
                effect,
                Effect::SetStateClass {
                    add: LoadingState::Ready,
                    ..
                }
            )
        })
        .unwrap();

    let before: Vec<&Effect> = host.log[..ready_at]
        .iter()
        .filter(|effect| matches!(effect, Effect::RenderResults(_)))
        .collect();
    assert!(before
        .iter()
        .all(|effect| matches!(effect, Effect::RenderResults(rows) if rows.is_empty())));

    let after: Vec<&Effect> = host.log[ready_at..]
        .iter()
        .filter(|effect| matches!(effect, Effect::RenderResults(_)))
        .collect();
    assert_eq!(after.len(), 1);
    assert_eq!(host.widget.query(), "bar");
    assert_eq!(host.rendered.len(), 2);
}

#[test]
fn test_malformed_payload_fails_for_good() {
    let source = DataSource::Inline("typedoc.search.data = {oops".to_string());
    let mut host = FakeHost::new(SearchWidget::new(WidgetConfig::default(), source));
    host.focus();

    assert_eq!(host.state(), LoadingState::Failure);
    assert_eq!(host.state_class, Some("failure"));

    host.type_text("foo");
    assert!(host.rendered.is_empty());

    host.blur();
    host.run_until_idle();
    host.focus();
    host.run_until_idle();

    assert_eq!(host.state(), LoadingState::Failure);
    let class_changes = host
        .log
        .iter()
        .filter(|effect| matches!(effect, Effect::SetStateClass { .. }))
        .count();
    assert_eq!(class_changes, 1);
}

#[test]
fn test_duplicate_ids_fail() {
    let data = make_data(vec![make_record(1, "a", None), make_record(1, "b", None)]);
    let mut host = host(data);
    host.focus();
    assert_eq!(host.state(), LoadingState::Failure);
}

#[test]
fn test_stray_batch_timer_is_harmless() {
    let mut widget = SearchWidget::new(WidgetConfig::default(), foo_bar_data());
    assert!(widget.dispatch(Event::Timer(Task::IndexBatch)).is_empty());
    assert_eq!(widget.loading_state(), LoadingState::Idle);
}
