//! Widget invariants over random event sequences.

use crate::common::{api_data, make_data, make_records};
use docsift::{DataSource, Event, Key, LoadingState, SearchWidget, Task, WidgetConfig};
use proptest::prelude::*;

fn event_strategy() -> impl Strategy<Value = Event> {
    prop_oneof![
        Just(Event::FocusIn),
        Just(Event::FocusOut),
        "[a-z ]{0,6}".prop_map(Event::Input),
        prop::sample::select(vec![
            Key::Enter,
            Key::Escape,
            Key::ArrowUp,
            Key::ArrowDown,
            Key::Other,
        ])
            .prop_map(Event::KeyDown),
        Just(Event::ResultPointerDown),
        Just(Event::ResultPointerUp),
        Just(Event::Timer(Task::IndexBatch)),
        Just(Event::Timer(Task::RevealLoading)),
        (0u64..4).prop_map(|epoch| Event::Timer(Task::CommitBlur { epoch })),
        (0u64..4).prop_map(|epoch| Event::Timer(Task::RetryBlur { epoch })),
    ]
}

fn source_strategy() -> impl Strategy<Value = DataSource> {
    prop_oneof![
        Just(DataSource::Resident(api_data())),
        Just(DataSource::Resident(make_data(make_records(30)))),
        Just(DataSource::Inline("{".to_string())),
        Just(DataSource::Unavailable),
    ]
}

fn rank(state: LoadingState) -> u8 {
    match state {
        LoadingState::Idle => 0,
        LoadingState::Loading => 1,
        LoadingState::Ready | LoadingState::Failure => 2,
    }
}

proptest! {
    #[test]
    fn prop_loading_state_only_moves_forward(
        source in source_strategy(),
        batch_size in 1usize..8,
        events in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let config = WidgetConfig { batch_size, ..WidgetConfig::default() };
        let mut widget = SearchWidget::new(config, source);
        let mut previous = widget.loading_state();

        for event in events {
            widget.dispatch(event);
            let state = widget.loading_state();
            prop_assert!(rank(state) >= rank(previous));
            if previous.is_terminal() {
                prop_assert_eq!(state, previous);
            }
            previous = state;
        }
    }

    #[test]
    fn prop_cursor_stays_within_results(events in prop::collection::vec(event_strategy(), 0..60)) {
        let mut widget = SearchWidget::new(WidgetConfig::default(), api_data());
        for event in events {
            widget.dispatch(event);
            let len = widget.results().len();
            prop_assert!(len <= widget.config().limit);
            if let Some(current) = widget.cursor() {
                prop_assert!(current < len);
            }
        }
    }

    #[test]
    fn prop_results_only_when_ready(
        source in source_strategy(),
        events in prop::collection::vec(event_strategy(), 0..40),
    ) {
        let config = WidgetConfig { batch_size: 2, ..WidgetConfig::default() };
        let mut widget = SearchWidget::new(config, source);
        for event in events {
            widget.dispatch(event);
            if widget.loading_state() != LoadingState::Ready || widget.query().is_empty() {
                prop_assert!(widget.results().is_empty());
            }
        }
    }
}
