//! Tests for focus handling: the blur grace period, clicks on results, and
//! what the field shows in each focus state.

use crate::common::{api_data, ready_host};
use docsift::Event;
use std::time::Duration;

const MS: Duration = Duration::from_millis(1);

#[test]
fn test_focus_clears_field_and_results() {
    let mut host = ready_host(api_data());
    host.type_text("emit");
    host.blur();
    host.advance(100 * MS);
    assert_eq!(host.field_value, "emit");

    host.focus();
    assert_eq!(host.field_value, "");
    assert!(host.rendered.is_empty());
    assert_eq!(host.widget.query(), "");
}

#[test]
fn test_blur_waits_for_grace_period() {
    let mut host = ready_host(api_data());
    host.type_text("emit");
    host.blur();

    host.advance(99 * MS);
    assert!(host.has_focus_class);

    host.advance(MS);
    assert!(!host.has_focus_class);
    assert!(!host.widget.has_focus());
}

#[test]
fn test_refocus_cancels_pending_blur() {
    let mut host = ready_host(api_data());
    host.type_text("emit");
    host.blur();
    host.advance(50 * MS);
    host.focus();
    host.advance(200 * MS);

    assert!(host.has_focus_class);
    assert!(host.widget.has_focus());
}

#[test]
fn test_pressed_result_holds_focus_until_release() {
    let mut host = ready_host(api_data());
    host.type_text("emit");
    host.send(Event::ResultPointerDown);
    host.blur();

    host.advance(100 * MS);
    assert!(host.has_focus_class);
    host.advance(300 * MS);
    assert!(host.has_focus_class);
    assert_eq!(host.rendered.len(), 6);

    host.send(Event::ResultPointerUp);
    assert!(!host.has_focus_class);
    assert_eq!(host.field_value, "emit");

    host.run_until_idle();
    assert_eq!(host.pending_timers(), 0);
    assert!(!host.has_focus_class);
}

#[test]
fn test_release_without_blur_still_commits() {
    let mut host = ready_host(api_data());
    host.type_text("on");
    host.send(Event::ResultPointerDown);
    host.send(Event::ResultPointerUp);

    assert!(!host.has_focus_class);
    assert_eq!(host.field_value, "on");
}

#[test]
fn test_unreleased_press_gives_up_focus_eventually() {
    let mut host = ready_host(api_data());
    host.type_text("emit");
    host.send(Event::ResultPointerDown);
    host.blur();

    // held for ten retries past the first blur delay
    host.advance(1099 * MS);
    assert!(host.widget.has_focus());

    host.advance(MS);
    assert!(!host.widget.has_focus());
    assert!(!host.has_focus_class);
    assert_eq!(host.field_value, "emit");
    assert_eq!(host.pending_timers(), 0);

    host.advance(60_000 * MS);
    assert_eq!(host.pending_timers(), 0);
}

#[test]
fn test_unreleased_press_does_not_hold_next_blur() {
    let mut host = ready_host(api_data());
    host.type_text("emit");
    host.send(Event::ResultPointerDown);
    host.blur();
    host.run_until_idle();

    host.focus();
    host.blur();
    host.advance(100 * MS);
    assert!(!host.widget.has_focus());
}
