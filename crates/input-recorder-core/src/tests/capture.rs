use crate::{
    BindRole, CaptureEngine, EventKind, EventLog, InputBackend, KeySymbol, KeybindRegistry,
    MouseButton, SessionContext, tests::support::FakeBackend,
};

use std::sync::Arc;

fn start_capture(backend: &Arc<FakeBackend>, log: &EventLog) -> (CaptureEngine, SessionContext) {
    let context = SessionContext::new();
    let engine = CaptureEngine::start(
        Arc::clone(backend) as Arc<dyn InputBackend>,
        log.clone(),
        KeybindRegistry::new(),
        context.clone(),
    );
    (engine, context)
}

/// WHAT: Every notification kind becomes one event, in order
/// WHY: Insertion order defines replay order
#[test]
fn given_active_capture_when_input_arrives_then_events_appended_in_order() {
    // Given: A capture engine on a fake backend
    let backend = FakeBackend::new();
    let log = EventLog::new();
    let (mut engine, context) = start_capture(&backend, &log);

    // When: One notification of each kind arrives
    backend.move_to(10, 20);
    backend.button(10, 20, MouseButton::Left, true);
    backend.button(10, 20, MouseButton::Left, false);
    backend.scroll(10, 20, 0, -2);
    backend.key("a", true);
    backend.key("a", false);
    let event_count = engine.stop();

    // Then: Six events with the right kinds, non-decreasing t, live count
    let events = log.snapshot();
    assert_eq!(event_count, 6);
    assert_eq!(context.snapshot().event_count, 6);
    let tags: Vec<_> = events.iter().map(|e| e.kind.tag()).collect();
    assert_eq!(
        tags,
        ["move", "click", "click", "scroll", "key_press", "key_release"]
    );
    assert!(events.windows(2).all(|w| w[0].t <= w[1].t));
    assert!(events.iter().all(|e| e.t >= 0.0));
}

/// WHAT: Nothing is appended after stop returns
/// WHY: Stopping must be deterministic
#[test]
fn given_stopped_capture_when_input_arrives_then_log_unchanged() {
    // Given: A capture that recorded one event and was stopped
    let backend = FakeBackend::new();
    let log = EventLog::new();
    let (mut engine, _context) = start_capture(&backend, &log);
    backend.move_to(1, 1);
    engine.stop();

    // When: More input arrives
    backend.move_to(2, 2);
    backend.key("b", true);

    // Then: The log still holds one event and the listener is gone
    assert_eq!(log.len(), 1);
    assert_eq!(backend.listener_count(), 0);
    assert!(!engine.is_active());
}

/// WHAT: Stopping twice is a no-op the second time
/// WHY: Stop must be idempotent
#[test]
fn given_stopped_capture_when_stopping_again_then_same_count() {
    let backend = FakeBackend::new();
    let log = EventLog::new();
    let (mut engine, _context) = start_capture(&backend, &log);
    backend.move_to(1, 1);

    let first = engine.stop();
    let second = engine.stop();

    assert_eq!(first, 1);
    assert_eq!(second, 1);
}

/// WHAT: A capture with no input yields an empty, valid log
/// WHY: Zero events is not an error
#[test]
fn given_no_input_when_stopping_then_empty_log() {
    let backend = FakeBackend::new();
    let log = EventLog::new();
    let (mut engine, _context) = start_capture(&backend, &log);

    assert_eq!(engine.stop(), 0);
    assert!(log.is_empty());
}

/// WHAT: Starting a capture discards the previous contents of the log
/// WHY: Each recording session starts from an empty log
#[test]
fn given_log_with_events_when_capture_starts_then_log_cleared() {
    let backend = FakeBackend::new();
    let log = EventLog::new();
    let (mut first, _) = start_capture(&backend, &log);
    backend.move_to(1, 1);
    first.stop();

    let (mut second, _) = start_capture(&backend, &log);
    second.stop();

    assert!(log.is_empty());
}

/// WHAT: Presses of the bound hotkeys are not recorded
/// WHY: Replaying a control key would re-trigger playback control
#[test]
#[allow(clippy::unwrap_used)]
fn given_bound_hotkeys_when_pressed_during_capture_then_not_recorded() {
    // Given: Toggle bound to F8 and a capture running
    let backend = FakeBackend::new();
    let log = EventLog::new();
    let registry = KeybindRegistry::new();
    registry
        .bind(BindRole::Toggle, KeySymbol::parse("f8"))
        .unwrap();
    let mut engine = CaptureEngine::start(
        Arc::clone(&backend) as Arc<dyn InputBackend>,
        log.clone(),
        registry,
        SessionContext::new(),
    );

    // When: The toggle key and a normal key are pressed
    backend.key("F8", true);
    backend.key("F8", false);
    backend.key("x", true);
    engine.stop();

    // Then: Only the normal key is in the log
    let kinds: Vec<_> = log.snapshot().into_iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![EventKind::KeyPress {
            key: KeySymbol::Char('x')
        }]
    );
}

/// WHAT: Concurrent appends from several threads are all kept
/// WHY: The log lock must prevent torn writes under contention
#[test]
#[allow(clippy::unwrap_used)]
fn given_concurrent_notifications_when_capturing_then_no_events_lost() {
    // Given: A capture engine
    let backend = FakeBackend::new();
    let log = EventLog::new();
    let (mut engine, context) = start_capture(&backend, &log);

    // When: 4 threads each deliver 500 moves
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let backend = Arc::clone(&backend);
            std::thread::spawn(move || {
                for n in 0..500 {
                    backend.move_to(i, n);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    engine.stop();

    // Then: All 2000 events are present, time-ordered, and counted
    let events = log.snapshot();
    assert_eq!(events.len(), 2000);
    assert_eq!(context.snapshot().event_count, 2000);
    assert!(events.windows(2).all(|w| w[0].t <= w[1].t));
}
