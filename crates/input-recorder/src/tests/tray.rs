use crate::{
    AppCommand, TrayIconState, TrayMenuIds, TrayStatus, TrayStatusTracker,
    tests::support::bound_controller, tray_icon_state::describe_outcome,
};

use input_recorder_core::{BindRole, ControlState, KeySymbol, KeybindStatus, Outcome, SessionSnapshot};

use std::{path::PathBuf, time::Duration};

use tray_icon::menu::MenuId;

fn menu_ids() -> TrayMenuIds {
    TrayMenuIds {
        record: MenuId::new("record"),
        stop_recording: MenuId::new("stop_recording"),
        play: MenuId::new("play"),
        stop_playback: MenuId::new("stop_playback"),
        loop_playback: MenuId::new("loop_playback"),
        save: MenuId::new("save"),
        load: MenuId::new("load"),
        clear: MenuId::new("clear"),
        set_toggle_key: MenuId::new("set_toggle_key"),
        set_kill_key: MenuId::new("set_kill_key"),
        keybinds_done: MenuId::new("keybinds_done"),
        exit: MenuId::new("exit"),
    }
}

/// WHAT: Each menu item maps to its command
/// WHY: The tray is the main control surface
#[test]
fn given_menu_ids_when_clicked_then_matching_commands() {
    let ids = menu_ids();

    assert_eq!(
        ids.command_for(&MenuId::new("record")),
        Some(AppCommand::StartRecording)
    );
    assert_eq!(
        ids.command_for(&MenuId::new("loop_playback")),
        Some(AppCommand::ToggleLoop)
    );
    assert_eq!(
        ids.command_for(&MenuId::new("set_kill_key")),
        Some(AppCommand::CaptureKeybind(BindRole::Kill))
    );
    assert_eq!(
        ids.command_for(&MenuId::new("exit")),
        Some(AppCommand::Shutdown)
    );
    assert_eq!(ids.command_for(&MenuId::new("unknown")), None);
}

/// WHAT: Icon follows the control state; configuring shows only when idle
/// WHY: The icon is the at-a-glance status indicator
#[test]
fn given_snapshots_when_mapped_then_icon_matches_state() {
    let mut snapshot = SessionSnapshot::default();
    assert_eq!(TrayIconState::from_snapshot(&snapshot), TrayIconState::Idle);

    snapshot.configuring = true;
    assert_eq!(
        TrayIconState::from_snapshot(&snapshot),
        TrayIconState::Configuring
    );

    snapshot.state = ControlState::Recording;
    assert_eq!(
        TrayIconState::from_snapshot(&snapshot),
        TrayIconState::Recording
    );

    snapshot.state = ControlState::Playing;
    assert_eq!(
        TrayIconState::from_snapshot(&snapshot),
        TrayIconState::Playing
    );
}

/// WHAT: Tooltip shows state, live count, keybinds and last outcome
/// WHY: The tooltip replaces the status labels of a settings window
#[test]
fn given_recording_snapshot_when_status_built_then_tooltip_complete() {
    let snapshot = SessionSnapshot {
        state: ControlState::Recording,
        event_count: 42,
        configuring: false,
        keybinds: KeybindStatus {
            toggle: Some(KeySymbol::parse("f8")),
            kill: None,
        },
        last_outcome: Some(Outcome::Saved {
            path: PathBuf::from("rec.json"),
            event_count: 3,
        }),
    };

    let status = TrayStatus::from_snapshot(&snapshot, true);

    assert!(status.loop_playback);
    assert_eq!(status.icon, TrayIconState::Recording);
    assert!(status.tooltip.contains("Recording (42 events)"));
    assert!(status.tooltip.contains("Toggle: f8 | Kill: not set"));
    assert!(status.tooltip.contains("Saved 3 events to rec.json"));
}

/// WHAT: Outcomes render as short user-facing sentences
/// WHY: Failures must be visible without reading logs
#[test]
fn given_outcomes_when_described_then_readable() {
    assert_eq!(describe_outcome(&Outcome::NothingToPlay), "Nothing to play");
    assert_eq!(
        describe_outcome(&Outcome::Busy { operation: "load" }),
        "Cannot load while busy"
    );
    assert_eq!(
        describe_outcome(&Outcome::KeybindSet {
            role: BindRole::Toggle,
            key: KeySymbol::parse("f8"),
        }),
        "Toggle key set to f8"
    );
}

/// WHAT: The tracker emits a status only when the tray view changes
/// WHY: Repeated snapshots must not spam the UI thread
#[test]
fn given_tracker_when_same_snapshot_repeated_then_emitted_once() {
    let mut tracker = TrayStatusTracker::default();
    let snapshot = SessionSnapshot::default();

    assert!(tracker.update(&snapshot, false).is_some());
    assert!(tracker.update(&snapshot, false).is_none());

    // Loop Playback is not part of the snapshot but still redraws
    let status = tracker.update(&snapshot, true);
    assert_eq!(status.map(|s| s.loop_playback), Some(true));
}

/// WHAT: A state change reaches the tray through the snapshot subscription
/// WHY: The tray redraws on published changes instead of polling
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_subscribed_tray_when_recording_starts_then_recording_status_emitted() {
    // Given: A tracker already showing the idle snapshot
    let controller = bound_controller();
    let mut snapshot_rx = controller.subscribe();
    let mut tracker = TrayStatusTracker::default();
    let initial = snapshot_rx.borrow_and_update().clone();
    assert!(tracker.update(&initial, false).is_some());

    // When: Recording starts
    controller.start_recording();
    tokio::time::timeout(Duration::from_secs(5), snapshot_rx.changed())
        .await
        .unwrap()
        .unwrap();
    let snapshot = snapshot_rx.borrow_and_update().clone();

    // Then: The tracker emits the recording status
    let status = tracker.update(&snapshot, false).unwrap();
    assert_eq!(status.icon, TrayIconState::Recording);
    assert_eq!(status.state, ControlState::Recording);

    controller.stop_recording();
}
