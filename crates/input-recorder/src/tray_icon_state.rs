use input_recorder_core::{ControlState, KeySymbol, Outcome, SessionSnapshot};

/// Tray icon states corresponding to application workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayIconState {
    /// Nothing running.
    Idle,
    /// Capturing input.
    Recording,
    /// Replaying the log.
    Playing,
    /// Keybind settings open.
    Configuring,
}

impl TrayIconState {
    /// Icon for a session snapshot. Configuration only shows while idle.
    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Self {
        match snapshot.state {
            ControlState::Recording => TrayIconState::Recording,
            ControlState::Playing => TrayIconState::Playing,
            ControlState::Idle if snapshot.configuring => TrayIconState::Configuring,
            ControlState::Idle => TrayIconState::Idle,
        }
    }

    /// RGBA fill colour of the generated icon.
    pub(crate) fn color(self) -> [u8; 4] {
        match self {
            TrayIconState::Idle => [128, 128, 128, 255],
            TrayIconState::Recording => [220, 40, 40, 255],
            TrayIconState::Playing => [40, 180, 70, 255],
            TrayIconState::Configuring => [50, 110, 220, 255],
        }
    }
}

/// Everything the main thread needs to redraw the tray.
#[derive(Debug, Clone, PartialEq)]
pub struct TrayStatus {
    /// Icon to show.
    pub icon: TrayIconState,
    /// Control state, used to enable menu items.
    pub state: ControlState,
    /// Whether keybind settings are open.
    pub configuring: bool,
    /// Loop Playback check state.
    pub loop_playback: bool,
    /// Hover text.
    pub tooltip: String,
}

impl TrayStatus {
    /// Build the tray view of `snapshot`.
    pub fn from_snapshot(snapshot: &SessionSnapshot, loop_playback: bool) -> Self {
        Self {
            icon: TrayIconState::from_snapshot(snapshot),
            state: snapshot.state,
            configuring: snapshot.configuring,
            loop_playback,
            tooltip: tooltip(snapshot),
        }
    }
}

/// Last status pushed to the tray, so unchanged snapshots are not resent.
#[derive(Debug, Default)]
pub(crate) struct TrayStatusTracker {
    last: Option<TrayStatus>,
}

impl TrayStatusTracker {
    /// Status to push for `snapshot`, or `None` when the tray already shows it.
    pub(crate) fn update(
        &mut self,
        snapshot: &SessionSnapshot,
        loop_playback: bool,
    ) -> Option<TrayStatus> {
        let status = TrayStatus::from_snapshot(snapshot, loop_playback);
        if self.last.as_ref() == Some(&status) {
            return None;
        }
        self.last = Some(status.clone());
        Some(status)
    }
}

fn tooltip(snapshot: &SessionSnapshot) -> String {
    let mut lines = vec![
        format!(
            "Input Recorder - {} ({} events)",
            snapshot.state, snapshot.event_count
        ),
        format!(
            "Toggle: {} | Kill: {}",
            key_label(snapshot.keybinds.toggle.as_ref()),
            key_label(snapshot.keybinds.kill.as_ref())
        ),
    ];

    if snapshot.configuring {
        lines.push("Keybind settings open".to_string());
    }

    if let Some(outcome) = &snapshot.last_outcome {
        lines.push(describe_outcome(outcome));
    }

    lines.join("\n")
}

fn key_label(key: Option<&KeySymbol>) -> String {
    key.map_or_else(|| "not set".to_string(), |k| k.to_string())
}

/// One-line, user-facing description of an operation result.
pub fn describe_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Saved { path, event_count } => {
            format!("Saved {} events to {}", event_count, path.display())
        }
        Outcome::Loaded { path, event_count } => {
            format!("Loaded {} events from {}", event_count, path.display())
        }
        Outcome::Cleared => "Recording cleared".to_string(),
        Outcome::SaveFailed { reason } => format!("Save failed: {}", reason),
        Outcome::LoadFailed { reason } => format!("Load failed: {}", reason),
        Outcome::NothingToSave => "Nothing to save".to_string(),
        Outcome::NothingToPlay => "Nothing to play".to_string(),
        Outcome::Busy { operation } => format!("Cannot {} while busy", operation),
        Outcome::KeybindSet { role, key } => format!("{} key set to {}", role, key),
        Outcome::KeybindRejected { role, key } => {
            format!("{} is already bound, choose another {} key", key, role)
        }
        Outcome::KeybindsIncomplete => "Set both keybinds before closing".to_string(),
    }
}
