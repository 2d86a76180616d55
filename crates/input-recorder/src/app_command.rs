use input_recorder_core::BindRole;

/// Commands sent from the hotkey handler and tray menu to the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    /// Start capturing a new recording.
    StartRecording,
    /// Stop the current recording.
    StopRecording,
    /// Replay the current log.
    StartPlayback,
    /// Stop the running replay.
    StopPlayback,
    /// Toggle-key press: stop when playing, otherwise play.
    TogglePlayback,
    /// Flip the loop-playback setting.
    ToggleLoop,
    /// Write the log to the configured recording path.
    Save,
    /// Replace the log from the configured recording path.
    Load,
    /// Empty the log.
    Clear,
    /// Bind the next key press to a role.
    CaptureKeybind(BindRole),
    /// Leave keybind settings.
    CloseKeybinds,
    /// Kill-key press: stop everything and exit.
    Kill,
    /// Request application shutdown.
    Shutdown,
}
