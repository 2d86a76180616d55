/// What a global key press means to the control state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotkeyAction {
    /// Not a bound key, or keybind settings are open.
    Ignored,
    /// Start playback when idle, stop it when playing.
    TogglePlayback,
    /// Stop everything and exit the process.
    Kill,
}
