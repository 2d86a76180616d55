use std::fmt;

/// Which engine, if any, currently owns the event log.
///
/// Recording and Playing are mutually exclusive: entering one first stops
/// the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlState {
    /// Neither capture nor replay is running.
    #[default]
    Idle,
    /// Capture engine is appending to the log.
    Recording,
    /// Replay engine is injecting the log.
    Playing,
}

impl fmt::Display for ControlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ControlState::Idle => "idle",
            ControlState::Recording => "recording",
            ControlState::Playing => "playing",
        };
        f.write_str(name)
    }
}
