use std::fmt;

/// The two configurable hotkeys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindRole {
    /// Starts playback when idle, stops it when playing.
    Toggle,
    /// Stops everything and exits the process.
    Kill,
}

impl BindRole {
    /// The role a key must not collide with.
    pub fn other(self) -> Self {
        match self {
            BindRole::Toggle => BindRole::Kill,
            BindRole::Kill => BindRole::Toggle,
        }
    }
}

impl fmt::Display for BindRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindRole::Toggle => f.write_str("Toggle"),
            BindRole::Kill => f.write_str("Kill"),
        }
    }
}
