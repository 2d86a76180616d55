use std::fmt;

use serde::{Deserialize, Serialize};

/// Mouse button as stored in a recording.
///
/// Stored as its lowercase name. Names other than the five standard buttons
/// (e.g. `button8` or `unknown`) load as [`MouseButton::Other`] so a
/// recording from another platform still opens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MouseButton {
    /// Primary button.
    Left,
    /// Secondary button.
    Right,
    /// Wheel button.
    Middle,
    /// First extended button (browser back).
    X1,
    /// Second extended button (browser forward).
    X2,
    /// Any other button name, kept verbatim. Not injectable.
    Other(String),
}

impl MouseButton {
    /// Parse the persisted name.
    pub fn parse(name: &str) -> Self {
        match name {
            "left" => MouseButton::Left,
            "right" => MouseButton::Right,
            "middle" => MouseButton::Middle,
            "x1" => MouseButton::X1,
            "x2" => MouseButton::X2,
            other => MouseButton::Other(other.to_string()),
        }
    }
}

impl fmt::Display for MouseButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MouseButton::Left => "left",
            MouseButton::Right => "right",
            MouseButton::Middle => "middle",
            MouseButton::X1 => "x1",
            MouseButton::X2 => "x2",
            MouseButton::Other(name) => name.as_str(),
        };
        f.write_str(name)
    }
}

impl From<String> for MouseButton {
    fn from(name: String) -> Self {
        MouseButton::parse(&name)
    }
}

impl From<MouseButton> for String {
    fn from(button: MouseButton) -> Self {
        button.to_string()
    }
}
