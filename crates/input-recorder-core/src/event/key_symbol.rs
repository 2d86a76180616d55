//! Normalized keyboard key identifiers.
//!
//! A [`KeySymbol`] is stored as a single string. A string of exactly one
//! character is always a literal character, anything longer is a key name,
//! so the two cases never collide.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A keyboard key: a literal character or a named non-printable key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum KeySymbol {
    /// Printable character, e.g. `a` or `/`.
    Char(char),
    /// Named non-printable key, e.g. `shift` or `f5`.
    Named(NamedKey),
    /// Any other multi-character name, kept verbatim (e.g. `<65>`).
    Unknown(String),
}

impl KeySymbol {
    /// Parse the persisted string form.
    pub fn parse(s: &str) -> Self {
        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return KeySymbol::Char(c);
        }

        match NamedKey::from_name(s) {
            Some(named) => KeySymbol::Named(named),
            None => KeySymbol::Unknown(s.to_string()),
        }
    }

    /// Case-insensitive comparison used for hotkey matching.
    pub fn matches(&self, other: &KeySymbol) -> bool {
        self.to_string().to_lowercase() == other.to_string().to_lowercase()
    }
}

impl fmt::Display for KeySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySymbol::Char(c) => write!(f, "{}", c),
            KeySymbol::Named(named) => write!(f, "{}", named),
            KeySymbol::Unknown(raw) => f.write_str(raw),
        }
    }
}

impl From<String> for KeySymbol {
    fn from(s: String) -> Self {
        KeySymbol::parse(&s)
    }
}

impl From<&str> for KeySymbol {
    fn from(s: &str) -> Self {
        KeySymbol::parse(s)
    }
}

impl From<KeySymbol> for String {
    fn from(key: KeySymbol) -> Self {
        key.to_string()
    }
}

impl From<NamedKey> for KeySymbol {
    fn from(named: NamedKey) -> Self {
        KeySymbol::Named(named)
    }
}

/// Named keys that have no printable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    /// Either Alt key.
    Alt,
    /// Left Alt.
    AltLeft,
    /// Right Alt.
    AltRight,
    /// AltGr.
    AltGr,
    /// Backspace.
    Backspace,
    /// Caps Lock.
    CapsLock,
    /// Command / Windows / Super key.
    Cmd,
    /// Left Command.
    CmdLeft,
    /// Right Command.
    CmdRight,
    /// Either Control key.
    Ctrl,
    /// Left Control.
    CtrlLeft,
    /// Right Control.
    CtrlRight,
    /// Delete.
    Delete,
    /// Down arrow.
    Down,
    /// End.
    End,
    /// Enter / Return.
    Enter,
    /// Escape.
    Esc,
    /// Function key `F1`..`F24`.
    Function(u8),
    /// Home.
    Home,
    /// Insert.
    Insert,
    /// Left arrow.
    Left,
    /// Context menu key.
    Menu,
    /// Num Lock.
    NumLock,
    /// Page Down.
    PageDown,
    /// Page Up.
    PageUp,
    /// Pause / Break.
    Pause,
    /// Print Screen.
    PrintScreen,
    /// Right arrow.
    Right,
    /// Scroll Lock.
    ScrollLock,
    /// Left (or unspecified) Shift.
    Shift,
    /// Right Shift.
    ShiftRight,
    /// Space bar.
    Space,
    /// Tab.
    Tab,
    /// Up arrow.
    Up,
}

/// Highest function key number accepted by [`NamedKey::from_name`].
const MAX_FUNCTION_KEY: u8 = 24;

impl NamedKey {
    /// Look up a key by name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        let named = match lower.as_str() {
            "alt" => NamedKey::Alt,
            "alt_l" => NamedKey::AltLeft,
            "alt_r" => NamedKey::AltRight,
            "alt_gr" => NamedKey::AltGr,
            "backspace" => NamedKey::Backspace,
            "caps_lock" => NamedKey::CapsLock,
            "cmd" => NamedKey::Cmd,
            "cmd_l" => NamedKey::CmdLeft,
            "cmd_r" => NamedKey::CmdRight,
            "ctrl" => NamedKey::Ctrl,
            "ctrl_l" => NamedKey::CtrlLeft,
            "ctrl_r" => NamedKey::CtrlRight,
            "delete" => NamedKey::Delete,
            "down" => NamedKey::Down,
            "end" => NamedKey::End,
            "enter" => NamedKey::Enter,
            "esc" => NamedKey::Esc,
            "home" => NamedKey::Home,
            "insert" => NamedKey::Insert,
            "left" => NamedKey::Left,
            "menu" => NamedKey::Menu,
            "num_lock" => NamedKey::NumLock,
            "page_down" => NamedKey::PageDown,
            "page_up" => NamedKey::PageUp,
            "pause" => NamedKey::Pause,
            "print_screen" => NamedKey::PrintScreen,
            "right" => NamedKey::Right,
            "scroll_lock" => NamedKey::ScrollLock,
            "shift" => NamedKey::Shift,
            "shift_r" => NamedKey::ShiftRight,
            "space" => NamedKey::Space,
            "tab" => NamedKey::Tab,
            "up" => NamedKey::Up,
            other => {
                let number = other.strip_prefix('f')?.parse::<u8>().ok()?;
                if !(1..=MAX_FUNCTION_KEY).contains(&number) {
                    return None;
                }
                NamedKey::Function(number)
            }
        };
        Some(named)
    }
}

impl fmt::Display for NamedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NamedKey::Alt => "alt",
            NamedKey::AltLeft => "alt_l",
            NamedKey::AltRight => "alt_r",
            NamedKey::AltGr => "alt_gr",
            NamedKey::Backspace => "backspace",
            NamedKey::CapsLock => "caps_lock",
            NamedKey::Cmd => "cmd",
            NamedKey::CmdLeft => "cmd_l",
            NamedKey::CmdRight => "cmd_r",
            NamedKey::Ctrl => "ctrl",
            NamedKey::CtrlLeft => "ctrl_l",
            NamedKey::CtrlRight => "ctrl_r",
            NamedKey::Delete => "delete",
            NamedKey::Down => "down",
            NamedKey::End => "end",
            NamedKey::Enter => "enter",
            NamedKey::Esc => "esc",
            NamedKey::Function(n) => return write!(f, "f{}", n),
            NamedKey::Home => "home",
            NamedKey::Insert => "insert",
            NamedKey::Left => "left",
            NamedKey::Menu => "menu",
            NamedKey::NumLock => "num_lock",
            NamedKey::PageDown => "page_down",
            NamedKey::PageUp => "page_up",
            NamedKey::Pause => "pause",
            NamedKey::PrintScreen => "print_screen",
            NamedKey::Right => "right",
            NamedKey::ScrollLock => "scroll_lock",
            NamedKey::Shift => "shift",
            NamedKey::ShiftRight => "shift_r",
            NamedKey::Space => "space",
            NamedKey::Tab => "tab",
            NamedKey::Up => "up",
        };
        f.write_str(name)
    }
}
