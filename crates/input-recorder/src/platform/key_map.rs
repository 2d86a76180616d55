//! Translation from `rdev` hook events to core input types.

use input_recorder_core::{KeySymbol, MouseButton, NamedKey};

use rdev::{Button, Key};

/// Map a hooked key to its normalized symbol.
///
/// Letters are reported lowercase regardless of Shift; the separate shift
/// transitions carry the case. Keys without a name become `<code>`.
pub(crate) fn key_from_rdev(key: Key) -> KeySymbol {
    if let Some(c) = key_char(key) {
        return KeySymbol::Char(c);
    }

    let named = match key {
        Key::Alt => NamedKey::Alt,
        Key::AltGr => NamedKey::AltGr,
        Key::Backspace => NamedKey::Backspace,
        Key::CapsLock => NamedKey::CapsLock,
        Key::ControlLeft => NamedKey::CtrlLeft,
        Key::ControlRight => NamedKey::CtrlRight,
        Key::Delete | Key::KpDelete => NamedKey::Delete,
        Key::DownArrow => NamedKey::Down,
        Key::End => NamedKey::End,
        Key::Escape => NamedKey::Esc,
        Key::F1 => NamedKey::Function(1),
        Key::F2 => NamedKey::Function(2),
        Key::F3 => NamedKey::Function(3),
        Key::F4 => NamedKey::Function(4),
        Key::F5 => NamedKey::Function(5),
        Key::F6 => NamedKey::Function(6),
        Key::F7 => NamedKey::Function(7),
        Key::F8 => NamedKey::Function(8),
        Key::F9 => NamedKey::Function(9),
        Key::F10 => NamedKey::Function(10),
        Key::F11 => NamedKey::Function(11),
        Key::F12 => NamedKey::Function(12),
        Key::Home => NamedKey::Home,
        Key::Insert => NamedKey::Insert,
        Key::LeftArrow => NamedKey::Left,
        Key::MetaLeft => NamedKey::CmdLeft,
        Key::MetaRight => NamedKey::CmdRight,
        Key::NumLock => NamedKey::NumLock,
        Key::PageDown => NamedKey::PageDown,
        Key::PageUp => NamedKey::PageUp,
        Key::Pause => NamedKey::Pause,
        Key::PrintScreen => NamedKey::PrintScreen,
        Key::Return | Key::KpReturn => NamedKey::Enter,
        Key::RightArrow => NamedKey::Right,
        Key::ScrollLock => NamedKey::ScrollLock,
        Key::ShiftLeft => NamedKey::Shift,
        Key::ShiftRight => NamedKey::ShiftRight,
        Key::Space => NamedKey::Space,
        Key::Tab => NamedKey::Tab,
        Key::UpArrow => NamedKey::Up,
        Key::Function => return KeySymbol::Unknown("fn".to_string()),
        Key::Unknown(code) => return KeySymbol::Unknown(format!("<{}>", code)),
        other => return KeySymbol::Unknown(format!("<{:?}>", other)),
    };

    KeySymbol::Named(named)
}

/// Map a hooked mouse button. Unrecognized buttons are dropped.
pub(crate) fn button_from_rdev(button: Button) -> Option<MouseButton> {
    match button {
        Button::Left => Some(MouseButton::Left),
        Button::Right => Some(MouseButton::Right),
        Button::Middle => Some(MouseButton::Middle),
        Button::Unknown(_) => None,
    }
}

fn key_char(key: Key) -> Option<char> {
    let c = match key {
        Key::KeyA => 'a',
        Key::KeyB => 'b',
        Key::KeyC => 'c',
        Key::KeyD => 'd',
        Key::KeyE => 'e',
        Key::KeyF => 'f',
        Key::KeyG => 'g',
        Key::KeyH => 'h',
        Key::KeyI => 'i',
        Key::KeyJ => 'j',
        Key::KeyK => 'k',
        Key::KeyL => 'l',
        Key::KeyM => 'm',
        Key::KeyN => 'n',
        Key::KeyO => 'o',
        Key::KeyP => 'p',
        Key::KeyQ => 'q',
        Key::KeyR => 'r',
        Key::KeyS => 's',
        Key::KeyT => 't',
        Key::KeyU => 'u',
        Key::KeyV => 'v',
        Key::KeyW => 'w',
        Key::KeyX => 'x',
        Key::KeyY => 'y',
        Key::KeyZ => 'z',
        Key::Num0 | Key::Kp0 => '0',
        Key::Num1 | Key::Kp1 => '1',
        Key::Num2 | Key::Kp2 => '2',
        Key::Num3 | Key::Kp3 => '3',
        Key::Num4 | Key::Kp4 => '4',
        Key::Num5 | Key::Kp5 => '5',
        Key::Num6 | Key::Kp6 => '6',
        Key::Num7 | Key::Kp7 => '7',
        Key::Num8 | Key::Kp8 => '8',
        Key::Num9 | Key::Kp9 => '9',
        Key::BackQuote => '`',
        Key::Minus | Key::KpMinus => '-',
        Key::Equal => '=',
        Key::LeftBracket => '[',
        Key::RightBracket => ']',
        Key::SemiColon => ';',
        Key::Quote => '\'',
        Key::BackSlash | Key::IntlBackslash => '\\',
        Key::Comma => ',',
        Key::Dot => '.',
        Key::Slash | Key::KpDivide => '/',
        Key::KpPlus => '+',
        Key::KpMultiply => '*',
        _ => return None,
    };
    Some(c)
}
