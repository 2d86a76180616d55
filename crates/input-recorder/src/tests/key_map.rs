use crate::platform::{button_from_rdev, key_from_rdev};

use input_recorder_core::{KeySymbol, MouseButton, NamedKey};

use rdev::{Button, Key};

/// WHAT: Letters map to lowercase characters
/// WHY: Shift is recorded as its own key transition
#[test]
fn given_letter_keys_when_mapped_then_lowercase_chars() {
    assert_eq!(key_from_rdev(Key::KeyA), KeySymbol::Char('a'));
    assert_eq!(key_from_rdev(Key::KeyZ), KeySymbol::Char('z'));
    assert_eq!(key_from_rdev(Key::Num5), KeySymbol::Char('5'));
    assert_eq!(key_from_rdev(Key::Kp5), KeySymbol::Char('5'));
    assert_eq!(key_from_rdev(Key::Slash), KeySymbol::Char('/'));
}

/// WHAT: Non-printable keys map to their names
/// WHY: Names are what the recording file and keybinds store
#[test]
fn given_named_keys_when_mapped_then_named_symbols() {
    assert_eq!(
        key_from_rdev(Key::ShiftLeft),
        KeySymbol::Named(NamedKey::Shift)
    );
    assert_eq!(
        key_from_rdev(Key::F8),
        KeySymbol::Named(NamedKey::Function(8))
    );
    assert_eq!(key_from_rdev(Key::Return).to_string(), "enter");
    assert_eq!(key_from_rdev(Key::Escape).to_string(), "esc");
    assert_eq!(key_from_rdev(Key::ControlRight).to_string(), "ctrl_r");
}

/// WHAT: Unknown key codes keep their code in angle brackets
/// WHY: Unmappable keys are still recorded and skipped on replay
#[test]
fn given_unknown_key_when_mapped_then_code_preserved() {
    let key = key_from_rdev(Key::Unknown(255));

    assert_eq!(key, KeySymbol::Unknown("<255>".to_string()));
    assert_eq!(KeySymbol::parse(&key.to_string()), key);
}

/// WHAT: Standard buttons map and unknown ones are dropped
/// WHY: Only buttons the injector can replay are captured
#[test]
fn given_mouse_buttons_when_mapped_then_known_only() {
    assert_eq!(button_from_rdev(Button::Left), Some(MouseButton::Left));
    assert_eq!(button_from_rdev(Button::Right), Some(MouseButton::Right));
    assert_eq!(button_from_rdev(Button::Middle), Some(MouseButton::Middle));
    assert_eq!(button_from_rdev(Button::Unknown(9)), None);
}
