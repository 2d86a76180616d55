use crate::{Event, EventKind, EventLog, KeySymbol, MouseButton, NamedKey};

/// WHAT: Single characters parse as literal keys, longer strings as names
/// WHY: The string form must never confuse a character with a named key
#[test]
fn given_key_strings_when_parsing_then_chars_and_names_are_distinguished() {
    // Given/When: Parsing one-character and named key strings
    let char_key = KeySymbol::parse("a");
    let named_key = KeySymbol::parse("shift");
    let function_key = KeySymbol::parse("F5");
    let raw_key = KeySymbol::parse("<65>");

    // Then: Each lands in the right variant
    assert_eq!(char_key, KeySymbol::Char('a'));
    assert_eq!(named_key, KeySymbol::Named(NamedKey::Shift));
    assert_eq!(function_key, KeySymbol::Named(NamedKey::Function(5)));
    assert_eq!(raw_key, KeySymbol::Unknown("<65>".to_string()));
}

/// WHAT: Every key form survives a trip through its string form
/// WHY: Recordings store keys as plain strings
#[test]
fn given_key_symbols_when_formatting_and_parsing_then_identical() {
    // Given: One key of each form
    let keys = [
        KeySymbol::Char('/'),
        KeySymbol::Char('S'),
        KeySymbol::Named(NamedKey::PageDown),
        KeySymbol::Named(NamedKey::Function(12)),
        KeySymbol::Unknown("<179>".to_string()),
    ];

    for key in keys {
        // When: Formatting and parsing back
        let parsed = KeySymbol::parse(&key.to_string());

        // Then: Nothing changed
        assert_eq!(parsed, key);
    }
}

/// WHAT: Function keys outside F1..F24 are not treated as named keys
/// WHY: Injection only knows real function keys
#[test]
fn given_out_of_range_function_key_when_parsing_then_unknown() {
    assert_eq!(
        KeySymbol::parse("f0"),
        KeySymbol::Unknown("f0".to_string())
    );
    assert_eq!(
        KeySymbol::parse("f25"),
        KeySymbol::Unknown("f25".to_string())
    );
}

/// WHAT: Hotkey matching ignores case
/// WHY: Pressing 'A' with shift held must still hit an 'a' hotkey
#[test]
fn given_keys_differing_in_case_when_matching_then_equal() {
    assert!(KeySymbol::Char('A').matches(&KeySymbol::Char('a')));
    assert!(KeySymbol::parse("ESC").matches(&KeySymbol::Named(NamedKey::Esc)));
    assert!(!KeySymbol::Char('a').matches(&KeySymbol::Char('b')));
}

/// WHAT: Events serialize to the flat tagged shape
/// WHY: Field names and discriminators are the file compatibility contract
#[test]
#[allow(clippy::unwrap_used)]
fn given_each_event_kind_when_serializing_then_flat_tagged_object() {
    // Given: One event of each kind
    let events = vec![
        Event::new(EventKind::Move { x: 1, y: 2 }, 0.0),
        Event::new(
            EventKind::Click {
                x: 1,
                y: 2,
                button: MouseButton::Left,
                pressed: true,
            },
            0.5,
        ),
        Event::new(
            EventKind::Scroll {
                x: 1,
                y: 2,
                dx: 0,
                dy: -1,
            },
            0.75,
        ),
        Event::new(
            EventKind::KeyPress {
                key: KeySymbol::Named(NamedKey::Shift),
            },
            1.0,
        ),
        Event::new(
            EventKind::KeyRelease {
                key: KeySymbol::Char('a'),
            },
            1.25,
        ),
    ];

    // When: Serializing to JSON values
    let value = serde_json::to_value(&events).unwrap();

    // Then: Each object has the expected discriminator and fields
    assert_eq!(
        value,
        serde_json::json!([
            {"type": "move", "x": 1, "y": 2, "t": 0.0},
            {"type": "click", "x": 1, "y": 2, "button": "left", "pressed": true, "t": 0.5},
            {"type": "scroll", "x": 1, "y": 2, "dx": 0, "dy": -1, "t": 0.75},
            {"type": "key_press", "key": "shift", "t": 1.0},
            {"type": "key_release", "key": "a", "t": 1.25}
        ])
    );
}

/// WHAT: Event log handles share one sequence
/// WHY: The capture engine and the live counter read the same log
#[test]
fn given_cloned_log_when_replacing_then_all_handles_see_change() {
    // Given: Two handles to one log
    let log = EventLog::new();
    let other = log.clone();

    // When: Replacing through one handle
    log.replace(vec![Event::new(EventKind::Move { x: 0, y: 0 }, 0.0)]);

    // Then: The other handle sees the new sequence
    assert_eq!(other.len(), 1);
    other.clear();
    assert!(log.is_empty());
}
