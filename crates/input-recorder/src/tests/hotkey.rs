use crate::{
    AppCommand, AppError, HotkeyHandler,
    hotkey_handler::HotkeyListener,
    tests::support::bound_controller,
};

use input_recorder_core::{InputListener, KeySymbol};

use tokio::sync::mpsc;

/// WHAT: The toggle and kill keys become their commands
/// WHY: Hotkeys drive playback without the tray
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_bound_keys_when_pressed_then_commands_sent() {
    // Given: A handler over a controller with f8/f9 bound
    let (command_tx, mut command_rx) = mpsc::channel(8);
    let handler = HotkeyHandler::new(bound_controller(), command_tx);

    // When: f8, an unbound key, then F9 are pressed
    handler.handle_key(&KeySymbol::parse("f8")).await.unwrap();
    handler.handle_key(&KeySymbol::parse("a")).await.unwrap();
    handler.handle_key(&KeySymbol::parse("F9")).await.unwrap();

    // Then: Toggle then Kill, nothing for the unbound key
    assert_eq!(command_rx.recv().await, Some(AppCommand::TogglePlayback));
    assert_eq!(command_rx.recv().await, Some(AppCommand::Kill));
    assert!(command_rx.try_recv().is_err());
}

/// WHAT: Hotkeys are ignored while keybind settings are open
/// WHY: The next press belongs to keybind capture
#[tokio::test]
#[allow(clippy::unwrap_used)]
async fn given_configuring_when_hotkey_pressed_then_nothing_sent() {
    let (command_tx, mut command_rx) = mpsc::channel(8);
    let controller = bound_controller();
    controller.open_keybind_settings();
    let handler = HotkeyHandler::new(controller, command_tx);

    handler.handle_key(&KeySymbol::parse("f8")).await.unwrap();

    assert!(command_rx.try_recv().is_err());
}

/// WHAT: A closed command channel surfaces as ChannelSendFailed
/// WHY: The handler must stop when the app is gone
#[tokio::test]
async fn given_closed_channel_when_hotkey_pressed_then_send_fails() {
    // Given: A closed command channel
    let (command_tx, command_rx) = mpsc::channel(1);
    drop(command_rx);
    let handler = HotkeyHandler::new(bound_controller(), command_tx);

    // When: The toggle key is pressed
    let result = handler.handle_key(&KeySymbol::parse("f8")).await;

    // Then: Send fails
    assert!(matches!(result, Err(AppError::ChannelSendFailed { .. })));
}

/// WHAT: The hook listener forwards presses and drops releases
/// WHY: A hotkey fires once per press
#[tokio::test]
async fn given_hook_listener_when_key_pressed_and_released_then_only_press_queued() {
    let (key_tx, mut key_rx) = mpsc::channel(4);
    let listener = HotkeyListener::new(key_tx);

    listener.on_key(&KeySymbol::parse("f8"), true);
    listener.on_key(&KeySymbol::parse("f8"), false);

    assert_eq!(key_rx.recv().await, Some(KeySymbol::parse("f8")));
    assert!(key_rx.try_recv().is_err());
}

/// WHAT: A full queue drops presses instead of blocking the hook thread
/// WHY: Blocking the OS hook would freeze global input
#[test]
fn given_full_queue_when_key_pressed_then_press_dropped() {
    let (key_tx, mut key_rx) = mpsc::channel(1);
    let listener = HotkeyListener::new(key_tx);

    listener.on_key(&KeySymbol::parse("a"), true);
    listener.on_key(&KeySymbol::parse("b"), true);

    assert_eq!(key_rx.try_recv().ok(), Some(KeySymbol::parse("a")));
    assert!(key_rx.try_recv().is_err());
}
