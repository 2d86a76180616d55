use input_recorder_core::{
    CoreError, CoreResult, EventKind, Injector, InjectorFactory, KeySymbol, MouseButton, NamedKey,
};

use std::panic::Location;

use enigo::{Axis, Button, Coordinate, Direction, Enigo, Key, Keyboard, Mouse, Settings};
use error_location::ErrorLocation;
use tracing::{debug, instrument};

/// Synthesizes recorded input through `enigo`.
///
/// `Enigo` is not `Send`, so each replay thread builds its own through
/// [`EnigoInjectorFactory`].
pub(crate) struct EnigoInjector {
    enigo: Enigo,
}

impl EnigoInjector {
    #[track_caller]
    pub(crate) fn new() -> CoreResult<Self> {
        let enigo = Enigo::new(&Settings::default()).map_err(|e| CoreError::InjectionFailed {
            reason: format!("Failed to create Enigo: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self { enigo })
    }
}

impl Injector for EnigoInjector {
    fn inject(&mut self, kind: &EventKind) -> CoreResult<()> {
        let location = Location::caller();
        let failed = |action: &str, e: enigo::InputError| CoreError::InjectionFailed {
            reason: format!("Failed to {}: {}", action, e),
            location: ErrorLocation::from(location),
        };

        match kind {
            EventKind::Move { x, y } => self
                .enigo
                .move_mouse(*x, *y, Coordinate::Abs)
                .map_err(|e| failed("move pointer", e)),
            EventKind::Click {
                x,
                y,
                button,
                pressed,
            } => {
                let Some(mapped) = enigo_button(button) else {
                    return Err(CoreError::InjectionFailed {
                        reason: format!("No injectable button for '{}'", button),
                        location: ErrorLocation::from(location),
                    });
                };
                self.enigo
                    .move_mouse(*x, *y, Coordinate::Abs)
                    .map_err(|e| failed("move pointer", e))?;
                self.enigo
                    .button(mapped, direction(*pressed))
                    .map_err(|e| failed("press button", e))
            }
            EventKind::Scroll { x, y, dx, dy } => {
                self.enigo
                    .move_mouse(*x, *y, Coordinate::Abs)
                    .map_err(|e| failed("move pointer", e))?;
                // Recorded dy is positive for wheel-up; enigo scrolls down on positive.
                if *dy != 0 {
                    self.enigo
                        .scroll(-*dy, Axis::Vertical)
                        .map_err(|e| failed("scroll", e))?;
                }
                if *dx != 0 {
                    self.enigo
                        .scroll(*dx, Axis::Horizontal)
                        .map_err(|e| failed("scroll", e))?;
                }
                Ok(())
            }
            EventKind::KeyPress { key } => self.key(key, Direction::Press, location),
            EventKind::KeyRelease { key } => self.key(key, Direction::Release, location),
        }
    }
}

impl EnigoInjector {
    fn key(
        &mut self,
        key: &KeySymbol,
        direction: Direction,
        location: &'static Location<'static>,
    ) -> CoreResult<()> {
        let Some(mapped) = enigo_key(key) else {
            return Err(CoreError::InjectionFailed {
                reason: format!("No injectable key for '{}'", key),
                location: ErrorLocation::from(location),
            });
        };

        self.enigo
            .key(mapped, direction)
            .map_err(|e| CoreError::InjectionFailed {
                reason: format!("Failed to send key '{}': {}", key, e),
                location: ErrorLocation::from(location),
            })
    }
}

/// Builds one [`EnigoInjector`] per replay.
#[derive(Debug, Default)]
pub(crate) struct EnigoInjectorFactory;

impl InjectorFactory for EnigoInjectorFactory {
    #[instrument(skip(self))]
    fn create(&self) -> CoreResult<Box<dyn Injector>> {
        let injector = EnigoInjector::new()?;
        debug!("Enigo injector created");
        Ok(Box::new(injector))
    }
}

fn direction(pressed: bool) -> Direction {
    if pressed {
        Direction::Press
    } else {
        Direction::Release
    }
}

fn enigo_button(button: &MouseButton) -> Option<Button> {
    let mapped = match button {
        MouseButton::Left => Button::Left,
        MouseButton::Right => Button::Right,
        MouseButton::Middle => Button::Middle,
        MouseButton::X1 => Button::Back,
        MouseButton::X2 => Button::Forward,
        MouseButton::Other(_) => return None,
    };
    Some(mapped)
}

fn enigo_key(key: &KeySymbol) -> Option<Key> {
    let named = match key {
        KeySymbol::Char(c) => return Some(Key::Unicode(*c)),
        KeySymbol::Named(named) => *named,
        KeySymbol::Unknown(_) => return None,
    };

    let mapped = match named {
        NamedKey::Alt | NamedKey::AltLeft | NamedKey::AltRight | NamedKey::AltGr => Key::Alt,
        NamedKey::Backspace => Key::Backspace,
        NamedKey::CapsLock => Key::CapsLock,
        NamedKey::Cmd | NamedKey::CmdLeft | NamedKey::CmdRight => Key::Meta,
        NamedKey::Ctrl | NamedKey::CtrlLeft | NamedKey::CtrlRight => Key::Control,
        NamedKey::Delete => Key::Delete,
        NamedKey::Down => Key::DownArrow,
        NamedKey::End => Key::End,
        NamedKey::Enter => Key::Return,
        NamedKey::Esc => Key::Escape,
        NamedKey::Function(n) => function_key(n)?,
        NamedKey::Home => Key::Home,
        #[cfg(not(target_os = "macos"))]
        NamedKey::Insert => Key::Insert,
        NamedKey::Left => Key::LeftArrow,
        NamedKey::PageDown => Key::PageDown,
        NamedKey::PageUp => Key::PageUp,
        NamedKey::Right => Key::RightArrow,
        NamedKey::Shift | NamedKey::ShiftRight => Key::Shift,
        NamedKey::Space => Key::Space,
        NamedKey::Tab => Key::Tab,
        NamedKey::Up => Key::UpArrow,
        _ => return None,
    };

    Some(mapped)
}

fn function_key(n: u8) -> Option<Key> {
    let key = match n {
        1 => Key::F1,
        2 => Key::F2,
        3 => Key::F3,
        4 => Key::F4,
        5 => Key::F5,
        6 => Key::F6,
        7 => Key::F7,
        8 => Key::F8,
        9 => Key::F9,
        10 => Key::F10,
        11 => Key::F11,
        12 => Key::F12,
        13 => Key::F13,
        14 => Key::F14,
        15 => Key::F15,
        16 => Key::F16,
        17 => Key::F17,
        18 => Key::F18,
        19 => Key::F19,
        20 => Key::F20,
        _ => return None,
    };
    Some(key)
}
