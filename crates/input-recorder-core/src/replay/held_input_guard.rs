use crate::{CoreResult, EventKind, Injector, KeySymbol, MouseButton};

use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
enum HeldInput {
    Key(KeySymbol),
    Button { button: MouseButton, x: i32, y: i32 },
}

impl HeldInput {
    fn release(&self) -> EventKind {
        match self {
            HeldInput::Key(key) => EventKind::KeyRelease { key: key.clone() },
            HeldInput::Button { button, x, y } => EventKind::Click {
                x: *x,
                y: *y,
                button: button.clone(),
                pressed: false,
            },
        }
    }
}

/// RAII guard that releases every key and button a replay left pressed.
///
/// A replay cancelled between a press and its release would otherwise leave
/// the input stuck down. Release on drop is best-effort: a failed release is
/// logged and the OS resets state on the next physical press.
pub(crate) struct HeldInputGuard<'a, I: Injector + ?Sized> {
    injector: &'a mut I,
    held: Vec<HeldInput>,
}

impl<'a, I: Injector + ?Sized> HeldInputGuard<'a, I> {
    pub(crate) fn new(injector: &'a mut I) -> Self {
        Self {
            injector,
            held: Vec::new(),
        }
    }

    /// Inject through the wrapped injector and remember what is now held.
    pub(crate) fn inject(&mut self, kind: &EventKind) -> CoreResult<()> {
        self.injector.inject(kind)?;

        match kind {
            EventKind::KeyPress { key } => self.hold(HeldInput::Key(key.clone())),
            EventKind::KeyRelease { key } => {
                self.held
                    .retain(|held| !matches!(held, HeldInput::Key(k) if k == key));
            }
            EventKind::Click {
                x,
                y,
                button,
                pressed: true,
            } => self.hold(HeldInput::Button {
                button: button.clone(),
                x: *x,
                y: *y,
            }),
            EventKind::Click {
                button,
                pressed: false,
                ..
            } => {
                self.held.retain(
                    |held| !matches!(held, HeldInput::Button { button: b, .. } if b == button),
                );
            }
            EventKind::Move { .. } | EventKind::Scroll { .. } => {}
        }

        Ok(())
    }

    fn hold(&mut self, input: HeldInput) {
        if !self.held.contains(&input) {
            self.held.push(input);
        }
    }
}

impl<I: Injector + ?Sized> Drop for HeldInputGuard<'_, I> {
    fn drop(&mut self) {
        // Release in reverse press order, like unwinding modifiers.
        while let Some(input) = self.held.pop() {
            let release = input.release();
            match self.injector.inject(&release) {
                Ok(()) => debug!(event = release.tag(), "Released held input"),
                Err(e) => warn!(error = ?e, "Failed to release held input"),
            }
        }
    }
}
