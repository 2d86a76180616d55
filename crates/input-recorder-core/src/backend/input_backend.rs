use crate::{KeySymbol, MouseButton};

use std::sync::Arc;

/// Receiver of raw global input notifications.
///
/// Callbacks run on the platform hook thread and must return quickly.
pub trait InputListener: Send + Sync {
    /// Pointer moved to an absolute position.
    fn on_pointer_move(&self, _x: i32, _y: i32) {}

    /// Mouse button changed state at the given position.
    fn on_button(&self, _x: i32, _y: i32, _button: MouseButton, _pressed: bool) {}

    /// Wheel scrolled at the given position.
    fn on_scroll(&self, _x: i32, _y: i32, _dx: i32, _dy: i32) {}

    /// Key changed state.
    fn on_key(&self, _key: &KeySymbol, _pressed: bool) {}
}

/// Handle returned by [`InputBackend::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Source of global input notifications.
///
/// A backend observes input without consuming it and fans each notification
/// out to every current subscriber.
pub trait InputBackend: Send + Sync {
    /// Start delivering notifications to `listener`.
    fn subscribe(&self, listener: Arc<dyn InputListener>) -> ListenerId;

    /// Stop delivering notifications to the listener. Unknown ids are ignored.
    fn unsubscribe(&self, id: ListenerId);
}
