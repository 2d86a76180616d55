use crate::{
    AppError, AppResult,
    platform::{button_from_rdev, key_from_rdev},
};

use input_recorder_core::{InputBackend, InputListener, ListenerId};

use std::{
    panic::Location,
    sync::{
        Arc, Mutex, MutexGuard,
        atomic::{AtomicU64, Ordering},
    },
    thread,
};

use error_location::ErrorLocation;
use rdev::EventType;
use tracing::{debug, error, info, instrument};

type Listeners = Vec<(ListenerId, Arc<dyn InputListener>)>;

/// Global input hook shared by capture, keybind capture and the hotkey
/// listener.
///
/// `rdev::listen` can only be installed once per process, so a single hook
/// thread fans every event out to the current subscribers.
pub(crate) struct RdevBackend {
    listeners: Mutex<Listeners>,
    next_id: AtomicU64,
    // rdev reports button and wheel events without a position.
    pointer: Mutex<(i32, i32)>,
}

impl RdevBackend {
    /// Install the hook on a dedicated thread.
    #[track_caller]
    #[instrument]
    pub(crate) fn start() -> AppResult<Arc<Self>> {
        let backend = Arc::new(Self {
            listeners: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
            pointer: Mutex::new((0, 0)),
        });

        let hook = Arc::clone(&backend);
        thread::Builder::new()
            .name("input-hook".to_string())
            .spawn(move || {
                info!("Global input hook installed");
                if let Err(e) = rdev::listen(move |event| hook.dispatch(event.event_type)) {
                    error!(error = ?e, "Global input hook stopped");
                }
            })
            .map_err(|e| AppError::HookFailed {
                reason: format!("Failed to spawn input hook thread: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(backend)
    }

    fn dispatch(&self, event_type: EventType) {
        // Track the pointer even with no subscribers so the first click of a
        // capture has a real position.
        if let EventType::MouseMove { x, y } = event_type {
            *self.lock_pointer() = (x.round() as i32, y.round() as i32);
        }

        // Listeners run outside the lock so they may unsubscribe themselves.
        let listeners: Vec<_> = self
            .lock_listeners()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        if listeners.is_empty() {
            return;
        }

        match event_type {
            EventType::MouseMove { .. } => {
                let (x, y) = *self.lock_pointer();
                for listener in &listeners {
                    listener.on_pointer_move(x, y);
                }
            }
            EventType::ButtonPress(button) => self.button(&listeners, button, true),
            EventType::ButtonRelease(button) => self.button(&listeners, button, false),
            EventType::Wheel { delta_x, delta_y } => {
                let (x, y) = *self.lock_pointer();
                let (dx, dy) = (clamp_delta(delta_x), clamp_delta(delta_y));
                for listener in &listeners {
                    listener.on_scroll(x, y, dx, dy);
                }
            }
            EventType::KeyPress(key) => notify_key(&listeners, key, true),
            EventType::KeyRelease(key) => notify_key(&listeners, key, false),
        }
    }

    fn button(&self, listeners: &[Arc<dyn InputListener>], button: rdev::Button, pressed: bool) {
        let Some(button) = button_from_rdev(button) else {
            debug!(?button, "Ignoring unmapped mouse button");
            return;
        };
        let (x, y) = *self.lock_pointer();
        for listener in listeners {
            listener.on_button(x, y, button.clone(), pressed);
        }
    }

    fn lock_listeners(&self) -> MutexGuard<'_, Listeners> {
        self.listeners.lock().unwrap_or_else(|e| {
            error!("Listener lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }

    fn lock_pointer(&self) -> MutexGuard<'_, (i32, i32)> {
        self.pointer.lock().unwrap_or_else(|e| {
            error!("Pointer lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }
}

impl InputBackend for RdevBackend {
    fn subscribe(&self, listener: Arc<dyn InputListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock_listeners().push((id, listener));
        debug!(listener_id = id.0, "Input listener subscribed");
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.lock_listeners().retain(|(i, _)| *i != id);
        debug!(listener_id = id.0, "Input listener unsubscribed");
    }
}

fn notify_key(listeners: &[Arc<dyn InputListener>], key: rdev::Key, pressed: bool) {
    let key = key_from_rdev(key);
    for listener in listeners {
        listener.on_key(&key, pressed);
    }
}

fn clamp_delta(delta: i64) -> i32 {
    delta.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}
