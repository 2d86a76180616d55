//! Test doubles for the platform seams.

use crate::{
    ControlState, Controller, CoreError, CoreResult, EventKind, Injector, InjectorFactory,
    InputBackend, InputListener, KeySymbol, ListenerId, MouseButton,
};

use std::{
    panic::Location,
    path::PathBuf,
    sync::{
        Arc, Mutex,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

use error_location::ErrorLocation;
use uuid::Uuid;

/// Backend whose "hardware" events are emitted by the test.
#[derive(Default)]
pub(crate) struct FakeBackend {
    listeners: Mutex<Vec<(ListenerId, Arc<dyn InputListener>)>>,
    next_id: AtomicU64,
}

#[allow(clippy::unwrap_used)]
impl FakeBackend {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    pub(crate) fn move_to(&self, x: i32, y: i32) {
        for listener in self.snapshot() {
            listener.on_pointer_move(x, y);
        }
    }

    pub(crate) fn button(&self, x: i32, y: i32, button: MouseButton, pressed: bool) {
        for listener in self.snapshot() {
            listener.on_button(x, y, button.clone(), pressed);
        }
    }

    pub(crate) fn scroll(&self, x: i32, y: i32, dx: i32, dy: i32) {
        for listener in self.snapshot() {
            listener.on_scroll(x, y, dx, dy);
        }
    }

    pub(crate) fn key(&self, key: &str, pressed: bool) {
        let key = KeySymbol::parse(key);
        for listener in self.snapshot() {
            listener.on_key(&key, pressed);
        }
    }

    fn snapshot(&self) -> Vec<Arc<dyn InputListener>> {
        self.listeners
            .lock()
            .unwrap()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect()
    }
}

#[allow(clippy::unwrap_used)]
impl InputBackend for FakeBackend {
    fn subscribe(&self, listener: Arc<dyn InputListener>) -> ListenerId {
        let id = ListenerId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.listeners.lock().unwrap().push((id, listener));
        id
    }

    fn unsubscribe(&self, id: ListenerId) {
        self.listeners.lock().unwrap().retain(|(i, _)| *i != id);
    }
}

/// Injector that records what it was asked to inject and when.
#[derive(Clone, Default)]
pub(crate) struct RecordingInjector {
    injected: Arc<Mutex<Vec<(Instant, EventKind)>>>,
    unmappable: Arc<Vec<KeySymbol>>,
}

#[allow(clippy::unwrap_used)]
impl RecordingInjector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Injector that fails on any of `keys`.
    pub(crate) fn failing_on(keys: &[&str]) -> Self {
        Self {
            injected: Arc::default(),
            unmappable: Arc::new(keys.iter().map(|k| KeySymbol::parse(k)).collect()),
        }
    }

    pub(crate) fn kinds(&self) -> Vec<EventKind> {
        self.injected
            .lock()
            .unwrap()
            .iter()
            .map(|(_, kind)| kind.clone())
            .collect()
    }

    pub(crate) fn timestamps(&self) -> Vec<Instant> {
        self.injected
            .lock()
            .unwrap()
            .iter()
            .map(|(at, _)| *at)
            .collect()
    }

    pub(crate) fn factory(&self) -> Arc<dyn InjectorFactory> {
        let injector = self.clone();
        Arc::new(move || -> CoreResult<Box<dyn Injector>> { Ok(Box::new(injector.clone())) })
    }
}

#[allow(clippy::unwrap_used)]
impl Injector for RecordingInjector {
    fn inject(&mut self, kind: &EventKind) -> CoreResult<()> {
        let key = match kind {
            EventKind::KeyPress { key } | EventKind::KeyRelease { key } => Some(key),
            _ => None,
        };

        if key.is_some_and(|k| self.unmappable.contains(k)) {
            return Err(CoreError::InjectionFailed {
                reason: format!("Unmappable key: {:?}", key),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if let EventKind::Click {
            button: MouseButton::Other(name),
            ..
        } = kind
        {
            return Err(CoreError::InjectionFailed {
                reason: format!("Unmappable button: {}", name),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.injected
            .lock()
            .unwrap()
            .push((Instant::now(), kind.clone()));
        Ok(())
    }
}

pub(crate) fn temp_recording_path() -> PathBuf {
    std::env::temp_dir().join(format!("input-recorder-test-{}.json", Uuid::new_v4()))
}

/// Poll until the controller reaches `state` or the timeout expires.
pub(crate) fn wait_for_state(controller: &Controller, state: ControlState, timeout: Duration) -> bool {
    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if controller.state() == state {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    controller.state() == state
}
