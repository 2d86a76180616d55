use crate::{ControlState, KeybindStatus, Outcome};

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::watch;

/// Observable view of the session, published to UI subscribers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    /// Current control state.
    pub state: ControlState,
    /// Events in the log (live while recording).
    pub event_count: usize,
    /// Whether keybind settings are open.
    pub configuring: bool,
    /// Current hotkey bindings.
    pub keybinds: KeybindStatus,
    /// Most recent save/load/keybind result.
    pub last_outcome: Option<Outcome>,
}

/// State shared by capture, replay and the hotkey listener.
///
/// Replaces free-floating process flags: every component gets a clone and
/// reads or publishes through it. Changes are pushed to a `watch` channel,
/// so the UI observes instead of polling widgets from the core.
#[derive(Debug, Clone)]
pub struct SessionContext {
    inner: Arc<ContextInner>,
}

#[derive(Debug)]
struct ContextInner {
    configuring: AtomicBool,
    snapshot: watch::Sender<SessionSnapshot>,
}

impl SessionContext {
    /// Create a context in the Idle state with empty bindings.
    pub fn new() -> Self {
        let (snapshot, _) = watch::channel(SessionSnapshot::default());
        Self {
            inner: Arc::new(ContextInner {
                configuring: AtomicBool::new(false),
                snapshot,
            }),
        }
    }

    /// Subscribe to snapshot changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.inner.snapshot.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        self.inner.snapshot.borrow().clone()
    }

    /// Current control state.
    pub fn state(&self) -> ControlState {
        self.inner.snapshot.borrow().state
    }

    /// Whether keybind settings are open and hotkeys must be ignored.
    pub fn is_configuring(&self) -> bool {
        self.inner.configuring.load(Ordering::Acquire)
    }

    pub(crate) fn set_state(&self, state: ControlState) {
        self.inner.snapshot.send_if_modified(|s| {
            let changed = s.state != state;
            s.state = state;
            changed
        });
    }

    pub(crate) fn set_configuring(&self, configuring: bool) {
        self.inner.configuring.store(configuring, Ordering::Release);
        self.inner.snapshot.send_if_modified(|s| {
            let changed = s.configuring != configuring;
            s.configuring = configuring;
            changed
        });
    }

    pub(crate) fn set_event_count(&self, event_count: usize) {
        self.inner.snapshot.send_if_modified(|s| {
            let changed = s.event_count != event_count;
            s.event_count = event_count;
            changed
        });
    }

    pub(crate) fn set_keybinds(&self, keybinds: KeybindStatus) {
        self.inner.snapshot.send_modify(|s| s.keybinds = keybinds);
    }

    pub(crate) fn report(&self, outcome: Outcome) {
        self.inner
            .snapshot
            .send_modify(|s| s.last_outcome = Some(outcome));
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}
