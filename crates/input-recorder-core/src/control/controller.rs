//! Control state machine driving capture and replay.
//!
//! ```text
//! Idle ──start_recording──▶ Recording ──stop_recording──▶ Idle
//! Idle ──start_playback───▶ Playing ──stop / finished───▶ Idle
//! any  ──kill─────────────▶ Idle (caller exits the process)
//! ```
//!
//! Recording and Playing never overlap: starting one stops the other first,
//! and starting the one already running is ignored.

use crate::{
    BindRole, CancelToken, CaptureEngine, ControlState, CoreError, CoreResult, Event, EventLog,
    HotkeyAction, InjectorFactory, InputBackend, KeySymbol, KeybindRegistry, KeybindStatus,
    ListenerId, Outcome, ReplayEngine, SessionContext, SessionSnapshot, codec,
    control::active_session::ActiveSession, keybind::KeyCapture,
};

use std::{
    mem,
    panic::Location,
    path::Path,
    sync::{Arc, Mutex, MutexGuard},
    thread,
    time::Instant,
};

use error_location::ErrorLocation;
use tokio::sync::watch;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Owns the session lifecycle and the operations exposed to the UI layer.
///
/// Cheap to clone; all clones drive the same session.
#[derive(Clone)]
pub struct Controller {
    shared: Arc<Shared>,
}

struct Shared {
    context: SessionContext,
    log: EventLog,
    keybinds: KeybindRegistry,
    backend: Arc<dyn InputBackend>,
    injectors: Arc<dyn InjectorFactory>,
    session: Mutex<ActiveSession>,
    key_capture: Mutex<Option<ListenerId>>,
}

impl Controller {
    /// Create an idle controller with an empty log and no keybinds.
    pub fn new(backend: Arc<dyn InputBackend>, injectors: Arc<dyn InjectorFactory>) -> Self {
        Self {
            shared: Arc::new(Shared {
                context: SessionContext::new(),
                log: EventLog::new(),
                keybinds: KeybindRegistry::new(),
                backend,
                injectors,
                session: Mutex::new(ActiveSession::Idle),
                key_capture: Mutex::new(None),
            }),
        }
    }

    /// Shared session context.
    pub fn context(&self) -> &SessionContext {
        &self.shared.context
    }

    /// Subscribe to state, live count and outcome changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.shared.context.subscribe()
    }

    /// Current control state.
    pub fn state(&self) -> ControlState {
        self.shared.context.state()
    }

    /// Handle to the event log.
    pub fn log(&self) -> EventLog {
        self.shared.log.clone()
    }

    /// Handle to the keybind registry.
    pub fn keybinds(&self) -> KeybindRegistry {
        self.shared.keybinds.clone()
    }

    /// Start capturing into a fresh log, stopping any replay first.
    ///
    /// Ignored when already recording.
    #[instrument(skip(self))]
    pub fn start_recording(&self) {
        let previous = {
            let mut session = self.shared.lock_session();
            if matches!(*session, ActiveSession::Recording { .. }) {
                debug!("Already recording, ignoring start");
                return;
            }
            let previous = mem::replace(&mut *session, ActiveSession::Idle);
            self.shared.context.set_state(ControlState::Idle);
            previous
        };

        // Replay must be fully gone before capture subscribes, or its last
        // injections would be recorded.
        previous.shutdown();

        let mut session = self.shared.lock_session();
        if !matches!(*session, ActiveSession::Idle) {
            debug!(state = %session.state(), "Session changed while stopping replay, ignoring start");
            return;
        }

        let capture = CaptureEngine::start(
            Arc::clone(&self.shared.backend),
            self.shared.log.clone(),
            self.shared.keybinds.clone(),
            self.shared.context.clone(),
        );

        let session_id = Uuid::new_v4();
        *session = ActiveSession::Recording {
            session_id,
            started_at: Instant::now(),
            capture,
        };
        self.shared.context.set_state(ControlState::Recording);

        info!(session_id = %session_id, "Recording started");
    }

    /// Stop capturing and return the number of recorded events.
    ///
    /// Returns `None` when not recording.
    #[instrument(skip(self))]
    pub fn stop_recording(&self) -> Option<usize> {
        let mut session = self.shared.lock_session();
        if !matches!(*session, ActiveSession::Recording { .. }) {
            debug!("Not recording, ignoring stop");
            return None;
        }

        let previous = mem::replace(&mut *session, ActiveSession::Idle);
        self.shared.context.set_state(ControlState::Idle);
        previous.shutdown();

        let event_count = self.shared.log.len();
        self.shared.context.set_event_count(event_count);
        info!(event_count, "Recording stopped");

        Some(event_count)
    }

    /// Replay the current log on a background thread, stopping any capture
    /// first.
    ///
    /// Ignored when already playing.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyLog`] when there is nothing to play; no
    /// event is injected and the state stays Idle.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn start_playback(&self, looped: bool) -> CoreResult<()> {
        let location = Location::caller();
        let mut session = self.shared.lock_session();

        match *session {
            ActiveSession::Playing { .. } => {
                debug!("Already playing, ignoring start");
                return Ok(());
            }
            ActiveSession::Recording { .. } => {
                mem::replace(&mut *session, ActiveSession::Idle).shutdown();
                self.shared.context.set_state(ControlState::Idle);
                self.shared.context.set_event_count(self.shared.log.len());
            }
            ActiveSession::Idle => {}
        }

        let events = self.shared.log.snapshot();
        if events.is_empty() {
            warn!("Nothing to play");
            self.shared.context.report(Outcome::NothingToPlay);
            return Err(CoreError::EmptyLog {
                location: ErrorLocation::from(location),
            });
        }

        let session_id = Uuid::new_v4();
        let cancel = CancelToken::new();
        let event_count = events.len();

        let shared = Arc::clone(&self.shared);
        let token = cancel.clone();
        let handle = thread::Builder::new()
            .name("replay".to_string())
            .spawn(move || shared.run_replay(session_id, &events, looped, token))
            .map_err(|e| CoreError::Backend {
                reason: format!("Failed to spawn replay thread: {}", e),
                location: ErrorLocation::from(location),
            })?;

        *session = ActiveSession::Playing {
            session_id,
            cancel,
            handle,
        };
        self.shared.context.set_state(ControlState::Playing);

        info!(session_id = %session_id, event_count, looped, "Playback started");

        Ok(())
    }

    /// Cancel the running replay and wait for it to finish.
    ///
    /// Ignored when not playing.
    #[instrument(skip(self))]
    pub fn stop_playback(&self) {
        let previous = {
            let mut session = self.shared.lock_session();
            if !matches!(*session, ActiveSession::Playing { .. }) {
                debug!("Not playing, ignoring stop");
                return;
            }
            let previous = mem::replace(&mut *session, ActiveSession::Idle);
            self.shared.context.set_state(ControlState::Idle);
            previous
        };

        previous.shutdown();
        info!("Playback stopped");
    }

    /// Toggle-key behaviour: stop when playing, otherwise start playback.
    #[track_caller]
    pub fn toggle_playback(&self, looped: bool) -> CoreResult<()> {
        if self.state() == ControlState::Playing {
            self.stop_playback();
            Ok(())
        } else {
            self.start_playback(looped)
        }
    }

    /// Kill-key behaviour: stop capture and replay and return to Idle.
    ///
    /// The caller is expected to terminate the process afterwards.
    #[instrument(skip(self))]
    pub fn kill(&self) {
        let previous = {
            let mut session = self.shared.lock_session();
            let previous = mem::replace(&mut *session, ActiveSession::Idle);
            self.shared.context.set_state(ControlState::Idle);
            previous
        };

        previous.shutdown();
        self.shared.end_key_capture();

        info!("Kill requested, all sessions stopped");
    }

    /// Map a global key press to an action.
    ///
    /// Every press is ignored while keybind settings are open, so the
    /// one-shot capture owns the next key.
    pub fn resolve_hotkey(&self, key: &KeySymbol) -> HotkeyAction {
        if self.shared.context.is_configuring() {
            return HotkeyAction::Ignored;
        }

        match self.shared.keybinds.role_for(key) {
            Some(BindRole::Toggle) => HotkeyAction::TogglePlayback,
            Some(BindRole::Kill) => HotkeyAction::Kill,
            None => HotkeyAction::Ignored,
        }
    }

    /// Write the log to `path` and return the number of events written.
    ///
    /// # Errors
    ///
    /// [`CoreError::SessionBusy`] while recording, [`CoreError::EmptyLog`]
    /// when there is nothing to save, [`CoreError::SaveFailed`] on I/O errors.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn save_log(&self, path: &Path) -> CoreResult<usize> {
        let location = Location::caller();

        let events = {
            let session = self.shared.lock_session();
            if let ActiveSession::Recording { .. } = *session {
                return Err(self.shared.busy("save", session.state(), location));
            }
            self.shared.log.snapshot()
        };

        match codec::save(&events, path) {
            Ok(()) => {
                self.shared.context.report(Outcome::Saved {
                    path: path.to_path_buf(),
                    event_count: events.len(),
                });
                Ok(events.len())
            }
            Err(e) => {
                let outcome = match &e {
                    CoreError::EmptyLog { .. } => Outcome::NothingToSave,
                    other => Outcome::SaveFailed {
                        reason: other.to_string(),
                    },
                };
                self.shared.context.report(outcome);
                Err(e)
            }
        }
    }

    /// Replace the log with the recording at `path`.
    ///
    /// # Errors
    ///
    /// [`CoreError::SessionBusy`] unless idle, [`CoreError::LoadFailed`] if
    /// the file is missing or malformed. On error the log is untouched.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn load_log(&self, path: &Path) -> CoreResult<EventLog> {
        let location = Location::caller();

        // Hold the session lock so nothing starts while the log is swapped.
        let session = self.shared.lock_session();
        if !matches!(*session, ActiveSession::Idle) {
            return Err(self.shared.busy("load", session.state(), location));
        }

        match codec::load(path) {
            Ok(events) => {
                let event_count = events.len();
                self.shared.log.replace(events);
                self.shared.context.set_event_count(event_count);
                self.shared.context.report(Outcome::Loaded {
                    path: path.to_path_buf(),
                    event_count,
                });
                Ok(self.shared.log.clone())
            }
            Err(e) => {
                self.shared.context.report(Outcome::LoadFailed {
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Empty the log.
    ///
    /// # Errors
    ///
    /// [`CoreError::SessionBusy`] unless idle.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn clear_log(&self) -> CoreResult<()> {
        let location = Location::caller();

        let session = self.shared.lock_session();
        if !matches!(*session, ActiveSession::Idle) {
            return Err(self.shared.busy("clear", session.state(), location));
        }

        self.shared.log.clear();
        self.shared.context.set_event_count(0);
        self.shared.context.report(Outcome::Cleared);
        info!("Recording cleared");

        Ok(())
    }

    /// Bind `key` to `role` directly.
    ///
    /// # Errors
    ///
    /// [`CoreError::DuplicateBinding`] if the other role holds the same key;
    /// the previous binding is kept.
    #[track_caller]
    pub fn set_keybind(&self, role: BindRole, key: KeySymbol) -> CoreResult<()> {
        match self.shared.keybinds.bind(role, key.clone()) {
            Ok(()) => {
                self.shared
                    .context
                    .set_keybinds(self.shared.keybinds.status());
                self.shared.context.report(Outcome::KeybindSet { role, key });
                Ok(())
            }
            Err(e) => {
                if let CoreError::DuplicateBinding { .. } = e {
                    self.shared
                        .context
                        .report(Outcome::KeybindRejected { role, key });
                }
                Err(e)
            }
        }
    }

    /// Current toggle and kill bindings.
    pub fn keybind_status(&self) -> KeybindStatus {
        self.shared.keybinds.status()
    }

    /// Enter configuration mode; hotkeys are ignored until closed.
    #[instrument(skip(self))]
    pub fn open_keybind_settings(&self) {
        self.shared.context.set_configuring(true);
        info!("Keybind settings opened");
    }

    /// Bind the next key press to `role`, opening settings if needed.
    ///
    /// Replaces any capture that is still waiting.
    #[instrument(skip(self))]
    pub fn capture_keybind(&self, role: BindRole) {
        if !self.shared.context.is_configuring() {
            self.open_keybind_settings();
        }

        self.shared.end_key_capture();

        let capture = KeyCapture::new(
            role,
            self.shared.keybinds.clone(),
            self.shared.context.clone(),
        );
        let id = self.shared.backend.subscribe(Arc::new(capture));
        *self.shared.lock_key_capture() = Some(id);

        info!(role = %role, "Waiting for key press");
    }

    /// Leave configuration mode.
    ///
    /// # Errors
    ///
    /// [`CoreError::KeybindsIncomplete`] until both roles are bound; the
    /// settings stay open.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn close_keybind_settings(&self) -> CoreResult<()> {
        if !self.shared.keybinds.is_complete() {
            self.shared.context.report(Outcome::KeybindsIncomplete);
            return Err(CoreError::KeybindsIncomplete {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.shared.end_key_capture();
        self.shared.context.set_configuring(false);
        info!("Keybind settings closed");

        Ok(())
    }
}

impl Shared {
    fn run_replay(&self, session_id: Uuid, events: &[Event], looped: bool, cancel: CancelToken) {
        let result = self.injectors.create().and_then(|mut injector| {
            ReplayEngine::new(&mut *injector, cancel)
                .skipping_hotkeys(self.keybinds.clone())
                .play(events, looped)
        });

        if let Err(e) = result {
            error!(session_id = %session_id, error = ?e, "Replay failed");
        }

        self.finish_playback(session_id);
    }

    /// Return to Idle if `session_id` is still the running replay.
    fn finish_playback(&self, session_id: Uuid) {
        let mut session = self.lock_session();
        if let ActiveSession::Playing { session_id: id, .. } = *session {
            if id == session_id {
                // Dropping our own JoinHandle detaches this thread.
                *session = ActiveSession::Idle;
                self.context.set_state(ControlState::Idle);
                info!(session_id = %session_id, "Playback complete");
            }
        }
    }

    fn end_key_capture(&self) {
        if let Some(id) = self.lock_key_capture().take() {
            self.backend.unsubscribe(id);
        }
    }

    fn busy(
        &self,
        operation: &'static str,
        state: ControlState,
        location: &'static Location<'static>,
    ) -> CoreError {
        warn!(operation, state = %state, "Log is in use");
        self.context.report(Outcome::Busy { operation });
        CoreError::SessionBusy {
            operation,
            state,
            location: ErrorLocation::from(location),
        }
    }

    fn lock_session(&self) -> MutexGuard<'_, ActiveSession> {
        self.session.lock().unwrap_or_else(|e| {
            error!("Session lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }

    fn lock_key_capture(&self) -> MutexGuard<'_, Option<ListenerId>> {
        self.key_capture.lock().unwrap_or_else(|e| {
            error!("Key capture lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }
}
