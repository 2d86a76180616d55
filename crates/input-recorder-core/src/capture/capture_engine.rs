use crate::{
    Event, EventKind, EventLog, InputBackend, InputListener, KeySymbol, KeybindRegistry,
    ListenerId, MouseButton, SessionContext,
};

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Instant,
};

use tracing::{debug, info, instrument};

/// Records global input into an [`EventLog`].
///
/// The log is cleared on start and only this engine appends to it until
/// [`stop`](Self::stop) returns. Dropping the engine stops it.
pub struct CaptureEngine {
    backend: Arc<dyn InputBackend>,
    recorder: Arc<CaptureRecorder>,
    listener_id: Option<ListenerId>,
}

impl CaptureEngine {
    /// Clear `sink` and start appending every input notification to it.
    #[instrument(skip_all)]
    pub fn start(
        backend: Arc<dyn InputBackend>,
        sink: EventLog,
        registry: KeybindRegistry,
        context: SessionContext,
    ) -> Self {
        sink.clear();
        context.set_event_count(0);

        let recorder = Arc::new(CaptureRecorder {
            log: sink,
            registry,
            context,
            started_at: Instant::now(),
            active: AtomicBool::new(true),
        });

        let listener_id = backend.subscribe(Arc::clone(&recorder) as Arc<dyn InputListener>);

        info!(listener_id = listener_id.0, "Input capture started");

        Self {
            backend,
            recorder,
            listener_id: Some(listener_id),
        }
    }

    /// Stop capturing and return the number of recorded events.
    ///
    /// No event is appended after this returns. Calling it again is a no-op.
    #[instrument(skip(self))]
    pub fn stop(&mut self) -> usize {
        // Flip the flag under the log lock so an in-flight append either
        // completes before us or observes the flag and drops its event.
        let event_count = {
            let events = self.recorder.log.lock();
            self.recorder.active.store(false, Ordering::Release);
            events.len()
        };

        if let Some(id) = self.listener_id.take() {
            self.backend.unsubscribe(id);
            info!(
                event_count,
                duration_ms = self.recorder.started_at.elapsed().as_millis(),
                "Input capture stopped"
            );
        }

        event_count
    }

    /// Whether the engine is still appending.
    pub fn is_active(&self) -> bool {
        self.recorder.active.load(Ordering::Acquire)
    }
}

impl Drop for CaptureEngine {
    fn drop(&mut self) {
        self.stop();
    }
}

struct CaptureRecorder {
    log: EventLog,
    registry: KeybindRegistry,
    context: SessionContext,
    started_at: Instant,
    active: AtomicBool,
}

impl CaptureRecorder {
    fn append(&self, kind: EventKind) {
        let mut events = self.log.lock();
        if !self.active.load(Ordering::Acquire) {
            return;
        }

        // Timestamp under the lock so log order and time order agree.
        let t = self.started_at.elapsed().as_secs_f64();
        events.push(Event::new(kind, t));
        self.context.set_event_count(events.len());
    }
}

impl InputListener for CaptureRecorder {
    fn on_pointer_move(&self, x: i32, y: i32) {
        self.append(EventKind::Move { x, y });
    }

    fn on_button(&self, x: i32, y: i32, button: MouseButton, pressed: bool) {
        self.append(EventKind::Click {
            x,
            y,
            button,
            pressed,
        });
    }

    fn on_scroll(&self, x: i32, y: i32, dx: i32, dy: i32) {
        self.append(EventKind::Scroll { x, y, dx, dy });
    }

    fn on_key(&self, key: &KeySymbol, pressed: bool) {
        // Control keys stay out of the log so replay cannot trigger them.
        if let Some(role) = self.registry.role_for(key) {
            debug!(role = %role, key = %key, "Skipping hotkey during capture");
            return;
        }

        let key = key.clone();
        if pressed {
            self.append(EventKind::KeyPress { key });
        } else {
            self.append(EventKind::KeyRelease { key });
        }
    }
}
