use crate::{CancelToken, CaptureEngine, ControlState};

use std::{thread::JoinHandle, time::Instant};

use tracing::{debug, warn};
use uuid::Uuid;

/// The engine currently owning the event log.
pub(crate) enum ActiveSession {
    Idle,
    Recording {
        session_id: Uuid,
        started_at: Instant,
        capture: CaptureEngine,
    },
    Playing {
        session_id: Uuid,
        cancel: CancelToken,
        handle: JoinHandle<()>,
    },
}

impl ActiveSession {
    pub(crate) fn state(&self) -> ControlState {
        match self {
            ActiveSession::Idle => ControlState::Idle,
            ActiveSession::Recording { .. } => ControlState::Recording,
            ActiveSession::Playing { .. } => ControlState::Playing,
        }
    }

    /// Stop whatever is running and wait for the replay thread to exit.
    ///
    /// Must be called without holding the session lock: the replay thread
    /// takes it on its way out.
    pub(crate) fn shutdown(self) {
        match self {
            ActiveSession::Idle => {}
            ActiveSession::Recording {
                session_id,
                started_at,
                mut capture,
            } => {
                let event_count = capture.stop();
                debug!(
                    session_id = %session_id,
                    event_count,
                    duration_ms = started_at.elapsed().as_millis(),
                    "Recording session closed"
                );
            }
            ActiveSession::Playing {
                session_id,
                cancel,
                handle,
            } => {
                cancel.cancel();
                if handle.thread().id() == std::thread::current().id() {
                    return;
                }
                if handle.join().is_err() {
                    warn!(session_id = %session_id, "Replay thread panicked");
                } else {
                    debug!(session_id = %session_id, "Replay session closed");
                }
            }
        }
    }
}
