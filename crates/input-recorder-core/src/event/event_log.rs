use crate::Event;

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::error;

/// Shared, ordered event sequence.
///
/// Cloning yields another handle to the same log. Insertion order is
/// chronological order and defines replay order. Appends and length reads
/// go through one mutex so a live counter never observes a torn write.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Arc<Mutex<Vec<Event>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log holding `events`.
    pub fn from_events(events: Vec<Event>) -> Self {
        Self {
            events: Arc::new(Mutex::new(events)),
        }
    }

    /// Number of events currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the log holds no events.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the current sequence.
    pub fn snapshot(&self) -> Vec<Event> {
        self.lock().clone()
    }

    /// Swap in a whole new sequence.
    pub fn replace(&self, events: Vec<Event>) {
        *self.lock() = events;
    }

    /// Remove every event.
    pub fn clear(&self) {
        self.lock().clear();
    }

    // Recover from poison: a panicked holder cannot leave a Vec half-written.
    pub(crate) fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        self.events.lock().unwrap_or_else(|e| {
            error!("Event log lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }
}
