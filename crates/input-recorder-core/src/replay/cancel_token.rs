use std::{
    sync::{Arc, Condvar, Mutex, MutexGuard},
    time::{Duration, Instant},
};

use tracing::error;

/// Cooperative cancellation flag with an interruptible sleep.
///
/// Cloning yields another handle to the same flag. Once cancelled a token
/// stays cancelled; each replay session gets a fresh one.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl CancelToken {
    /// Create an uncancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation and wake any sleeper.
    pub fn cancel(&self) {
        let (_, wakeup) = &*self.inner;
        *self.lock() = true;
        wakeup.notify_all();
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        *self.lock()
    }

    /// Sleep for `duration` unless cancelled first.
    ///
    /// Returns `true` if the full duration elapsed, `false` on cancellation.
    pub fn sleep(&self, duration: Duration) -> bool {
        let (_, wakeup) = &*self.inner;
        let deadline = Instant::now() + duration;
        let mut cancelled = self.lock();

        while !*cancelled {
            let now = Instant::now();
            if now >= deadline {
                return true;
            }
            cancelled = match wakeup.wait_timeout(cancelled, deadline - now) {
                Ok((guard, _)) => guard,
                Err(e) => e.into_inner().0,
            };
        }

        false
    }

    fn lock(&self) -> MutexGuard<'_, bool> {
        let (flag, _) = &*self.inner;
        flag.lock().unwrap_or_else(|e| {
            error!("Cancel flag lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }
}
