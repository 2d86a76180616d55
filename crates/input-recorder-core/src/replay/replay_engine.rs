use crate::{
    BindRole, CancelToken, CoreError, CoreResult, Event, EventKind, Injector, KeybindRegistry,
    replay::held_input_guard::HeldInputGuard,
};

use std::{
    panic::Location,
    time::{Duration, Instant},
};

use error_location::ErrorLocation;
use tracing::{debug, info, instrument, warn};

/// Summary of a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Passes that ran to the end of the log.
    pub passes: usize,
    /// Events injected successfully.
    pub injected: usize,
    /// Events skipped because injection failed or the key is a bound hotkey.
    pub skipped: usize,
    /// Whether the replay stopped on cancellation.
    pub cancelled: bool,
}

/// Re-injects an event sequence with its original inter-event timing.
pub struct ReplayEngine<'a, I: Injector + ?Sized> {
    injector: &'a mut I,
    cancel: CancelToken,
    hotkeys: Option<KeybindRegistry>,
}

impl<'a, I: Injector + ?Sized> ReplayEngine<'a, I> {
    /// Create an engine that injects through `injector` until `cancel` fires.
    pub fn new(injector: &'a mut I, cancel: CancelToken) -> Self {
        Self {
            injector,
            cancel,
            hotkeys: None,
        }
    }

    /// Never inject keys currently bound in `keybinds`.
    ///
    /// Bindings are read per event, so a key bound mid-replay is skipped
    /// from then on.
    pub fn skipping_hotkeys(mut self, keybinds: KeybindRegistry) -> Self {
        self.hotkeys = Some(keybinds);
        self
    }

    /// Replay `events` once, or repeatedly when `looped`, until cancelled.
    ///
    /// Each pass waits `t` before its first event and `t[i] - t[i-1]` before
    /// every other one. A failed injection skips that event and the replay
    /// carries on. Keys and buttons still held when the replay ends are
    /// released. With [`skipping_hotkeys`](Self::skipping_hotkeys), bound
    /// control keys are skipped but their timing is kept.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyLog`] without injecting anything when
    /// `events` is empty.
    #[track_caller]
    #[instrument(skip(self, events), fields(event_count = events.len()))]
    pub fn play(&mut self, events: &[Event], looped: bool) -> CoreResult<ReplayReport> {
        if events.is_empty() {
            return Err(CoreError::EmptyLog {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let start = Instant::now();
        let mut report = ReplayReport::default();
        let mut guard = HeldInputGuard::new(&mut *self.injector);

        'passes: loop {
            let mut t_last: Option<f64> = None;

            for event in events {
                if self.cancel.is_cancelled() {
                    report.cancelled = true;
                    break 'passes;
                }

                let wait = match t_last {
                    Some(last) => event.t - last,
                    None => event.t,
                };

                if !self.cancel.sleep(wait_duration(wait)) {
                    report.cancelled = true;
                    break 'passes;
                }

                if let Some(role) = hotkey_role(self.hotkeys.as_ref(), &event.kind) {
                    debug!(role = %role, event = event.kind.tag(), t = event.t, "Skipping hotkey");
                    report.skipped += 1;
                    t_last = Some(event.t);
                    continue;
                }

                match guard.inject(&event.kind) {
                    Ok(()) => report.injected += 1,
                    Err(e) => {
                        warn!(event = event.kind.tag(), t = event.t, error = ?e, "Skipping event");
                        report.skipped += 1;
                    }
                }

                t_last = Some(event.t);
            }

            report.passes += 1;
            debug!(pass = report.passes, "Replay pass complete");

            if !looped {
                break;
            }
        }

        drop(guard);

        info!(
            passes = report.passes,
            injected = report.injected,
            skipped = report.skipped,
            cancelled = report.cancelled,
            duration_ms = start.elapsed().as_millis(),
            "Replay finished"
        );

        Ok(report)
    }
}

fn hotkey_role(keybinds: Option<&KeybindRegistry>, kind: &EventKind) -> Option<BindRole> {
    let keybinds = keybinds?;
    match kind {
        EventKind::KeyPress { key } | EventKind::KeyRelease { key } => keybinds.role_for(key),
        _ => None,
    }
}

/// Negative, NaN and unrepresentable waits collapse to zero.
fn wait_duration(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds.max(0.0)).unwrap_or(Duration::ZERO)
}
