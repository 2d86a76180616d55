//! Input Recorder Core Library
//!
//! Captures global mouse and keyboard activity as a timestamped event log,
//! persists it as JSON, and replays it with the original inter-event timing.
//! Platform hooks and injection plug in through [`InputBackend`] and
//! [`Injector`]; [`Controller`] runs the Idle/Recording/Playing state machine.
//!
//! # Example
//!
//! ```no_run
//! use input_recorder_core::{Controller, CoreResult, InjectorFactory, InputBackend};
//!
//! use std::{path::Path, sync::Arc, thread::sleep, time::Duration};
//!
//! fn run(
//!     backend: Arc<dyn InputBackend>,
//!     injectors: Arc<dyn InjectorFactory>,
//! ) -> CoreResult<()> {
//!     let controller = Controller::new(backend, injectors);
//!
//!     controller.start_recording();
//!     sleep(Duration::from_secs(5));
//!     controller.stop_recording();
//!
//!     controller.save_log(Path::new("recording.json"))?;
//!     controller.start_playback(false)?;
//!     Ok(())
//! }
//! ```

mod backend;
mod capture;
pub mod codec;
mod control;
mod error;
mod event;
mod keybind;
mod replay;
mod session;

pub use {
    backend::{Injector, InjectorFactory, InputBackend, InputListener, ListenerId},
    capture::CaptureEngine,
    control::{Controller, HotkeyAction},
    error::CoreError,
    error::Result as CoreResult,
    event::{Event, EventKind, EventLog, KeySymbol, MouseButton, NamedKey},
    keybind::{BindRole, KeybindRegistry, KeybindStatus},
    replay::{CancelToken, ReplayEngine, ReplayReport},
    session::{ControlState, Outcome, SessionContext, SessionSnapshot},
};

#[cfg(test)]
mod tests;
