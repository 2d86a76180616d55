use crate::{BindRole, ControlState, KeySymbol};

use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Capture, replay and persistence errors with source location tracking.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Recording file is missing, unreadable or malformed.
    #[error("Failed to load recording from {path:?}: {reason} {location}")]
    LoadFailed {
        /// File that was being loaded.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Recording could not be written.
    #[error("Failed to save recording to {path:?}: {reason} {location}")]
    SaveFailed {
        /// Destination file.
        path: PathBuf,
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Save or playback was requested with no events in the log.
    #[error("No input events recorded {location}")]
    EmptyLog {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// A single event could not be injected.
    #[error("Injection failed: {reason} {location}")]
    InjectionFailed {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Key is already bound to the other role.
    #[error("Key '{key}' is already used for {other} {location}")]
    DuplicateBinding {
        /// Key that was rejected.
        key: KeySymbol,
        /// Role currently holding the key.
        other: BindRole,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Keybind settings closed before both roles were bound.
    #[error("Both toggle and kill keys must be set {location}")]
    KeybindsIncomplete {
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// The event log is in use by an active session.
    #[error("Cannot {operation} while {state} {location}")]
    SessionBusy {
        /// Operation that was refused.
        operation: &'static str,
        /// Session state at the time of the request.
        state: ControlState,
        /// Source location where error occurred.
        location: ErrorLocation,
    },

    /// Platform input backend failure.
    #[error("Input backend error: {reason} {location}")]
    Backend {
        /// Description of the failure.
        reason: String,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`CoreError`].
pub type Result<T> = std::result::Result<T, CoreError>;
