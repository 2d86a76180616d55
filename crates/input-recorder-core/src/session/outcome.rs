use crate::{BindRole, KeySymbol};

use std::path::PathBuf;

/// Result of the most recent user-visible operation, for display.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Log written to disk.
    Saved {
        /// Destination file.
        path: PathBuf,
        /// Number of events written.
        event_count: usize,
    },
    /// Log replaced from disk.
    Loaded {
        /// Source file.
        path: PathBuf,
        /// Number of events read.
        event_count: usize,
    },
    /// Log emptied.
    Cleared,
    /// Save failed; the file on disk is unchanged.
    SaveFailed {
        /// Human-readable reason.
        reason: String,
    },
    /// Load failed; the in-memory log is unchanged.
    LoadFailed {
        /// Human-readable reason.
        reason: String,
    },
    /// Save was requested with an empty log.
    NothingToSave,
    /// Playback was requested with an empty log.
    NothingToPlay,
    /// Operation refused because a session is using the log.
    Busy {
        /// Refused operation.
        operation: &'static str,
    },
    /// Key committed to a role.
    KeybindSet {
        /// Role that was bound.
        role: BindRole,
        /// Bound key.
        key: KeySymbol,
    },
    /// Key rejected because the other role already uses it.
    KeybindRejected {
        /// Role that was being bound.
        role: BindRole,
        /// Rejected key.
        key: KeySymbol,
    },
    /// Keybind settings cannot close until both roles are bound.
    KeybindsIncomplete,
}
