use crate::config::default_loop_playback;

use serde::{Deserialize, Serialize};

/// Playback settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Initial state of the Loop Playback toggle.
    #[serde(default = "default_loop_playback")]
    pub loop_playback: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            loop_playback: default_loop_playback(),
        }
    }
}
