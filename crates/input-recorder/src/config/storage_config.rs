use crate::config::default_recording_path;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where Save and Load read and write the recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Recording file used by Save and Load.
    #[serde(default = "default_recording_path")]
    pub recording_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            recording_path: default_recording_path(),
        }
    }
}
