mod playback_config;
#[allow(clippy::module_inception)]
mod config;
mod storage_config;

pub(crate) use {
    config::Config, playback_config::PlaybackConfig, storage_config::StorageConfig,
};

use std::path::PathBuf;

use directories::ProjectDirs;

pub(crate) const DEFAULT_LOOP_PLAYBACK: bool = false;
pub(crate) const RECORDING_FILE_NAME: &str = "recording.json";

pub(crate) fn default_loop_playback() -> bool {
    DEFAULT_LOOP_PLAYBACK
}

/// `<data dir>/recording.json`, or a relative path if the platform has no
/// data directory.
pub(crate) fn default_recording_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join(RECORDING_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(RECORDING_FILE_NAME))
}

pub(crate) fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "input-recorder", "Input-Recorder")
}
