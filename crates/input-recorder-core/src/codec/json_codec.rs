use crate::{CoreError, CoreResult, Event};

use std::{fs, io::Write, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{info, instrument};

/// Write `events` to `path`.
///
/// Uses write-to-temp-then-rename so a crash mid-write never leaves a
/// truncated recording behind. Floats are written in shortest round-trip
/// form and parsed with serde_json's `float_roundtrip`, so reloaded `t`
/// values are bit-identical.
#[track_caller]
#[instrument(skip(events), fields(event_count = events.len()))]
pub fn save(events: &[Event], path: &Path) -> CoreResult<()> {
    let location = Location::caller();

    if events.is_empty() {
        return Err(CoreError::EmptyLog {
            location: ErrorLocation::from(location),
        });
    }

    let save_failed = |reason: String| CoreError::SaveFailed {
        path: path.to_path_buf(),
        reason,
        location: ErrorLocation::from(location),
    };

    let contents = serde_json::to_vec(events)
        .map_err(|e| save_failed(format!("Failed to serialize events: {}", e)))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| save_failed(format!("Failed to create directory: {}", e)))?;
    }

    let temp_path = path.with_extension("json.tmp");

    let mut temp_file = fs::File::create(&temp_path)
        .map_err(|e| save_failed(format!("Failed to create temp file: {}", e)))?;

    temp_file
        .write_all(&contents)
        .map_err(|e| save_failed(format!("Failed to write temp file: {}", e)))?;

    temp_file
        .sync_all()
        .map_err(|e| save_failed(format!("Failed to sync temp file: {}", e)))?;

    fs::rename(&temp_path, path)
        .map_err(|e| save_failed(format!("Failed to rename temp file: {}", e)))?;

    info!(path = ?path, event_count = events.len(), "Recording saved");

    Ok(())
}

/// Read a recording from `path`.
///
/// Returns the whole sequence or an error; there is no partial result.
#[track_caller]
#[instrument]
pub fn load(path: &Path) -> CoreResult<Vec<Event>> {
    let location = Location::caller();

    let load_failed = |reason: String| CoreError::LoadFailed {
        path: path.to_path_buf(),
        reason,
        location: ErrorLocation::from(location),
    };

    let contents =
        fs::read(path).map_err(|e| load_failed(format!("Failed to read file: {}", e)))?;

    let events: Vec<Event> = serde_json::from_slice(&contents)
        .map_err(|e| load_failed(format!("Malformed recording: {}", e)))?;

    info!(path = ?path, event_count = events.len(), "Recording loaded");

    Ok(events)
}
