//! System tray icon with state-based updates.
//!
//! The tray is the whole user surface: its menu drives recording, playback,
//! persistence and keybind capture, and its icon and tooltip show the live
//! session status.

use crate::{AppCommand, AppError, AppResult, TrayIconState, TrayStatus};

use input_recorder_core::{BindRole, ControlState};

use std::panic::Location;

use error_location::ErrorLocation;
use image::{Rgba, RgbaImage};
use tracing::{info, instrument};
use tray_icon::menu::{
    CheckMenuItem, IsMenuItem, Menu, MenuId, MenuItem, PredefinedMenuItem, Submenu,
};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

const ICON_SIZE: u32 = 32;

/// Menu item IDs, shareable with the async runtime.
#[derive(Debug, Clone)]
pub struct TrayMenuIds {
    pub(crate) record: MenuId,
    pub(crate) stop_recording: MenuId,
    pub(crate) play: MenuId,
    pub(crate) stop_playback: MenuId,
    pub(crate) loop_playback: MenuId,
    pub(crate) save: MenuId,
    pub(crate) load: MenuId,
    pub(crate) clear: MenuId,
    pub(crate) set_toggle_key: MenuId,
    pub(crate) set_kill_key: MenuId,
    pub(crate) keybinds_done: MenuId,
    pub(crate) exit: MenuId,
}

impl TrayMenuIds {
    /// Command for a clicked menu item.
    pub fn command_for(&self, id: &MenuId) -> Option<AppCommand> {
        let command = if *id == self.record {
            AppCommand::StartRecording
        } else if *id == self.stop_recording {
            AppCommand::StopRecording
        } else if *id == self.play {
            AppCommand::StartPlayback
        } else if *id == self.stop_playback {
            AppCommand::StopPlayback
        } else if *id == self.loop_playback {
            AppCommand::ToggleLoop
        } else if *id == self.save {
            AppCommand::Save
        } else if *id == self.load {
            AppCommand::Load
        } else if *id == self.clear {
            AppCommand::Clear
        } else if *id == self.set_toggle_key {
            AppCommand::CaptureKeybind(BindRole::Toggle)
        } else if *id == self.set_kill_key {
            AppCommand::CaptureKeybind(BindRole::Kill)
        } else if *id == self.keybinds_done {
            AppCommand::CloseKeybinds
        } else if *id == self.exit {
            AppCommand::Shutdown
        } else {
            return None;
        };
        Some(command)
    }
}

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    record: MenuItem,
    stop_recording: MenuItem,
    play: MenuItem,
    stop_playback: MenuItem,
    loop_playback: CheckMenuItem,
    save: MenuItem,
    load: MenuItem,
    clear: MenuItem,
    keybinds_done: MenuItem,
    ids: TrayMenuIds,
}

impl TrayManager {
    /// Create the tray icon and menu in the idle state.
    #[track_caller]
    #[instrument]
    pub fn new(loop_playback: bool) -> AppResult<Self> {
        let record = MenuItem::new("Record", true, None);
        let stop_recording = MenuItem::new("Stop Recording", false, None);
        let play = MenuItem::new("Play", true, None);
        let stop_playback = MenuItem::new("Stop Playback", false, None);
        let loop_item = CheckMenuItem::new("Loop Playback", true, loop_playback, None);
        let save = MenuItem::new("Save", true, None);
        let load = MenuItem::new("Load", true, None);
        let clear = MenuItem::new("Clear", true, None);
        let set_toggle_key = MenuItem::new("Set Toggle Key", true, None);
        let set_kill_key = MenuItem::new("Set Kill Key", true, None);
        let keybinds_done = MenuItem::new("Done", false, None);
        let exit = MenuItem::new("Exit", true, None);

        let keybinds = Submenu::new("Keybinds", true);
        keybinds
            .append_items(&[&set_toggle_key, &set_kill_key, &keybinds_done])
            .map_err(|e| menu_error("keybinds submenu", e))?;

        let separators = [
            PredefinedMenuItem::separator(),
            PredefinedMenuItem::separator(),
            PredefinedMenuItem::separator(),
        ];
        let items: [&dyn IsMenuItem; 13] = [
            &record,
            &stop_recording,
            &play,
            &stop_playback,
            &loop_item,
            &separators[0],
            &save,
            &load,
            &clear,
            &separators[1],
            &keybinds,
            &separators[2],
            &exit,
        ];

        let menu = Menu::new();
        menu.append_items(&items)
            .map_err(|e| menu_error("tray menu", e))?;

        let ids = TrayMenuIds {
            record: record.id().clone(),
            stop_recording: stop_recording.id().clone(),
            play: play.id().clone(),
            stop_playback: stop_playback.id().clone(),
            loop_playback: loop_item.id().clone(),
            save: save.id().clone(),
            load: load.id().clone(),
            clear: clear.id().clone(),
            set_toggle_key: set_toggle_key.id().clone(),
            set_kill_key: set_kill_key.id().clone(),
            keybinds_done: keybinds_done.id().clone(),
            exit: exit.id().clone(),
        };

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip("Input Recorder - Idle")
            .with_menu(Box::new(menu))
            .with_icon(Self::build_icon(TrayIconState::Idle)?)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            record,
            stop_recording,
            play,
            stop_playback,
            loop_playback: loop_item,
            save,
            load,
            clear,
            keybinds_done,
            ids,
        })
    }

    /// Menu item IDs for event dispatch.
    pub fn menu_ids(&self) -> &TrayMenuIds {
        &self.ids
    }

    /// Redraw icon, tooltip and item availability.
    #[track_caller]
    #[instrument(skip(self))]
    pub fn update_status(&mut self, status: &TrayStatus) -> AppResult<()> {
        self.tray_icon
            .set_icon(Some(Self::build_icon(status.icon)?))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.tray_icon
            .set_tooltip(Some(&status.tooltip))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let idle = status.state == ControlState::Idle;
        let recording = status.state == ControlState::Recording;
        let playing = status.state == ControlState::Playing;

        self.record.set_enabled(!recording);
        self.stop_recording.set_enabled(recording);
        self.play.set_enabled(!playing);
        self.stop_playback.set_enabled(playing);
        self.save.set_enabled(!recording);
        self.load.set_enabled(idle);
        self.clear.set_enabled(idle);
        self.keybinds_done.set_enabled(status.configuring);
        self.loop_playback.set_checked(status.loop_playback);

        Ok(())
    }

    /// Draw a filled disc in the state colour.
    #[track_caller]
    fn build_icon(state: TrayIconState) -> AppResult<Icon> {
        let fill = Rgba(state.color());
        let center = (ICON_SIZE as f32 - 1.0) / 2.0;
        let radius = ICON_SIZE as f32 / 2.0 - 1.0;

        let img = RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
            let (dx, dy) = (x as f32 - center, y as f32 - center);
            if dx * dx + dy * dy <= radius * radius {
                fill
            } else {
                Rgba([0, 0, 0, 0])
            }
        });

        Icon::from_rgba(img.into_raw(), ICON_SIZE, ICON_SIZE).map_err(|e| AppError::TrayError {
            reason: format!("Failed to create icon from RGBA: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

#[track_caller]
fn menu_error(what: &str, e: tray_icon::menu::Error) -> AppError {
    AppError::TrayError {
        reason: format!("Failed to build {}: {}", what, e),
        location: ErrorLocation::from(Location::caller()),
    }
}
