use crate::{AppCommand, AppResult, TrayCommand, TrayMenuIds, TrayStatusTracker, config::Config};

use input_recorder_core::{Controller, SessionSnapshot};

use std::time::Duration;

use tao::event_loop::EventLoopProxy;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};
use tray_icon::menu::MenuEvent;

/// Main application state.
///
/// Runs on the async runtime thread. Communicates tray icon updates
/// back to the main thread via `tray_proxy` because `TrayIcon` is `!Send`
/// and must remain on the UI thread.
pub struct App {
    pub(crate) controller: Controller,
    pub(crate) config: Config,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) menu_ids: TrayMenuIds,
    pub(crate) command_rx: mpsc::Receiver<AppCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
}

impl App {
    /// Run the main application event loop.
    #[instrument(skip(self))]
    pub(crate) async fn run(mut self) -> AppResult<()> {
        info!("Input Recorder starting");

        // MenuEvent::receiver() is a blocking crossbeam receiver; one
        // blocking task forwards it. Dropping tray_event_rx ends the task on
        // its next send.
        let (tray_event_tx, mut tray_event_rx) = mpsc::channel(32);
        let tray_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if tray_event_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        let mut snapshot_rx = self.controller.subscribe();
        let mut tray_status = TrayStatusTracker::default();
        let initial = snapshot_rx.borrow_and_update().clone();
        self.refresh_tray(&mut tray_status, &initial);

        loop {
            tokio::select! {
                Some(event) = tray_event_rx.recv() => {
                    let Some(cmd) = self.menu_ids.command_for(&event.id) else {
                        debug!(menu_id = ?event.id, "Unknown menu item");
                        continue;
                    };
                    if !self.handle_command(cmd) {
                        break;
                    }
                    // Loop Playback lives in the config, not the snapshot.
                    self.refresh_tray(&mut tray_status, &self.controller.context().snapshot());
                }

                Some(cmd) = self.command_rx.recv() => {
                    if !self.handle_command(cmd) {
                        break;
                    }
                }

                Ok(()) = snapshot_rx.changed() => {
                    let snapshot = snapshot_rx.borrow_and_update().clone();
                    self.refresh_tray(&mut tray_status, &snapshot);
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        drop(tray_event_rx);

        match tokio::time::timeout(Duration::from_secs(1), tray_handle).await {
            Ok(Ok(())) => info!("Tray event forwarder stopped cleanly"),
            Ok(Err(e)) => error!(error = ?e, "Tray event forwarder task panicked"),
            Err(_) => info!(
                "Tray event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
            ),
        }

        let _ = self.shutdown_tx.send(true);
        if self.tray_proxy.send_event(TrayCommand::Shutdown).is_err() {
            warn!("Event loop already closed");
        }
        info!("Input Recorder shut down successfully");

        Ok(())
    }

    /// Execute one command. Returns `false` when the app should exit.
    #[instrument(skip(self))]
    fn handle_command(&mut self, cmd: AppCommand) -> bool {
        let looped = self.config.playback.loop_playback;
        let path = self.config.storage.recording_path.clone();

        let result = match cmd {
            AppCommand::StartRecording => {
                self.controller.start_recording();
                Ok(())
            }
            AppCommand::StopRecording => {
                self.controller.stop_recording();
                Ok(())
            }
            AppCommand::StartPlayback => self.controller.start_playback(looped),
            AppCommand::StopPlayback => {
                self.controller.stop_playback();
                Ok(())
            }
            AppCommand::TogglePlayback => self.controller.toggle_playback(looped),
            AppCommand::ToggleLoop => {
                self.toggle_loop();
                Ok(())
            }
            AppCommand::Save => self.controller.save_log(&path).map(|_| ()),
            AppCommand::Load => self.controller.load_log(&path).map(|_| ()),
            AppCommand::Clear => self.controller.clear_log(),
            AppCommand::CaptureKeybind(role) => {
                self.controller.capture_keybind(role);
                Ok(())
            }
            AppCommand::CloseKeybinds => self.controller.close_keybind_settings(),
            AppCommand::Kill => {
                info!("Kill key pressed");
                self.controller.kill();
                return false;
            }
            AppCommand::Shutdown => {
                info!("Shutdown requested");
                self.controller.kill();
                return false;
            }
        };

        // Failures are also published as the snapshot outcome for the tray.
        if let Err(e) = result {
            warn!(command = ?cmd, error = %e, "Command failed");
        }

        true
    }

    fn toggle_loop(&mut self) {
        let playback = &mut self.config.playback;
        playback.loop_playback = !playback.loop_playback;
        info!(loop_playback = playback.loop_playback, "Loop playback toggled");

        if let Err(e) = self.config.save() {
            error!(error = ?e, "Failed to persist loop setting");
        }
    }

    fn refresh_tray(&self, tracker: &mut TrayStatusTracker, snapshot: &SessionSnapshot) {
        let Some(status) = tracker.update(snapshot, self.config.playback.loop_playback) else {
            return;
        };

        if self
            .tray_proxy
            .send_event(TrayCommand::SetStatus(status))
            .is_err()
        {
            warn!("Event loop closed, dropping tray update");
        }
    }
}
