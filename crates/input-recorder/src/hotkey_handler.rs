//! Global hotkey handling.
//!
//! Key presses arrive from the shared input hook, are matched against the
//! current toggle and kill bindings, and forwarded to the application as
//! commands. Keys are observed, never consumed, so the focused application
//! still receives them.

use crate::{AppCommand, AppError, AppResult};

use input_recorder_core::{
    Controller, HotkeyAction, InputBackend, InputListener, KeySymbol, ListenerId,
};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, instrument, warn};

/// Depth of the queue between the hook thread and the handler.
const KEY_QUEUE_DEPTH: usize = 64;

/// Hook listener that forwards key presses to the async handler.
///
/// Runs on the hook thread, so it only does a non-blocking `try_send`.
pub(crate) struct HotkeyListener {
    key_tx: mpsc::Sender<KeySymbol>,
}

impl HotkeyListener {
    pub(crate) fn new(key_tx: mpsc::Sender<KeySymbol>) -> Self {
        Self { key_tx }
    }
}

impl InputListener for HotkeyListener {
    fn on_key(&self, key: &KeySymbol, pressed: bool) {
        if !pressed {
            return;
        }
        if let Err(e) = self.key_tx.try_send(key.clone()) {
            warn!(key = %key, error = %e, "Dropping key press");
        }
    }
}

/// Resolves global key presses to playback commands.
pub struct HotkeyHandler {
    controller: Controller,
    command_tx: mpsc::Sender<AppCommand>,
}

impl HotkeyHandler {
    /// Create a handler that resolves keys through `controller`.
    pub fn new(controller: Controller, command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self {
            controller,
            command_tx,
        }
    }

    /// Subscribe to `backend` and handle key presses until shutdown.
    #[instrument(skip_all)]
    pub async fn run(
        &self,
        backend: Arc<dyn InputBackend>,
        mut shutdown_rx: watch::Receiver<bool>,
    ) -> AppResult<()> {
        let (key_tx, mut key_rx) = mpsc::channel(KEY_QUEUE_DEPTH);
        let listener_id: ListenerId = backend.subscribe(Arc::new(HotkeyListener::new(key_tx)));

        info!("Hotkey handler listening");

        let result = loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Hotkey handler shutting down");
                    break Ok(());
                }
                Some(key) = key_rx.recv() => {
                    if let Err(e) = self.handle_key(&key).await {
                        break Err(e);
                    }
                }
            }
        };

        backend.unsubscribe(listener_id);
        result
    }

    /// Map one key press to a command and send it.
    ///
    /// Presses are ignored while keybind settings are open.
    #[instrument(skip(self))]
    pub(crate) async fn handle_key(&self, key: &KeySymbol) -> AppResult<()> {
        let command = match self.controller.resolve_hotkey(key) {
            HotkeyAction::Ignored => return Ok(()),
            HotkeyAction::TogglePlayback => AppCommand::TogglePlayback,
            HotkeyAction::Kill => AppCommand::Kill,
        };

        debug!(key = %key, ?command, "Hotkey pressed");

        self.command_tx
            .send(command)
            .await
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {:?}: {}", command, e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
