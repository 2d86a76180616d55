use crate::{
    BindRole, CoreError, InputListener, KeySymbol, KeybindRegistry, Outcome, SessionContext,
};

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{error, info, warn};

/// Listens for the next key press and binds it to one role.
///
/// A key already used by the other role is rejected and capture keeps
/// waiting. After the first accepted key every further press is ignored.
pub(crate) struct KeyCapture {
    role: BindRole,
    registry: KeybindRegistry,
    context: SessionContext,
    done: AtomicBool,
}

impl KeyCapture {
    pub(crate) fn new(role: BindRole, registry: KeybindRegistry, context: SessionContext) -> Self {
        Self {
            role,
            registry,
            context,
            done: AtomicBool::new(false),
        }
    }
}

impl InputListener for KeyCapture {
    fn on_key(&self, key: &KeySymbol, pressed: bool) {
        if !pressed || self.done.load(Ordering::Acquire) {
            return;
        }

        match self.registry.bind(self.role, key.clone()) {
            Ok(()) => {
                self.done.store(true, Ordering::Release);
                self.context.set_keybinds(self.registry.status());
                self.context.report(Outcome::KeybindSet {
                    role: self.role,
                    key: key.clone(),
                });
                info!(role = %self.role, key = %key, "Keybind captured");
            }
            Err(CoreError::DuplicateBinding { other, .. }) => {
                warn!(role = %self.role, key = %key, other = %other, "Key already bound");
                self.context.report(Outcome::KeybindRejected {
                    role: self.role,
                    key: key.clone(),
                });
            }
            Err(e) => error!(error = ?e, "Keybind capture failed"),
        }
    }
}
