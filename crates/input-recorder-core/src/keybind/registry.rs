use crate::{BindRole, CoreError, CoreResult, KeySymbol};

use std::{
    panic::Location,
    sync::{Arc, RwLock},
};

use error_location::ErrorLocation;
use tracing::{error, info};

/// Current hotkey bindings. Both slots start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeybindStatus {
    /// Key that starts/stops playback.
    pub toggle: Option<KeySymbol>,
    /// Key that stops everything and exits.
    pub kill: Option<KeySymbol>,
}

impl KeybindStatus {
    /// Binding for `role`.
    pub fn get(&self, role: BindRole) -> Option<&KeySymbol> {
        match role {
            BindRole::Toggle => self.toggle.as_ref(),
            BindRole::Kill => self.kill.as_ref(),
        }
    }

    fn slot_mut(&mut self, role: BindRole) -> &mut Option<KeySymbol> {
        match role {
            BindRole::Toggle => &mut self.toggle,
            BindRole::Kill => &mut self.kill,
        }
    }
}

/// Holds the toggle and kill keys and keeps them distinct.
///
/// Cloning yields another handle to the same bindings.
#[derive(Debug, Clone, Default)]
pub struct KeybindRegistry {
    bindings: Arc<RwLock<KeybindStatus>>,
}

impl KeybindRegistry {
    /// Create a registry with both roles unbound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current bindings.
    pub fn status(&self) -> KeybindStatus {
        self.read().clone()
    }

    /// Commit `key` to `role`.
    ///
    /// Fails with [`CoreError::DuplicateBinding`] when the other role already
    /// holds the same key (case-insensitive); the existing binding is kept.
    #[track_caller]
    pub fn bind(&self, role: BindRole, key: KeySymbol) -> CoreResult<()> {
        let mut bindings = self.bindings.write().unwrap_or_else(|e| {
            error!("Keybind lock poisoned, recovering: {}", e);
            e.into_inner()
        });

        let other = role.other();
        if bindings.get(other).is_some_and(|bound| bound.matches(&key)) {
            return Err(CoreError::DuplicateBinding {
                key,
                other,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        info!(role = %role, key = %key, "Keybind set");
        *bindings.slot_mut(role) = Some(key);

        Ok(())
    }

    /// True only when both roles are bound.
    pub fn is_complete(&self) -> bool {
        let bindings = self.read();
        bindings.toggle.is_some() && bindings.kill.is_some()
    }

    /// Role bound to `key`, if any.
    pub fn role_for(&self, key: &KeySymbol) -> Option<BindRole> {
        let bindings = self.read();
        [BindRole::Toggle, BindRole::Kill]
            .into_iter()
            .find(|role| bindings.get(*role).is_some_and(|bound| bound.matches(key)))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, KeybindStatus> {
        self.bindings.read().unwrap_or_else(|e| {
            error!("Keybind lock poisoned, recovering: {}", e);
            e.into_inner()
        })
    }
}
