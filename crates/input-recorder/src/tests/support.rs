//! Shared fixtures for the binary's tests.

use input_recorder_core::{
    BindRole, Controller, CoreError, CoreResult, Injector, InputBackend, InputListener,
    KeySymbol, ListenerId,
};

use std::{panic::Location, sync::Arc};

use error_location::ErrorLocation;

/// Backend with no hook; tests drive the controller directly.
pub(crate) struct NullBackend;

impl InputBackend for NullBackend {
    fn subscribe(&self, _listener: Arc<dyn InputListener>) -> ListenerId {
        ListenerId(0)
    }

    fn unsubscribe(&self, _id: ListenerId) {}
}

#[allow(clippy::unwrap_used)]
pub(crate) fn bound_controller() -> Controller {
    let injectors = Arc::new(|| -> CoreResult<Box<dyn Injector>> {
        Err(CoreError::InjectionFailed {
            reason: "no injection in tests".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    });
    let controller = Controller::new(Arc::new(NullBackend), injectors);
    controller
        .set_keybind(BindRole::Toggle, KeySymbol::parse("f8"))
        .unwrap();
    controller
        .set_keybind(BindRole::Kill, KeySymbol::parse("f9"))
        .unwrap();
    controller
}
