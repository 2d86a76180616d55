mod bind_role;
mod key_capture;
mod registry;

pub(crate) use key_capture::KeyCapture;

pub use {
    bind_role::BindRole,
    registry::{KeybindRegistry, KeybindStatus},
};
