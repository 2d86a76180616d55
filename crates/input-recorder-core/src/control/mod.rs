mod active_session;
mod controller;
mod hotkey_action;

pub use {controller::Controller, hotkey_action::HotkeyAction};
