mod event_log;
mod input_event;
mod key_symbol;
mod mouse_button;

pub use {
    event_log::EventLog,
    input_event::{Event, EventKind},
    key_symbol::{KeySymbol, NamedKey},
    mouse_button::MouseButton,
};
