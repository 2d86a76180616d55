mod hotkey;
mod key_map;
mod support;
mod tray;
