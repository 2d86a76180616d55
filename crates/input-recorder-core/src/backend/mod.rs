//! Capability seams between the engine and the operating system.
//!
//! Platform hook and injection code implements these traits; everything
//! else in this crate only talks to them.

mod injector;
mod input_backend;

pub use {
    injector::{Injector, InjectorFactory},
    input_backend::{InputBackend, InputListener, ListenerId},
};
