//! OS adapters for the core's input seams: an `rdev` global hook as the
//! [`InputBackend`](input_recorder_core::InputBackend) and `enigo` as the
//! [`Injector`](input_recorder_core::Injector).

mod enigo_injector;
mod key_map;
mod rdev_backend;

pub(crate) use {
    enigo_injector::EnigoInjectorFactory,
    key_map::{button_from_rdev, key_from_rdev},
    rdev_backend::RdevBackend,
};
