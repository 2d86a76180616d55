use crate::{CoreResult, EventKind};

/// Synthesizes input indistinguishable from hardware input.
///
/// Platform injectors are usually not `Send`, so the replay thread builds
/// its own through an [`InjectorFactory`].
pub trait Injector {
    /// Inject one event. Errors are per-event and never fatal to a replay.
    fn inject(&mut self, kind: &EventKind) -> CoreResult<()>;
}

/// Builds an [`Injector`] on the thread that will use it.
pub trait InjectorFactory: Send + Sync {
    /// Create a fresh injector.
    fn create(&self) -> CoreResult<Box<dyn Injector>>;
}

impl<F> InjectorFactory for F
where
    F: Fn() -> CoreResult<Box<dyn Injector>> + Send + Sync,
{
    fn create(&self) -> CoreResult<Box<dyn Injector>> {
        self()
    }
}
