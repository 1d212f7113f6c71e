/// Lifecycle of an on-demand module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState<T> {
    NotRequested,
    Pending,
    Ready(T),
    Failed(String),
}

/// Capability that starts producing a module when first requested.
///
/// The shell injects a loader that spawns the real (delayed) construction;
/// tests inject synchronous or counting loaders. Delivery happens out of
/// band through [`LazyModule::complete`] / [`LazyModule::fail`].
pub trait ModuleLoader {
    fn begin(&mut self);
}

/// Deferred handle for a lazily-loaded destination.
///
/// `request` is triggered only on first navigation — never prefetched — and
/// has no effect once the handle has left `NotRequested`. A failed load stays
/// failed; retrying is out of scope for the composer.
pub struct LazyModule<T> {
    state: LoadState<T>,
}

impl<T> LazyModule<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::NotRequested,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    /// Kick the loader if this is the first request. Returns true when the
    /// loader was actually started.
    pub fn request<L: ModuleLoader + ?Sized>(&mut self, loader: &mut L) -> bool {
        if !matches!(self.state, LoadState::NotRequested) {
            return false;
        }
        self.state = LoadState::Pending;
        loader.begin();
        true
    }

    /// Deliver the loaded module. Ignored unless a load is pending.
    pub fn complete(&mut self, module: T) {
        if matches!(self.state, LoadState::Pending) {
            self.state = LoadState::Ready(module);
        }
    }

    /// Record a load failure. Ignored unless a load is pending.
    pub fn fail(&mut self, error: impl Into<String>) {
        if matches!(self.state, LoadState::Pending) {
            self.state = LoadState::Failed(error.into());
        }
    }
}

impl<T> Default for LazyModule<T> {
    fn default() -> Self {
        Self::new()
    }
}
