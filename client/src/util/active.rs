//! Late-response guard for component-owned async work.
//!
//! A component creates an [`ActiveFlag`], clears it in `on_cleanup`, and
//! checks it before writing a response into its signals. The request itself
//! is left to finish.

#[cfg(test)]
#[path = "active_test.rs"]
mod active_test;

use std::sync::{Arc, Mutex, PoisonError};
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct ActiveFlag(Arc<AtomicBool>);

impl Default for ActiveFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_active(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn deactivate(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while still active. Returns whether it ran.
    pub fn commit(&self, apply: impl FnOnce()) -> bool {
        if !self.is_active() {
            log::debug!("dropping late response for unmounted component");
            return false;
        }
        apply();
        true
    }
}

/// One [`ActiveFlag`] per in-flight request for components that refetch when
/// their inputs change. Renewing deactivates the previous request's flag.
#[derive(Clone, Debug, Default)]
pub struct ActiveSlot(Arc<Mutex<ActiveFlag>>);

impl ActiveSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retire the current request and hand out the flag for the next one.
    pub fn renew(&self) -> ActiveFlag {
        let fresh = ActiveFlag::new();
        let mut current = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        current.deactivate();
        *current = fresh.clone();
        fresh
    }

    pub fn deactivate(&self) {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).deactivate();
    }
}
