//! Per-process record of attempted installs.

use std::cell::RefCell;
use std::collections::HashSet;

/// Companion specs the installer already attempted during this run.
///
/// Success and failure both count. Passed into the
/// [`Installer`](super::Installer) at construction so each test (or host
/// run) owns a fresh one. Interior mutability without a lock: the
/// installer is only ever driven from one thread.
#[derive(Debug, Default)]
pub struct InstallAttemptRegistry {
    attempted: RefCell<HashSet<String>>,
}

impl InstallAttemptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an attempt. Returns `false` when `spec` was already recorded.
    pub fn record(&self, spec: &str) -> bool {
        self.attempted.borrow_mut().insert(spec.to_string())
    }

    pub fn contains(&self, spec: &str) -> bool {
        self.attempted.borrow().contains(spec)
    }

    pub fn len(&self) -> usize {
        self.attempted.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.attempted.borrow().is_empty()
    }

    /// Forget every attempt.
    pub fn clear(&self) {
        self.attempted.borrow_mut().clear();
    }
}
