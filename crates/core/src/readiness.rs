//! Process readiness flag consumed by the `/readyz` endpoint.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A shared boolean that starts unset and can be set exactly once.
///
/// Cloning shares the same underlying cell.
#[derive(Debug, Clone, Default)]
pub struct ReadinessFlag {
    ready: Arc<AtomicBool>,
}

impl ReadinessFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Mark the process as ready.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub fn mark_ready(&self) -> bool {
        self.ready
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
