use std::cell::Cell;
use std::rc::Rc;

/// Liveness flag shared between a hook's DOM callbacks and its cleanup.
///
/// Browsers may still deliver an event or animation frame that was queued
/// before the listener was removed. Cleanup calls [`MountGuard::release`]
/// and every callback checks [`MountGuard::is_live`] first, so nothing is
/// mutated once the owning component is gone.
#[derive(Clone, Debug)]
pub struct MountGuard(Rc<Cell<bool>>);

impl MountGuard {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_live(&self) -> bool {
        self.0.get()
    }

    pub fn release(&self) {
        self.0.set(false);
    }

    /// Runs `f` only while mounted. Returns whether it ran.
    pub fn run<F: FnOnce()>(&self, f: F) -> bool {
        if self.is_live() {
            f();
            true
        } else {
            false
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_liveness() {
        let guard = MountGuard::new();
        let in_callback = guard.clone();
        assert!(in_callback.is_live());
        guard.release();
        assert!(!in_callback.is_live());
    }

    #[test]
    fn test_no_mutation_after_release() {
        let guard = MountGuard::new();
        let hits = Cell::new(0);

        assert!(guard.run(|| hits.set(hits.get() + 1)));
        guard.release();
        // Events keep firing after unmount
        for _ in 0..5 {
            assert!(!guard.run(|| hits.set(hits.get() + 1)));
        }
        assert_eq!(hits.get(), 1);
    }
}
