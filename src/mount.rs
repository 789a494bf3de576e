// frontend_redirect/src/mount.rs
//! The mount-status collaborator: a single-writer boolean with subscriptions.

use std::cell::{Cell, RefCell};

/// Tracks whether a component is attached to a live rendering environment.
///
/// Starts `false`, flips to `true` at most once per component lifetime and
/// never reverts. Single-threaded: one writer (the rendering environment),
/// any number of read-only observers.
#[derive(Default)]
pub struct MountSignal {
    mounted: Cell<bool>,
    subscribers: RefCell<Vec<Box<dyn Fn(bool)>>>,
}

impl MountSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Register an observer to run on every change of the flag.
    pub fn subscribe(&self, observer: impl Fn(bool) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(observer));
    }

    /// Marks the component as live and notifies subscribers.
    ///
    /// Observers run only on the actual false-to-true change; calling this
    /// again while already mounted is a no-op.
    pub fn set_mounted(&self) {
        if self.mounted.replace(true) {
            return;
        }
        for observer in self.subscribers.borrow().iter() {
            observer(true);
        }
    }
}
