//! Copy-on-write state container with subscriber notification
//!
//! `StateCell` is the reactive primitive behind the tracker: it holds an
//! immutable snapshot behind an `Arc`, and every mutation clones the value,
//! applies the change, swaps the snapshot in, and synchronously notifies
//! subscribers in registration order. Readers holding a snapshot always see
//! one committed state, never a partial update.

use std::sync::{Arc, RwLock};

type Listener<T> = Box<dyn Fn(&T) + Send + Sync>;

/// A reactive container for an immutable snapshot of `T`
pub struct StateCell<T> {
    value: RwLock<Arc<T>>,
    listeners: RwLock<Vec<Listener<T>>>,
}

impl<T: Clone> StateCell<T> {
    /// Create a new cell holding `initial`
    pub fn new(initial: T) -> Self {
        Self {
            value: RwLock::new(Arc::new(initial)),
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Get the current snapshot
    pub fn snapshot(&self) -> Arc<T> {
        // A poisoned lock only means a panic mid-read elsewhere; the
        // snapshot Arc itself is always consistent.
        let guard = self.value.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Replace the value wholesale and notify subscribers
    pub fn set(&self, value: T) {
        let next = Arc::new(value);
        {
            let mut guard = self.value.write().unwrap_or_else(|e| e.into_inner());
            *guard = Arc::clone(&next);
        }
        self.notify(&next);
    }

    /// Mutate a copy of the current value, commit it, and notify subscribers
    ///
    /// The write lock is released before listeners run, so a listener may
    /// read the cell it was notified from.
    pub fn mutate<F: FnOnce(&mut T)>(&self, f: F) {
        let next = {
            let mut guard = self.value.write().unwrap_or_else(|e| e.into_inner());
            let mut next = (**guard).clone();
            f(&mut next);
            let next = Arc::new(next);
            *guard = Arc::clone(&next);
            next
        };
        self.notify(&next);
    }

    /// Register a listener invoked synchronously after every commit, in
    /// registration order
    pub fn subscribe(&self, listener: impl Fn(&T) + Send + Sync + 'static) {
        let mut listeners = self.listeners.write().unwrap_or_else(|e| e.into_inner());
        listeners.push(Box::new(listener));
    }

    fn notify(&self, value: &T) {
        let listeners = self.listeners.read().unwrap_or_else(|e| e.into_inner());
        for listener in listeners.iter() {
            listener(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_snapshot_reflects_set() {
        let cell = StateCell::new(1);
        assert_eq!(*cell.snapshot(), 1);

        cell.set(5);
        assert_eq!(*cell.snapshot(), 5);
    }

    #[test]
    fn test_mutate_produces_new_snapshot() {
        let cell = StateCell::new(vec![1, 2]);
        let before = cell.snapshot();

        cell.mutate(|v| v.push(3));

        assert_eq!(*before, vec![1, 2]);
        assert_eq!(*cell.snapshot(), vec![1, 2, 3]);
    }

    #[test]
    fn test_listeners_run_in_registration_order() {
        let cell = Arc::new(StateCell::new(0));
        let order = Arc::new(RwLock::new(Vec::new()));

        for tag in ["first", "second"] {
            let order = Arc::clone(&order);
            cell.subscribe(move |_| order.write().unwrap().push(tag));
        }

        cell.set(1);
        assert_eq!(*order.read().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn test_listener_sees_committed_value() {
        let cell = Arc::new(StateCell::new(0));
        let seen = Arc::new(AtomicUsize::new(0));

        let cell_ref = Arc::clone(&cell);
        let seen_ref = Arc::clone(&seen);
        cell.subscribe(move |value| {
            // Reading back from the cell inside a listener must not deadlock
            assert_eq!(*cell_ref.snapshot(), *value);
            seen_ref.store(*value, Ordering::SeqCst);
        });

        cell.mutate(|v| *v = 42);
        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }
}
