//! Change notification for the ledger
//!
//! Observers are plain zero-argument callbacks. They are told *that* the
//! ledger changed, never *what* changed; anything that needs details re-queries
//! the ledger once the mutating call has returned.

use std::fmt;

/// Handle returned on registration, used to remove the observer again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverHandle(u64);

type Callback = Box<dyn FnMut()>;

/// Ordered list of registered callbacks
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: u64,
    observers: Vec<(ObserverHandle, Callback)>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback; callbacks run in registration order
    pub fn register<F>(&mut self, callback: F) -> ObserverHandle
    where
        F: FnMut() + 'static,
    {
        let handle = ObserverHandle(self.next_id);
        self.next_id += 1;
        self.observers.push((handle, Box::new(callback)));
        handle
    }

    /// Remove a callback; returns false if the handle was not registered
    pub fn unregister(&mut self, handle: ObserverHandle) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(h, _)| *h != handle);
        self.observers.len() != before
    }

    /// Invoke every callback once, synchronously
    pub fn notify(&mut self) {
        for (_, callback) in self.observers.iter_mut() {
            callback();
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_notify_in_registration_order() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut registry = ObserverRegistry::new();

        for name in ["first", "second", "third"] {
            let calls = Rc::clone(&calls);
            registry.register(move || calls.borrow_mut().push(name));
        }

        registry.notify();
        assert_eq!(*calls.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_unregister() {
        let count = Rc::new(RefCell::new(0));
        let mut registry = ObserverRegistry::new();

        let c = Rc::clone(&count);
        let handle = registry.register(move || *c.borrow_mut() += 1);
        assert_eq!(registry.len(), 1);

        assert!(registry.unregister(handle));
        assert!(!registry.unregister(handle));
        assert!(registry.is_empty());

        registry.notify();
        assert_eq!(*count.borrow(), 0);
    }

    #[test]
    fn test_handles_are_unique() {
        let mut registry = ObserverRegistry::new();
        let a = registry.register(|| {});
        let b = registry.register(|| {});
        assert_ne!(a, b);
        assert!(registry.unregister(a));
        let c = registry.register(|| {});
        assert_ne!(a, c);
        assert_eq!(format!("{:?}", registry), "ObserverRegistry { observers: 2 }");
    }
}
