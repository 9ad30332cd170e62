// ============================================================================
// REACTIVITY - Subscriber/notification system
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Reactive value: every clone shares the value and the subscriber list
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Callback>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Set a new value and notify subscribers
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Snapshot first: a callback may subscribe or read the value again
        let callbacks: Vec<Callback> = self.subscribers.borrow().clone();
        for callback in callbacks {
            callback();
        }
    }
}

impl<T: Clone> ReactiveState<T> {
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

/// Request generation token. Only the newest one issued may apply its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RefreshToken(u64);

#[derive(Debug, Clone, Default)]
pub struct GenerationCounter {
    latest: Rc<Cell<u64>>,
}

impl GenerationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> RefreshToken {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        RefreshToken(next)
    }

    pub fn is_current(&self, token: RefreshToken) -> bool {
        self.latest.get() == token.0
    }
}
