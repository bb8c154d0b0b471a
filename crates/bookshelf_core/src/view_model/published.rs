//! Observable value holder.
//!
//! # Invariants
//! - New subscribers receive the current value immediately.
//! - Observers are notified once per value change, in subscription order.
//! - Setting a value equal to the current one does not notify.

use std::fmt::{Debug, Formatter};

/// Handle returned by `Published::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer<T> = Box<dyn FnMut(&T)>;

/// Value holder that notifies registered observers on every change.
pub struct Published<T> {
    value: T,
    next_id: u64,
    observers: Vec<(SubscriptionId, Observer<T>)>,
}

impl<T: PartialEq> Published<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            observers: Vec::new(),
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value and notifies observers when it differs.
    ///
    /// Returns whether the value changed.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.value);
        }
        true
    }

    /// Registers `observer` and immediately calls it with the current value.
    pub fn subscribe(&mut self, mut observer: impl FnMut(&T) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        observer(&self.value);
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a subscription. Returns `false` if `id` is not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }
}

impl<T: PartialEq + Default> Default for Published<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Debug> Debug for Published<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Published")
            .field("value", &self.value)
            .field("subscribers", &self.observers.len())
            .finish()
    }
}
