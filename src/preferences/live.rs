// ABOUTME: Live document primitive: a value with get/set/update and change subscriptions
// ABOUTME: Callbacks fire immediately with the current value and again after every write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

//! A [`LiveDocument`] holds one value in a `tokio::sync::watch` channel.
//! Synchronous listeners register with [`LiveDocument::subscribe`]; async
//! consumers can take a [`watch::Receiver`] from [`LiveDocument::watch`].
//! Either way the consumer sees the latest value, never a stale queue.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use dashmap::DashMap;
use tokio::sync::watch;

/// Change callback
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct Shared<T> {
    sender: watch::Sender<T>,
    listeners: DashMap<u64, Listener<T>>,
    next_id: AtomicU64,
}

/// A shared value whose writes are pushed to subscribers
pub struct LiveDocument<T> {
    shared: Arc<Shared<T>>,
}

impl<T> Clone for LiveDocument<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T: Default + Clone + Send + Sync + 'static> Default for LiveDocument<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for LiveDocument<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveDocument")
            .field("value", &*self.shared.sender.borrow())
            .field("listeners", &self.shared.listeners.len())
            .finish()
    }
}

impl<T: Clone + Send + Sync + 'static> LiveDocument<T> {
    /// Create a document holding `initial`
    #[must_use]
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            shared: Arc::new(Shared {
                sender,
                listeners: DashMap::new(),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current value
    #[must_use]
    pub fn get(&self) -> T {
        self.shared.sender.borrow().clone()
    }

    /// Replace the value and notify subscribers
    pub fn set(&self, value: T) {
        self.shared.sender.send_replace(value);
        self.notify();
    }

    /// Modify the value in place, notify subscribers, and return the new value
    pub fn update(&self, modify: impl FnOnce(&mut T)) -> T {
        self.shared.sender.send_modify(modify);
        self.notify();
        self.get()
    }

    /// Register `listener`, call it with the current value, and keep calling
    /// it after every write until the returned [`Subscription`] is dropped
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: Listener<T>) -> Subscription {
        let id = self.shared.next_id.fetch_add(1, Ordering::Relaxed);
        self.shared.listeners.insert(id, Arc::clone(&listener));
        listener(&self.get());

        let weak: Weak<Shared<T>> = Arc::downgrade(&self.shared);
        Subscription::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.listeners.remove(&id);
            }
        })
    }

    /// Receiver that always observes the latest value
    #[must_use]
    pub fn watch(&self) -> watch::Receiver<T> {
        self.shared.sender.subscribe()
    }

    /// Number of registered callbacks
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.shared.listeners.len()
    }

    fn notify(&self) {
        // Listeners may unsubscribe from inside the callback, so no map
        // guard is held while they run.
        let listeners: Vec<Listener<T>> = self
            .shared
            .listeners
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        if listeners.is_empty() {
            return;
        }
        let value = self.get();
        for listener in listeners {
            listener(&value);
        }
    }
}

/// Handle to a live subscription
///
/// Dropping the handle, or calling [`Subscription::unsubscribe`], stops
/// delivery.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    /// Wrap a cancellation action
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Subscription that was never attached to anything
    #[must_use]
    pub fn detached() -> Self {
        Self { cancel: None }
    }

    /// Stop delivery now
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    /// Whether delivery is still active
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.cancel.is_some()
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}
