//! Synchronous change notification
//!
//! [`Emitter`] keeps an ordered list of listeners and calls every listener
//! subscribed at the moment of [`Emitter::fire`], in subscription order, before
//! `fire` returns. Listeners run outside the emitter's lock, so a listener may
//! subscribe, unsubscribe or fire again without deadlocking.

use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Callback invoked with each fired value
pub type Listener<T> = Arc<dyn Fn(&T) + Send + Sync>;

struct EmitterInner<T> {
    listeners: Mutex<Vec<(u64, Listener<T>)>>,
    next_id: AtomicU64,
    disposed: AtomicBool,
}

impl<T> EmitterInner<T> {
    fn remove(&self, id: u64) {
        self.listeners.lock().retain(|(listener_id, _)| *listener_id != id);
    }
}

pub struct Emitter<T> {
    inner: Arc<EmitterInner<T>>,
}

impl<T: 'static> Emitter<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(EmitterInner {
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
                disposed: AtomicBool::new(false),
            }),
        }
    }

    /// Register a listener. It stays registered until the returned
    /// [`Subscription`] is dropped or the emitter is disposed.
    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribe_arc(Arc::new(listener))
    }

    #[must_use = "dropping the subscription unsubscribes the listener"]
    pub fn subscribe_arc(&self, listener: Listener<T>) -> Subscription {
        if self.inner.disposed.load(Ordering::Acquire) {
            return Subscription::empty();
        }

        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, listener));

        let weak: Weak<EmitterInner<T>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.remove(id);
            }
        })
    }

    /// Deliver `value` to every current listener, in subscription order
    pub fn fire(&self, value: &T) {
        if self.inner.disposed.load(Ordering::Acquire) {
            return;
        }

        let snapshot: Vec<Listener<T>> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(value);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.lock().len()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.load(Ordering::Acquire)
    }

    /// Drop every listener. Later `fire` and `subscribe` calls are no-ops.
    pub fn dispose(&self) {
        self.inner.disposed.store(true, Ordering::Release);
        self.inner.listeners.lock().clear();
    }
}

/// Clones share the same listener list
impl<T> Clone for Emitter<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: 'static> Default for Emitter<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII handle for a registered listener.
///
/// Dropping it unsubscribes; [`Subscription::detach`] keeps the listener
/// registered for the emitter's lifetime.
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    fn new(unsubscribe: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// A subscription that is not attached to anything
    pub fn empty() -> Self {
        Self { unsubscribe: None }
    }

    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("attached", &self.unsubscribe.is_some())
            .finish()
    }
}
