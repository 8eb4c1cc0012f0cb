//! The observable state container.
//!
//! Holds the single authoritative copy of a state slice and applies
//! reducer transitions one at a time. Subscribers are notified
//! synchronously, in dispatch order, whenever a transition actually
//! changes the state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

use super::reducer::Reducer;

type Listener<S> = Box<dyn Fn(&S) + Send>;

struct Inner<R: Reducer> {
    state: Mutex<R::State>,
    listeners: Arc<Mutex<Vec<(u64, Listener<R::State>)>>>,
    next_listener_id: AtomicU64,
    /// Serializes dispatches end-to-end (transition + notification),
    /// so notification order always equals dispatch order.
    dispatch_lock: Mutex<()>,
}

/// Observable container for one state slice.
///
/// Cloning the store produces another handle to the same state;
/// all handles share subscribers and ordering guarantees.
///
/// Dispatch is non-reentrant: listeners must not dispatch back into
/// the same store from inside their callback.
pub struct Store<R: Reducer> {
    inner: Arc<Inner<R>>,
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reducer> Store<R> {
    /// Create a store holding the slice's default state.
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    /// Create a store with an explicit initial state.
    pub fn with_state(state: R::State) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(state),
                listeners: Arc::new(Mutex::new(Vec::new())),
                next_listener_id: AtomicU64::new(0),
                dispatch_lock: Mutex::new(()),
            }),
        }
    }

    /// Get a clone of the current state.
    pub fn state(&self) -> R::State {
        self.inner.state.lock().clone()
    }

    /// Apply an intent through the reducer.
    ///
    /// Listeners run synchronously on the dispatching thread, after the
    /// state swap, and only when the resulting state differs from the
    /// previous one. Dispatch never fails; a transition that produces an
    /// equal state is a silent no-op.
    pub fn dispatch(&self, intent: R::Intent) {
        let _ordered = self.inner.dispatch_lock.lock();

        let changed = {
            let mut state = self.inner.state.lock();
            let next = R::reduce(state.clone(), intent);
            if next == *state {
                None
            } else {
                *state = next.clone();
                Some(next)
            }
        };

        if let Some(next) = changed {
            let listeners = self.inner.listeners.lock();
            for (_, listener) in listeners.iter() {
                listener(&next);
            }
        }
    }

    /// Register a listener invoked after every state-changing dispatch.
    ///
    /// The listener stays registered until the returned [`Subscription`]
    /// is cancelled or dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&R::State) + Send + 'static,
    {
        let id = self.inner.next_listener_id.fetch_add(1, Ordering::Relaxed);
        self.inner.listeners.lock().push((id, Box::new(listener)));

        let listeners = Arc::clone(&self.inner.listeners);
        Subscription {
            cancel: Some(Box::new(move || {
                listeners.lock().retain(|(entry_id, _)| *entry_id != id);
            })),
        }
    }
}

/// Handle to a registered listener.
///
/// Dropping the handle unregisters the listener.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    /// Unregister the listener now.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}
