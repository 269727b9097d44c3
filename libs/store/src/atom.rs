//! Atoms: named units of shared mutable state.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::debug;

use crate::error::StoreError;

/// A named unit of shared state.
///
/// Cloning an atom is cheap and yields another handle to the same state.
/// Writers use [`set`](Atom::set) or [`update`](Atom::update); readers
/// either [`get`](Atom::get) the current value or [`subscribe`](Atom::subscribe)
/// for change notification.
pub struct Atom<T> {
    inner: Arc<AtomInner<T>>,
}

struct AtomInner<T> {
    key: String,
    tx: watch::Sender<T>,
}

impl<T> Clone for Atom<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> Atom<T> {
    /// Creates an atom holding `default`.
    pub fn new(key: impl Into<String>, default: T) -> Self {
        let (tx, _rx) = watch::channel(default);
        Self {
            inner: Arc::new(AtomInner {
                key: key.into(),
                tx,
            }),
        }
    }

    /// The atom's key, used in logs and subscription errors.
    pub fn key(&self) -> &str {
        &self.inner.key
    }

    /// Returns a clone of the current value.
    pub fn get(&self) -> T {
        self.inner.tx.borrow().clone()
    }

    /// Replaces the value and wakes all subscribers.
    pub fn set(&self, value: T) {
        debug!(atom = %self.inner.key, "atom set");
        self.inner.tx.send_replace(value);
    }

    /// Mutates the value in place and wakes all subscribers.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        debug!(atom = %self.inner.key, "atom update");
        self.inner.tx.send_modify(f);
    }

    /// Subscribes to changes. The subscription starts at the current value.
    pub fn subscribe(&self) -> AtomSubscription<T> {
        AtomSubscription {
            key: self.inner.key.clone(),
            rx: self.inner.tx.subscribe(),
        }
    }
}

/// A change subscription on an [`Atom`].
///
/// Watch-based: [`changed`](AtomSubscription::changed) resolves with the
/// latest value, skipping intermediate writes a slow consumer missed.
pub struct AtomSubscription<T> {
    key: String,
    rx: watch::Receiver<T>,
}

impl<T: Clone> AtomSubscription<T> {
    /// Returns the current value without waiting.
    pub fn current(&self) -> T {
        self.rx.borrow().clone()
    }

    /// Waits for the next change and returns the new value.
    pub async fn changed(&mut self) -> Result<T, StoreError> {
        self.rx.changed().await.map_err(|_| StoreError::Closed {
            key: self.key.clone(),
        })?;
        Ok(self.rx.borrow_and_update().clone())
    }
}
