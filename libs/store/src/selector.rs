//! Selectors: derived values recomputed from a source atom.

use std::sync::Arc;

use crate::atom::{Atom, AtomSubscription};
use crate::error::StoreError;

/// A derived value over one source [`Atom`].
///
/// The derivation is a pure function invoked on every read and on every
/// observed change of the source. There is no caching and no dependency
/// graph; the source is named explicitly at construction.
pub struct Selector<T, U> {
    source: Atom<T>,
    derive: Arc<dyn Fn(&T) -> U + Send + Sync>,
}

impl<T, U> Clone for Selector<T, U> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            derive: Arc::clone(&self.derive),
        }
    }
}

impl<T, U> Selector<T, U>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a selector deriving from `source` via `derive`.
    pub fn new(source: Atom<T>, derive: impl Fn(&T) -> U + Send + Sync + 'static) -> Self {
        Self {
            source,
            derive: Arc::new(derive),
        }
    }

    /// Computes the derived value from the source's current value.
    pub fn get(&self) -> U {
        let value = self.source.get();
        (self.derive)(&value)
    }

    /// Subscribes to derived values as the source changes.
    pub fn subscribe(&self) -> SelectorSubscription<T, U> {
        SelectorSubscription {
            inner: self.source.subscribe(),
            derive: Arc::clone(&self.derive),
        }
    }
}

/// A change subscription yielding derived values.
pub struct SelectorSubscription<T, U> {
    inner: AtomSubscription<T>,
    derive: Arc<dyn Fn(&T) -> U + Send + Sync>,
}

impl<T: Clone, U> SelectorSubscription<T, U> {
    /// Returns the derived value for the source's current state.
    pub fn current(&self) -> U {
        let value = self.inner.current();
        (self.derive)(&value)
    }

    /// Waits for the next source change and returns the rederived value.
    pub async fn changed(&mut self) -> Result<U, StoreError> {
        let value = self.inner.changed().await?;
        Ok((self.derive)(&value))
    }
}
