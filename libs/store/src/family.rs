//! Atom families: keyed async state with cached slots and in-flight
//! request tracking.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::loadable::Loadable;

/// The async seam an [`AtomFamily`] loads values through.
///
/// Production implementations wrap an HTTP client; tests use in-crate fakes.
#[async_trait]
pub trait Fetcher<K>: Send + Sync + 'static {
    /// The value type produced for each key.
    type Output: Clone + Send + Sync + 'static;

    /// Fetches the value for `key`.
    async fn fetch(&self, key: &K) -> anyhow::Result<Self::Output>;
}

/// A parametrized collection of async state slots keyed by identifier.
///
/// Each key maps to one cached [`Loadable`] slot. [`load`](AtomFamily::load)
/// spawns a fetch only when the key has no slot yet; concurrent loads for
/// the same key share the single in-flight request. [`set`](AtomFamily::set)
/// overwrites a slot locally without any fetch, and
/// [`invalidate`](AtomFamily::invalidate) drops the slot and aborts an
/// in-flight fetch.
///
/// Slots carry a generation stamp so that a fetch completing after the slot
/// was overwritten or invalidated cannot clobber newer state.
pub struct AtomFamily<K, F: Fetcher<K>> {
    inner: Arc<FamilyInner<K, F>>,
}

impl<K, F: Fetcher<K>> Clone for AtomFamily<K, F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct FamilyInner<K, F: Fetcher<K>> {
    name: String,
    fetcher: F,
    next_generation: AtomicU64,
    slots: Mutex<HashMap<K, Slot<F::Output>>>,
}

struct Slot<T> {
    generation: u64,
    tx: watch::Sender<Loadable<T>>,
    inflight: Option<JoinHandle<()>>,
}

impl<K, F> AtomFamily<K, F>
where
    K: Clone + Eq + Hash + Display + Send + Sync + 'static,
    F: Fetcher<K>,
{
    /// Creates a family loading through `fetcher`.
    pub fn new(name: impl Into<String>, fetcher: F) -> Self {
        Self {
            inner: Arc::new(FamilyInner {
                name: name.into(),
                fetcher,
                next_generation: AtomicU64::new(0),
                slots: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Subscribes to the slot for `key`, fetching it if needed.
    ///
    /// If the key already has a slot (loading, ready, or failed) the
    /// existing slot is reused and no second fetch is started. To retry a
    /// failed load, [`invalidate`](AtomFamily::invalidate) first.
    ///
    /// Must be called from within a Tokio runtime; the fetch runs as a
    /// spawned task.
    pub fn load(&self, key: K) -> FamilySubscription<F::Output> {
        let mut slots = lock(&self.inner.slots);

        if let Some(slot) = slots.get(&key) {
            debug!(
                family = %self.inner.name,
                key = %key,
                phase = slot.tx.borrow().phase(),
                "reusing cached slot"
            );
            return self.subscription(&key, &slot.tx);
        }

        let generation = self.bump_generation();
        let (tx, _rx) = watch::channel(Loadable::Loading);
        debug!(family = %self.inner.name, key = %key, "starting fetch");

        let inflight = tokio::spawn(run_fetch(
            Arc::clone(&self.inner),
            key.clone(),
            generation,
        ));

        let subscription = self.subscription(&key, &tx);
        slots.insert(
            key,
            Slot {
                generation,
                tx,
                inflight: Some(inflight),
            },
        );
        subscription
    }

    /// Overwrites the slot for `key` with a locally produced value.
    ///
    /// No fetch is performed; an in-flight fetch for the key is aborted so
    /// its late result cannot replace this value. Subscribers observe the
    /// new value immediately.
    pub fn set(&self, key: K, value: F::Output) {
        let mut slots = lock(&self.inner.slots);
        let generation = self.bump_generation();

        match slots.get_mut(&key) {
            Some(slot) => {
                if let Some(handle) = slot.inflight.take() {
                    handle.abort();
                }
                slot.generation = generation;
                slot.tx.send_replace(Loadable::Ready(value));
            }
            None => {
                let (tx, _rx) = watch::channel(Loadable::Ready(value));
                slots.insert(
                    key,
                    Slot {
                        generation,
                        tx,
                        inflight: None,
                    },
                );
            }
        }
    }

    /// Drops the slot for `key`, aborting an in-flight fetch.
    ///
    /// Existing subscriptions for the key observe
    /// [`StoreError::Closed`] on their next wait. Returns whether a slot
    /// existed.
    pub fn invalidate(&self, key: &K) -> bool {
        let mut slots = lock(&self.inner.slots);
        match slots.remove(key) {
            Some(mut slot) => {
                if let Some(handle) = slot.inflight.take() {
                    handle.abort();
                }
                debug!(family = %self.inner.name, key = %key, "slot invalidated");
                true
            }
            None => false,
        }
    }

    /// Returns the current phase for `key` without fetching.
    pub fn peek(&self, key: &K) -> Option<Loadable<F::Output>> {
        let slots = lock(&self.inner.slots);
        slots.get(key).map(|slot| slot.tx.borrow().clone())
    }

    fn bump_generation(&self) -> u64 {
        self.inner.next_generation.fetch_add(1, Ordering::Relaxed)
    }

    fn subscription(
        &self,
        key: &K,
        tx: &watch::Sender<Loadable<F::Output>>,
    ) -> FamilySubscription<F::Output> {
        FamilySubscription {
            key: format!("{}/{}", self.inner.name, key),
            rx: tx.subscribe(),
        }
    }
}

async fn run_fetch<K, F>(inner: Arc<FamilyInner<K, F>>, key: K, generation: u64)
where
    K: Clone + Eq + Hash + Display + Send + Sync + 'static,
    F: Fetcher<K>,
{
    let next = match inner.fetcher.fetch(&key).await {
        Ok(value) => Loadable::Ready(value),
        Err(error) => {
            warn!(family = %inner.name, key = %key, error = %error, "fetch failed");
            Loadable::Failed(error.to_string())
        }
    };

    let mut slots = lock(&inner.slots);
    match slots.get_mut(&key) {
        // Only the generation that spawned this fetch may publish; the slot
        // may have been overwritten or replaced while we were fetching.
        Some(slot) if slot.generation == generation => {
            slot.inflight = None;
            slot.tx.send_replace(next);
        }
        _ => {
            debug!(family = %inner.name, key = %key, "discarding stale fetch result");
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    // The map is only touched synchronously; a poisoned lock still holds
    // consistent data.
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A subscription to one keyed slot of an [`AtomFamily`].
pub struct FamilySubscription<T> {
    key: String,
    rx: watch::Receiver<Loadable<T>>,
}

impl<T: Clone> FamilySubscription<T> {
    /// Returns the current phase without waiting.
    pub fn current(&self) -> Loadable<T> {
        self.rx.borrow().clone()
    }

    /// Waits for the next phase change.
    pub async fn changed(&mut self) -> Result<Loadable<T>, StoreError> {
        self.rx.changed().await.map_err(|_| StoreError::Closed {
            key: self.key.clone(),
        })?;
        Ok(self.rx.borrow_and_update().clone())
    }

    /// Waits until the slot leaves the loading phase.
    ///
    /// Returns immediately if the slot is already ready or failed.
    pub async fn settled(&mut self) -> Result<Loadable<T>, StoreError> {
        loop {
            let current = self.current();
            if !current.is_loading() {
                return Ok(current);
            }
            self.changed().await?;
        }
    }
}
