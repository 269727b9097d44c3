//! Application state shared across request handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::fixtures::FixtureSet;

/// Shared application state.
///
/// This is passed to all request handlers via Axum's state extractor.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    fixtures: FixtureSet,
    todo_delay: Option<Duration>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(fixtures: FixtureSet, todo_delay: Option<Duration>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                fixtures,
                todo_delay,
            }),
        }
    }

    /// Get a reference to the fixture set.
    pub fn fixtures(&self) -> &FixtureSet {
        &self.inner.fixtures
    }

    /// Artificial latency for todo lookups, if configured.
    pub fn todo_delay(&self) -> Option<Duration> {
        self.inner.todo_delay
    }
}
