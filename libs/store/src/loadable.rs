//! Loadables: the phase wrapper for asynchronously loaded values.

/// The phase of an asynchronously loaded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loadable<T> {
    /// The fetch is still outstanding.
    Loading,
    /// The value arrived.
    Ready(T),
    /// The fetch failed; carries a display-ready message.
    Failed(String),
}

impl<T> Loadable<T> {
    /// True while the fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    /// The value, if the load has completed successfully.
    pub fn ready(&self) -> Option<&T> {
        match self {
            Loadable::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if the load failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Phase name for logs and placeholder rendering.
    pub fn phase(&self) -> &'static str {
        match self {
            Loadable::Loading => "loading",
            Loadable::Ready(_) => "ready",
            Loadable::Failed(_) => "failed",
        }
    }

    /// Maps the ready value, leaving other phases untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Loadable::Loading => Loadable::Loading,
            Loadable::Ready(value) => Loadable::Ready(f(value)),
            Loadable::Failed(message) => Loadable::Failed(message),
        }
    }
}
