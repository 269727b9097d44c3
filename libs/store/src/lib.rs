//! # beacon-store
//!
//! Reactive client state primitives for the beacon platform.
//!
//! The store is deliberately explicit: there is no hidden dependency graph.
//! An [`Atom`] is a named unit of shared state, a [`Selector`] is a pure
//! derivation over one atom recomputed on every observed change, and an
//! [`AtomFamily`] is an explicit map from identifier to a cached
//! [`Loadable`] slot with in-flight request tracking, so concurrent loads
//! for the same identifier run a single fetch.
//!
//! Change propagation is watch-based: subscribers always observe the latest
//! value and never accumulate a backlog.

mod atom;
mod error;
mod family;
mod loadable;
mod selector;

pub use atom::{Atom, AtomSubscription};
pub use error::StoreError;
pub use family::{AtomFamily, FamilySubscription, Fetcher};
pub use loadable::Loadable;
pub use selector::{Selector, SelectorSubscription};
