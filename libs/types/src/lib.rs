//! # beacon-types
//!
//! Shared wire and domain types for the beacon feed platform.
//!
//! ## Design Principles
//!
//! - Types are shared verbatim between the feed server and its clients, so
//!   the wire format is defined once
//! - Identifiers are typed with strict parsing; a `TodoId` is always a
//!   positive integer once constructed
//! - Display concerns that must render identically everywhere (the badge
//!   cap) live here, not in any single view

mod counts;
mod error;
mod todo;

pub use counts::{badge_label, NotificationCounts, BADGE_CAP};
pub use error::TodoIdError;
pub use todo::{Todo, TodoId};
