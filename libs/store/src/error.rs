use thiserror::Error;

/// Errors from store subscriptions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The publishing side of the subscribed state has been dropped.
    #[error("state '{key}' is no longer being published")]
    Closed { key: String },
}
