use thiserror::Error;

/// Configuration rejected at construction time.
///
/// Fatal for the constructing call only: `Recycler::new` builds nothing, `Recycler::reinit`
/// leaves the prior state intact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("cell extent must be finite and positive")]
    NonPositiveCellExtent,
    #[error("spacing must be finite and non-negative")]
    NegativeSpacing,
    #[error("viewport extent must be finite and positive")]
    NonPositiveViewport,
}

/// A removal request that could not be honored.
///
/// Not a fatal fault: the operation mutates nothing and the caller may ignore the error after
/// the diagnostic has been logged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RemoveError {
    /// The requested logical index is not currently bound to any pool cell. Callers must only
    /// remove indices that are materialized.
    #[error("logical index {index} is not materialized in the cell pool")]
    IndexNotFound { index: i64 },
}
