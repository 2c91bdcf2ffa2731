use thiserror::Error;

/// Node-set bookkeeping failures.
///
/// Each of these signals a violated internal invariant, not a transient
/// condition: the driver treats all of them as fatal to the current search
/// and never retries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    #[error("node set already holds its full capacity of live entries")]
    CapacityExceeded,
    #[error("no live entry at the requested position")]
    NotFound,
    #[error("extract from an empty node set")]
    EmptyCollection,
}
