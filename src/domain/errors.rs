//! Domain errors for the catalog pipeline.

use thiserror::Error;

/// Errors surfaced by catalog acquisition, hydration and lookup.
///
/// Remote protocol detail never leaks past this type: adapters reduce
/// transport, status and decoding problems to a message string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DexError {
    /// Network unreachable, non-success status, or an undecodable body.
    #[error("Transport failure: {0}")]
    TransportFailure(String),

    /// The list endpoint answered successfully but with zero entries.
    #[error("Catalog index is empty")]
    EmptyCatalog,

    /// A single record could not be resolved by id or name.
    #[error("Record {key} unavailable: {reason}")]
    RecordUnavailable { key: String, reason: String },

    /// A configured deadline elapsed before the operation finished.
    #[error("Timed out: {0}")]
    Timeout(String),

    /// The remote record violated a domain invariant (e.g. id 0).
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
}

/// Result alias over [`DexError`].
pub type DexResult<T> = Result<T, DexError>;

impl DexError {
    /// Build a `RecordUnavailable` for the given lookup key.
    pub fn unavailable(key: impl ToString, reason: impl Into<String>) -> Self {
        Self::RecordUnavailable {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    /// True for `TransportFailure`.
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::TransportFailure(_))
    }

    /// True for every error that means "this one record could not be had".
    ///
    /// Timeouts and invalid records count, since the hydrator handles
    /// all of them the same way.
    pub const fn is_record_unavailable(&self) -> bool {
        matches!(
            self,
            Self::RecordUnavailable { .. } | Self::Timeout(_) | Self::InvalidRecord(_)
        )
    }
}
