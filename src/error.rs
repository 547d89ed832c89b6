//! Error types for sequence construction and capability negotiation.

use thiserror::Error;

use crate::capability::Capability;

/// Result type alias for sequence operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `construct_empty` could not produce a fresh sequence
    #[error("sequence construction failed: {reason}")]
    Construction { reason: String },

    /// A combinator needed a capability the sequence does not provide
    #[error("`{operation}` requires the {capability} capability")]
    MissingCapability {
        capability: Capability,
        operation: &'static str,
    },
}

impl Error {
    pub fn construction(reason: impl Into<String>) -> Self {
        Error::Construction {
            reason: reason.into(),
        }
    }
}

/// Report a contract violation and abort the current combinator.
#[track_caller]
pub(crate) fn fatal(err: Error) -> ! {
    tracing::error!(target: "iterable::combinators", %err, "fatal sequence error");
    panic!("{err}")
}
