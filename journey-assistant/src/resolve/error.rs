//! Station resolution error types.

use crate::rmv::RmvError;

/// Errors from resolving a station name to a concrete station.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The provider returned zero candidates
    #[error("no station matched '{name}'")]
    NotFound { name: String },

    /// The provider call failed transiently (network/auth/rate-limit)
    #[error("station lookup unavailable: {0}")]
    Unavailable(#[source] RmvError),

    /// The provider returned a malformed response
    #[error("malformed station lookup response: {0}")]
    Protocol(#[source] RmvError),
}

impl ResolveError {
    /// Classify a provider error into the resolution taxonomy.
    pub(crate) fn from_provider(err: RmvError) -> Self {
        if err.is_transient() {
            ResolveError::Unavailable(err)
        } else {
            ResolveError::Protocol(err)
        }
    }
}
