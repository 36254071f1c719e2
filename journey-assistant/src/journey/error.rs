//! Journey lookup error types.

use crate::resolve::ResolveError;
use crate::rmv::RmvError;

/// Errors from the end-to-end departure lookup.
///
/// Lower-level failures are wrapped with the stage they occurred in,
/// so the caller can tell a bad destination from a provider outage.
/// Only a transient provider failure (see [`RmvError::is_transient`])
/// is worth retrying; everything else is terminal for the invocation.
#[derive(Debug, thiserror::Error)]
pub enum JourneyError {
    /// The spoken destination did not resolve
    #[error("could not resolve destination: {0}")]
    DestinationResolution(#[source] ResolveError),

    /// The configured home station did not resolve
    #[error("could not resolve home station: {0}")]
    OriginResolution(#[source] ResolveError),

    /// The departure lookup itself failed
    #[error("departure lookup failed: {0}")]
    ProviderFailure(#[source] RmvError),

    /// The provider had no connection to offer
    #[error("no departure found")]
    NoDepartureFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failed_stage() {
        let err = JourneyError::DestinationResolution(ResolveError::NotFound {
            name: "Nirgendwo Frankfurt".to_string(),
        });
        assert!(err.to_string().contains("destination"));
        assert!(err.to_string().contains("Nirgendwo Frankfurt"));

        let err = JourneyError::OriginResolution(ResolveError::NotFound {
            name: "Hauptwache Frankfurt".to_string(),
        });
        assert!(err.to_string().contains("home station"));

        assert_eq!(
            JourneyError::NoDepartureFound.to_string(),
            "no departure found"
        );
    }
}
