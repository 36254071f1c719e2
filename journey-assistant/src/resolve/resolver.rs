//! Station resolution.

use std::future::Future;

use tracing::debug;

use crate::domain::StationCandidate;
use crate::rmv::RmvError;

use super::error::ResolveError;
use super::normalize::StationQuery;

/// Trait for providing station search.
///
/// This abstraction allows the resolver to be tested with mock data.
pub trait StationSearch {
    /// Search stations by free-text name.
    ///
    /// Returns candidates in the provider's own relevance order.
    fn search_stations(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<StationCandidate>, RmvError>>;
}

/// Resolves a station query to a single concrete station.
///
/// Selection policy: always the first candidate the provider returned.
/// This trades recall for predictability; disambiguation is the
/// caller's job, via the spoken query or the home-city configuration.
/// No retries happen here — retry policy belongs to an outer layer.
pub struct StationResolver<'a, P: StationSearch> {
    provider: &'a P,
}

impl<'a, P: StationSearch> StationResolver<'a, P> {
    /// Create a new resolver.
    pub fn new(provider: &'a P) -> Self {
        Self { provider }
    }

    /// Resolve a query to the provider's best match.
    pub async fn resolve(&self, query: &StationQuery) -> Result<StationCandidate, ResolveError> {
        let candidates = self
            .provider
            .search_stations(query.effective())
            .await
            .map_err(ResolveError::from_provider)?;

        debug!(
            name = query.effective(),
            candidates = candidates.len(),
            "station search"
        );

        candidates
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::NotFound {
                name: query.effective().to_string(),
            })
    }
}
