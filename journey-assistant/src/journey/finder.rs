//! Departure lookup orchestration.
//!
//! Drives the linear pipeline behind one voice intent: normalize the
//! spoken destination, resolve destination and home station, build the
//! trip request, ask the provider, take the first connection.

use std::future::Future;

use chrono::{Local, NaiveTime};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::config::HomeConfiguration;
use crate::domain::{Journey, JourneyRequest, JourneyResult, StationCandidate};
use crate::resolve::{StationQuery, StationResolver, StationSearch};
use crate::rmv::RmvError;

use super::error::JourneyError;

/// Trait for providing trip lookup.
///
/// This abstraction allows the finder to be tested with mock data.
pub trait TripSearch {
    /// Look up connections for a fully-resolved request.
    ///
    /// Returns journeys in provider order; an absent requested time
    /// means "depart now".
    fn search_trips(
        &self,
        request: &JourneyRequest,
    ) -> impl Future<Output = Result<Vec<Journey>, RmvError>>;
}

/// Finds the next departure from the configured home station.
///
/// Holds the provider and the immutable [`HomeConfiguration`]; no
/// ambient state is consulted. The resolved home station is cached for
/// the process lifetime with compute-once-then-share semantics —
/// concurrent first calls may race to resolve it, but only one result
/// is kept and a failed attempt is retried on the next invocation.
pub struct DepartureFinder<P> {
    provider: P,
    config: HomeConfiguration,
    home_station: OnceCell<StationCandidate>,
}

impl<P: StationSearch + TripSearch> DepartureFinder<P> {
    /// Create a new finder.
    pub fn new(provider: P, config: HomeConfiguration) -> Self {
        Self {
            provider,
            config,
            home_station: OnceCell::new(),
        }
    }

    /// The configuration this finder was built with.
    pub fn config(&self) -> &HomeConfiguration {
        &self.config
    }

    /// Find the next departure towards a spoken destination.
    ///
    /// The pipeline exits early on the first failure; in particular no
    /// trip lookup is issued when the destination does not resolve.
    pub async fn find_next_departure(
        &self,
        destination_text: &str,
        requested_time: Option<NaiveTime>,
    ) -> Result<JourneyResult, JourneyError> {
        let resolver = StationResolver::new(&self.provider);

        let destination_query = StationQuery::destination(destination_text, &self.config);
        debug!(
            raw = destination_query.raw(),
            effective = destination_query.effective(),
            "resolving destination"
        );

        let destination = resolver
            .resolve(&destination_query)
            .await
            .map_err(JourneyError::DestinationResolution)?;

        let origin = self.home_station(&resolver).await?;

        let requested_time = requested_time.or_else(|| self.default_departure_time());
        let request = JourneyRequest::new(origin, &destination, requested_time);

        debug!(
            origin = %request.origin(),
            destination = %request.destination(),
            "searching trips"
        );

        let trips = self
            .provider
            .search_trips(&request)
            .await
            .map_err(JourneyError::ProviderFailure)?;

        // First connection wins; the provider already ordered them.
        let journey = trips
            .into_iter()
            .next()
            .ok_or(JourneyError::NoDepartureFound)?;

        Ok(JourneyResult::from_journey(journey))
    }

    /// Resolve the home station, reusing the cached result when present.
    async fn home_station(
        &self,
        resolver: &StationResolver<'_, P>,
    ) -> Result<&StationCandidate, JourneyError> {
        self.home_station
            .get_or_try_init(|| async {
                let query = StationQuery::home(&self.config);
                debug!(effective = query.effective(), "resolving home station");
                resolver
                    .resolve(&query)
                    .await
                    .map_err(JourneyError::OriginResolution)
            })
            .await
    }

    /// Departure time to use when the intent carried none.
    ///
    /// With a configured offset the query asks for "now + offset"
    /// (time to walk to the station); otherwise the request stays
    /// unconstrained and the provider answers for "now".
    fn default_departure_time(&self) -> Option<NaiveTime> {
        let offset = self.config.time_offset?;
        Some((Local::now() + chrono::Duration::minutes(offset)).time())
    }
}
