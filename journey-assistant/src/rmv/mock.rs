//! Mock RMV client for testing without API access.
//!
//! Mimics the interface of the real client with programmable
//! responses, and records every lookup so tests can assert on what the
//! orchestration layer actually asked for.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::{Journey, JourneyRequest, StationCandidate};
use crate::journey::TripSearch;
use crate::resolve::StationSearch;

use super::error::RmvError;

/// How a mock lookup should fail.
#[derive(Debug, Clone, Copy)]
pub enum MockFailure {
    /// 401/403 from the provider.
    Unauthorized,
    /// 429 from the provider.
    RateLimited,
    /// Arbitrary error status.
    Api(u16),
    /// Unparseable response body.
    Protocol,
}

impl MockFailure {
    fn to_error(self) -> RmvError {
        match self {
            MockFailure::Unauthorized => RmvError::Unauthorized,
            MockFailure::RateLimited => RmvError::RateLimited,
            MockFailure::Api(status) => RmvError::Api {
                status,
                message: "mock failure".to_string(),
            },
            MockFailure::Protocol => RmvError::Json {
                message: "mock protocol error".to_string(),
                body: None,
            },
        }
    }
}

/// In-memory stand-in for [`super::RmvClient`].
///
/// Station searches answer from a name-keyed table (unknown names
/// yield an empty candidate list, like the real provider); trip
/// lookups replay a fixed list of journeys.
#[derive(Debug, Default)]
pub struct MockRmvClient {
    stations: HashMap<String, Vec<StationCandidate>>,
    station_failure: Option<MockFailure>,
    trips: Vec<Journey>,
    trip_failure: Option<MockFailure>,
    station_queries: Mutex<Vec<String>>,
    trip_requests: Mutex<Vec<JourneyRequest>>,
}

impl MockRmvClient {
    /// Create a mock with no stations and no trips.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer station searches for `name` with the given candidates.
    pub fn with_station(mut self, name: &str, candidates: Vec<StationCandidate>) -> Self {
        self.stations.insert(name.to_string(), candidates);
        self
    }

    /// Answer trip lookups with the given journeys.
    pub fn with_trips(mut self, trips: Vec<Journey>) -> Self {
        self.trips = trips;
        self
    }

    /// Fail every station search.
    pub fn failing_stations(mut self, failure: MockFailure) -> Self {
        self.station_failure = Some(failure);
        self
    }

    /// Fail every trip lookup.
    pub fn failing_trips(mut self, failure: MockFailure) -> Self {
        self.trip_failure = Some(failure);
        self
    }

    /// Station names that were searched, in call order.
    pub fn station_queries(&self) -> Vec<String> {
        self.station_queries.lock().unwrap().clone()
    }

    /// Trip requests that were issued, in call order.
    pub fn trip_requests(&self) -> Vec<JourneyRequest> {
        self.trip_requests.lock().unwrap().clone()
    }
}

impl StationSearch for MockRmvClient {
    async fn search_stations(&self, name: &str) -> Result<Vec<StationCandidate>, RmvError> {
        self.station_queries.lock().unwrap().push(name.to_string());

        if let Some(failure) = self.station_failure {
            return Err(failure.to_error());
        }

        Ok(self.stations.get(name).cloned().unwrap_or_default())
    }
}

impl TripSearch for MockRmvClient {
    async fn search_trips(&self, request: &JourneyRequest) -> Result<Vec<Journey>, RmvError> {
        self.trip_requests.lock().unwrap().push(request.clone());

        if let Some(failure) = self.trip_failure {
            return Err(failure.to_error());
        }

        Ok(self.trips.clone())
    }
}
