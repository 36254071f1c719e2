//! Caching layer for RMV API responses.
//!
//! Station name resolution is stable over long periods, so successful
//! station searches are cached keyed by the effective query name. Trip
//! lookups are time-sensitive and always go to the provider.

use std::time::Duration;

use moka::future::Cache as MokaCache;

use crate::domain::{Journey, JourneyRequest, StationCandidate};
use crate::journey::TripSearch;
use crate::resolve::StationSearch;
use crate::rmv::{RmvClient, RmvError};

/// Default station cache TTL: 24 hours.
const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Default maximum number of cached station searches.
const DEFAULT_MAX_CAPACITY: u64 = 256;

/// Configuration for the station search cache.
#[derive(Debug, Clone)]
pub struct StationCacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl StationCacheConfig {
    /// Set a custom TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set a custom capacity.
    pub fn with_max_capacity(mut self, n: u64) -> Self {
        self.max_capacity = n;
        self
    }
}

impl Default for StationCacheConfig {
    fn default() -> Self {
        Self {
            ttl: DEFAULT_TTL,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

/// RMV client with station-search caching.
///
/// Wraps an [`RmvClient`] and caches successful station searches.
/// Implements both provider traits, so it drops in wherever the plain
/// client is used.
pub struct CachedRmvClient {
    client: RmvClient,
    stations: MokaCache<String, Vec<StationCandidate>>,
}

impl CachedRmvClient {
    /// Create a new cached client.
    pub fn new(client: RmvClient, config: &StationCacheConfig) -> Self {
        let stations = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { client, stations }
    }

    /// Search stations, using the cache if possible.
    ///
    /// Only successful lookups are cached; errors always surface.
    pub async fn search_stations(&self, name: &str) -> Result<Vec<StationCandidate>, RmvError> {
        if let Some(cached) = self.stations.get(name).await {
            return Ok(cached);
        }

        let candidates = self.client.search_stations(name).await?;
        self.stations
            .insert(name.to_string(), candidates.clone())
            .await;

        Ok(candidates)
    }

    /// Access the underlying client for operations that bypass cache.
    pub fn client(&self) -> &RmvClient {
        &self.client
    }

    /// Number of cached station searches (for monitoring).
    pub fn cached_station_searches(&self) -> u64 {
        self.stations.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.stations.invalidate_all();
    }
}

impl StationSearch for CachedRmvClient {
    async fn search_stations(&self, name: &str) -> Result<Vec<StationCandidate>, RmvError> {
        CachedRmvClient::search_stations(self, name).await
    }
}

impl TripSearch for CachedRmvClient {
    async fn search_trips(&self, request: &JourneyRequest) -> Result<Vec<Journey>, RmvError> {
        self.client.search_trips(request).await
    }
}
