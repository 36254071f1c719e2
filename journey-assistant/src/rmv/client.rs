//! RMV HAFAS HTTP client.
//!
//! Async client for the two open-data capabilities the assistant
//! consumes: station search (`location.name`) and trip lookup
//! (`trip`). Authentication is a query-parameter credential
//! (`accessId`); both endpoints are asked for JSON.

use crate::config::ApiKey;
use crate::domain::{Journey, JourneyRequest, StationCandidate};
use crate::journey::TripSearch;
use crate::resolve::StationSearch;

use super::convert::{convert_stop_locations, convert_trips};
use super::error::RmvError;
use super::types::{LocationResponse, TripResponse};

/// Default base URL for the RMV open-data API.
const DEFAULT_BASE_URL: &str = "https://www.rmv.de/hapi";

/// Default maximum number of station candidates to request.
const DEFAULT_MAX_CANDIDATES: u8 = 6;

/// Configuration for the RMV client.
#[derive(Debug, Clone)]
pub struct RmvConfig {
    /// API credential sent as the `accessId` query parameter
    pub api_key: ApiKey,
    /// Base URL for the API (defaults to production RMV)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Upper bound on station-search candidates (`maxNo`)
    pub max_candidates: u8,
}

impl RmvConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the maximum number of station candidates to request.
    pub fn with_max_candidates(mut self, n: u8) -> Self {
        self.max_candidates = n;
        self
    }
}

/// RMV open-data API client.
#[derive(Debug, Clone)]
pub struct RmvClient {
    http: reqwest::Client,
    base_url: String,
    api_key: ApiKey,
    max_candidates: u8,
}

impl RmvClient {
    /// Create a new RMV client with the given configuration.
    pub fn new(config: RmvConfig) -> Result<Self, RmvError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            api_key: config.api_key,
            max_candidates: config.max_candidates,
        })
    }

    /// Search stations by free-text name.
    ///
    /// Returns candidates in the provider's own relevance order; no
    /// local re-ranking. `type=S` restricts the search to stops.
    pub async fn search_stations(&self, name: &str) -> Result<Vec<StationCandidate>, RmvError> {
        let url = format!("{}/location.name", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("accessId", self.api_key.expose().to_string()),
                ("format", "json".to_string()),
                ("type", "S".to_string()),
                ("maxNo", self.max_candidates.to_string()),
                ("input", name.to_string()),
            ])
            .send()
            .await?;

        let body = check_status(response).await?;

        let parsed: LocationResponse =
            serde_json::from_str(&body).map_err(|e| RmvError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        convert_stop_locations(&parsed).map_err(|e| RmvError::Json {
            message: e.to_string(),
            body: None,
        })
    }

    /// Look up trips for a fully-resolved request.
    ///
    /// Returns connections in provider order. When the request carries
    /// no time, the provider answers for "now".
    pub async fn search_trips(&self, request: &JourneyRequest) -> Result<Vec<Journey>, RmvError> {
        let url = format!("{}/trip", self.base_url);

        let mut params = vec![
            ("accessId", self.api_key.expose().to_string()),
            ("format", "json".to_string()),
            ("originExtId", request.origin().as_str().to_string()),
            ("destExtId", request.destination().as_str().to_string()),
        ];

        if let Some(time) = request.requested_time() {
            params.push(("time", time.format("%H:%M:%S").to_string()));
        }

        let response = self.http.get(&url).query(&params).send().await?;

        let body = check_status(response).await?;

        let parsed: TripResponse = serde_json::from_str(&body).map_err(|e| RmvError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        convert_trips(&parsed).map_err(|e| RmvError::Json {
            message: e.to_string(),
            body: None,
        })
    }
}

/// Map HTTP status codes to errors and read the body on success.
async fn check_status(response: reqwest::Response) -> Result<String, RmvError> {
    let status = response.status();

    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return Err(RmvError::Unauthorized);
    }

    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(RmvError::RateLimited);
    }

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RmvError::Api {
            status: status.as_u16(),
            message: body,
        });
    }

    Ok(response.text().await?)
}

impl StationSearch for RmvClient {
    async fn search_stations(&self, name: &str) -> Result<Vec<StationCandidate>, RmvError> {
        RmvClient::search_stations(self, name).await
    }
}

impl TripSearch for RmvClient {
    async fn search_trips(&self, request: &JourneyRequest) -> Result<Vec<Journey>, RmvError> {
        RmvClient::search_trips(self, request).await
    }
}
