//! Station name normalization.
//!
//! Spoken station names are ambiguous across cities ("Willy-Brandt-Platz"
//! exists in Frankfurt and elsewhere). The only disambiguation signal
//! the skill has is the configured home city, which is appended to the
//! spoken name before asking the provider.

use crate::config::HomeConfiguration;

/// Apply the home-city augmentation policy to a spoken station name.
///
/// When `home_city_only` is set and `raw` does not already contain the
/// home city (case-insensitive), the city is appended. Otherwise the
/// name passes through unchanged. Pure string transform; never calls
/// the provider. An empty or whitespace-only name still gets the
/// suffix — whether the resulting query resolves is the resolver's
/// concern.
pub fn normalize_station_name(raw: &str, config: &HomeConfiguration) -> String {
    if !config.home_city_only {
        return raw.to_string();
    }

    suffix_city(raw, &config.home_city)
}

fn suffix_city(raw: &str, city: &str) -> String {
    if raw.to_lowercase().contains(&city.to_lowercase()) {
        raw.to_string()
    } else {
        format!("{raw} {city}")
    }
}

/// A request to resolve a free-text station name.
///
/// Created per intent invocation; `effective` is the name actually
/// sent to the provider after normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationQuery {
    raw: String,
    effective: String,
}

impl StationQuery {
    /// Query for a spoken destination, applying the configured policy.
    pub fn destination(raw: impl Into<String>, config: &HomeConfiguration) -> Self {
        let raw = raw.into();
        let effective = normalize_station_name(&raw, config);
        Self { raw, effective }
    }

    /// Query for the configured home station.
    ///
    /// The home city is always appended here: the original skill pins
    /// the origin to the home city even when destination augmentation
    /// is disabled.
    pub fn home(config: &HomeConfiguration) -> Self {
        let raw = config.home_station.clone();
        let effective = suffix_city(&raw, &config.home_city);
        Self { raw, effective }
    }

    /// The name as spoken.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The name sent to the provider.
    pub fn effective(&self) -> &str {
        &self.effective
    }
}
