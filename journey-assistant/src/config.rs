//! Skill configuration.
//!
//! The original deployment ships a small config file next to the skill:
//! a `[global]` section describing the home station and a `[secret]`
//! section holding the RMV API key. Configuration is loaded once at
//! startup into an immutable [`HomeConfiguration`] value that is passed
//! explicitly into the resolution and query logic; nothing reads it
//! from ambient process state.

use std::path::Path;

use serde::Deserialize;

use crate::respond::ResponseOptions;

/// Environment variable that overrides the configured API key.
const API_KEY_ENV: &str = "RMV_API_KEY";

/// Opaque RMV API credential.
///
/// The raw value is only reachable through [`ApiKey::expose`], at the
/// point where the request query string is built. `Debug` output is
/// redacted, so the key cannot end up in logs or error payloads.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw credential.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the raw credential for request construction.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(****)")
    }
}

/// Immutable per-deployment home settings.
///
/// Created once at startup and passed by value into the departure
/// finder; read-only thereafter.
#[derive(Debug, Clone)]
pub struct HomeConfiguration {
    /// Spoken name of the fixed origin station (e.g. "Hauptwache").
    pub home_station: String,

    /// City used to disambiguate same-named stations elsewhere.
    pub home_city: String,

    /// Whether destination lookups are pinned to the home city.
    pub home_city_only: bool,

    /// RMV API credential.
    pub api_key: ApiKey,

    /// Minutes added to "now" when the intent carries no spoken time.
    pub time_offset: Option<i64>,
}

/// Errors from loading the skill configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// No credential in the file and none in the environment
    #[error("no API key configured (set [secret] api_key or {API_KEY_ENV})")]
    MissingApiKey,
}

fn default_home_city_only() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RawGlobal {
    home_station: String,
    home_city: String,
    #[serde(default = "default_home_city_only")]
    home_city_only: bool,
    #[serde(default)]
    time_offset: Option<i64>,
    #[serde(default)]
    short_info: bool,
}

#[derive(Deserialize)]
struct RawSecret {
    api_key: Option<String>,
}

#[derive(Deserialize)]
struct RawSkillConfig {
    global: RawGlobal,
    secret: Option<RawSecret>,
}

/// Fully loaded skill configuration.
#[derive(Debug, Clone)]
pub struct SkillConfig {
    /// Home station settings consumed by the departure finder.
    pub home: HomeConfiguration,

    /// Response rendering options.
    pub response: ResponseOptions,
}

impl SkillConfig {
    /// Load the configuration from a TOML file.
    ///
    /// The `RMV_API_KEY` environment variable, when set and non-empty,
    /// takes precedence over the credential in the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let raw: RawSkillConfig = toml::from_str(&text)?;

        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .or_else(|| raw.secret.as_ref().and_then(|s| s.api_key.clone()))
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self::assemble(raw, ApiKey::new(api_key)))
    }

    /// Parse the configuration from TOML text.
    ///
    /// Unlike [`SkillConfig::load`] this does not consult the
    /// environment; the file must carry the credential.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let raw: RawSkillConfig = toml::from_str(text)?;

        let api_key = raw
            .secret
            .as_ref()
            .and_then(|s| s.api_key.clone())
            .ok_or(ConfigError::MissingApiKey)?;

        Ok(Self::assemble(raw, ApiKey::new(api_key)))
    }

    fn assemble(raw: RawSkillConfig, api_key: ApiKey) -> Self {
        Self {
            home: HomeConfiguration {
                home_station: raw.global.home_station,
                home_city: raw.global.home_city,
                home_city_only: raw.global.home_city_only,
                api_key,
                time_offset: raw.global.time_offset,
            },
            response: ResponseOptions {
                short_info: raw.global.short_info,
            },
        }
    }
}
