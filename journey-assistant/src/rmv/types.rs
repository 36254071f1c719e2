//! RMV HAFAS API response DTOs.
//!
//! These types map directly to the `location.name` and `trip` JSON
//! responses. They use `Option` liberally because HAFAS omits fields
//! rather than sending null values in many cases.

use serde::Deserialize;

/// Response from `location.name`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationResponse {
    /// Matches in provider relevance order. Coordinate-only matches
    /// appear as entries without a `StopLocation`.
    #[serde(rename = "stopLocationOrCoordLocation", default)]
    pub locations: Vec<LocationEntry>,
}

/// One entry of the location list.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationEntry {
    /// Present for stop/station matches, absent for coordinates.
    #[serde(rename = "StopLocation")]
    pub stop: Option<StopLocationDto>,
}

/// A stop location match.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopLocationDto {
    /// HAFAS external id (numeric string).
    pub ext_id: String,

    /// Display name, usually "<City> <Station>".
    pub name: String,

    /// City name, when the profile reports it separately.
    #[serde(default)]
    pub city: Option<String>,
}

/// Response from `trip`.
#[derive(Debug, Clone, Deserialize)]
pub struct TripResponse {
    /// Connections in provider order.
    #[serde(rename = "Trip", default)]
    pub trips: Vec<TripDto>,
}

/// One connection.
#[derive(Debug, Clone, Deserialize)]
pub struct TripDto {
    /// The legs of this connection.
    #[serde(rename = "LegList")]
    pub leg_list: LegListDto,
}

/// Wrapper around the leg array.
#[derive(Debug, Clone, Deserialize)]
pub struct LegListDto {
    #[serde(rename = "Leg", default)]
    pub legs: Vec<LegDto>,
}

/// One leg of a connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegDto {
    /// Where the leg starts.
    #[serde(rename = "Origin")]
    pub origin: LegStopDto,

    /// Where the leg ends.
    #[serde(rename = "Destination")]
    pub destination: LegStopDto,

    /// Line name (e.g. "S8 "). HAFAS pads with trailing whitespace.
    pub name: Option<String>,

    /// Direction the vehicle is signed towards.
    pub direction: Option<String>,

    /// Leg type; "WALK" for foot legs, "JNY" for vehicle legs.
    #[serde(rename = "type")]
    pub leg_type: Option<String>,

    /// Product information.
    #[serde(rename = "Product")]
    pub product: Option<ProductDto>,

    /// Walking distance in metres (walk legs only).
    pub dist: Option<u32>,
}

/// Product (vehicle category) information.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductDto {
    /// Long category name (e.g. "S-Bahn").
    #[serde(rename = "catOutL")]
    pub cat_out_l: Option<String>,
}

/// Origin or destination of a leg.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegStopDto {
    /// Stop name.
    pub name: String,

    /// Time of day as "HH:MM:SS".
    pub time: String,

    /// Service date, when reported.
    #[serde(default)]
    pub date: Option<String>,

    /// Platform/track, when reported.
    #[serde(default)]
    pub track: Option<String>,
}
