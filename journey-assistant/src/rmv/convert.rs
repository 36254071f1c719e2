//! Conversion from RMV DTOs to domain types.
//!
//! Transforms raw HAFAS responses into validated domain types. Entries
//! the domain cannot represent (coordinate matches, malformed station
//! ids) surface as conversion errors rather than being silently
//! dropped, except for coordinate-only location matches which are not
//! stations at all.

use chrono::NaiveTime;

use crate::domain::{Journey, JourneyLeg, LegKind, StationCandidate, StationId};

use super::types::{LegDto, LocationResponse, TripResponse};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Station id did not parse
    #[error("invalid station id: {0}")]
    InvalidStationId(String),

    /// Time string did not parse
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// A vehicle leg is missing its line name
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A trip arrived without any legs
    #[error("trip contains no legs")]
    EmptyTrip,
}

/// Convert a location response into station candidates.
///
/// Provider order is preserved; coordinate-only matches are skipped.
pub fn convert_stop_locations(
    response: &LocationResponse,
) -> Result<Vec<StationCandidate>, ConversionError> {
    response
        .locations
        .iter()
        .filter_map(|entry| entry.stop.as_ref())
        .map(|stop| {
            let id = StationId::parse(&stop.ext_id)
                .map_err(|_| ConversionError::InvalidStationId(stop.ext_id.clone()))?;
            Ok(StationCandidate::new(id, stop.name.clone(), stop.city.clone()))
        })
        .collect()
}

/// Convert a trip response into journeys, in provider order.
pub fn convert_trips(response: &TripResponse) -> Result<Vec<Journey>, ConversionError> {
    response
        .trips
        .iter()
        .map(|trip| {
            let legs = trip
                .leg_list
                .legs
                .iter()
                .map(convert_leg)
                .collect::<Result<Vec<_>, _>>()?;
            Journey::new(legs).map_err(|_| ConversionError::EmptyTrip)
        })
        .collect()
}

fn convert_leg(leg: &LegDto) -> Result<JourneyLeg, ConversionError> {
    let departure = parse_leg_time(&leg.origin.time)?;
    let arrival = parse_leg_time(&leg.destination.time)?;

    let kind = if leg.leg_type.as_deref() == Some("WALK") {
        LegKind::Walk {
            distance_m: leg.dist.unwrap_or(0),
        }
    } else {
        // HAFAS pads line names with trailing whitespace.
        let line = leg
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or(ConversionError::MissingField("name"))?;

        LegKind::Transit {
            line: line.to_string(),
            category: leg
                .product
                .as_ref()
                .and_then(|p| p.cat_out_l.as_deref())
                .map(|c| c.trim().to_string()),
            direction: leg.direction.clone(),
        }
    };

    Ok(JourneyLeg {
        kind,
        departure,
        arrival,
        origin_name: leg.origin.name.clone(),
        destination_name: leg.destination.name.clone(),
        platform: leg.origin.track.clone(),
    })
}

/// Parse a HAFAS time of day ("HH:MM:SS", occasionally "HH:MM").
fn parse_leg_time(s: &str) -> Result<NaiveTime, ConversionError> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| ConversionError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location_response(json: &str) -> LocationResponse {
        serde_json::from_str(json).unwrap()
    }

    fn trip_response(json: &str) -> TripResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn stop_locations_keep_provider_order() {
        let response = location_response(
            r#"{
                "stopLocationOrCoordLocation": [
                    { "StopLocation": { "extId": "3000001", "name": "Frankfurt (Main) Hauptwache" } },
                    { "StopLocation": { "extId": "3000010", "name": "Frankfurt (Main) Hauptbahnhof" } }
                ]
            }"#,
        );

        let candidates = convert_stop_locations(&response).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id.as_str(), "3000001");
        assert_eq!(candidates[1].id.as_str(), "3000010");
    }

    #[test]
    fn coordinate_matches_are_skipped() {
        let response = location_response(
            r#"{
                "stopLocationOrCoordLocation": [
                    { "CoordLocation": { "name": "Frankfurt, Hauptwache" } },
                    { "StopLocation": { "extId": "3000001", "name": "Frankfurt (Main) Hauptwache" } }
                ]
            }"#,
        );

        let candidates = convert_stop_locations(&response).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "Frankfurt (Main) Hauptwache");
    }

    #[test]
    fn malformed_station_id_is_an_error() {
        let response = location_response(
            r#"{
                "stopLocationOrCoordLocation": [
                    { "StopLocation": { "extId": "not-a-number", "name": "Somewhere" } }
                ]
            }"#,
        );

        assert!(matches!(
            convert_stop_locations(&response),
            Err(ConversionError::InvalidStationId(_))
        ));
    }

    #[test]
    fn trip_legs_convert_to_domain() {
        let response = trip_response(
            r#"{
                "Trip": [{
                    "LegList": { "Leg": [
                        {
                            "Origin": { "name": "Hauptwache", "time": "14:30:00", "track": "2" },
                            "Destination": { "name": "Hauptbahnhof", "time": "14:38:00" },
                            "name": "S8 ",
                            "direction": "Wiesbaden Hauptbahnhof",
                            "type": "JNY",
                            "Product": { "catOutL": "S-Bahn" }
                        },
                        {
                            "Origin": { "name": "Hauptbahnhof", "time": "14:40:00" },
                            "Destination": { "name": "Gallusanlage", "time": "14:46:00" },
                            "type": "WALK",
                            "dist": 420
                        }
                    ] }
                }]
            }"#,
        );

        let journeys = convert_trips(&response).unwrap();
        assert_eq!(journeys.len(), 1);

        let legs = journeys[0].legs();
        assert_eq!(legs.len(), 2);

        // Line names lose their HAFAS padding.
        assert_eq!(legs[0].line(), Some("S8"));
        assert_eq!(legs[0].platform.as_deref(), Some("2"));
        assert_eq!(
            legs[0].departure,
            NaiveTime::from_hms_opt(14, 30, 0).unwrap()
        );

        assert!(legs[1].is_walk());
        assert_eq!(legs[1].kind, LegKind::Walk { distance_m: 420 });
    }

    #[test]
    fn vehicle_leg_without_line_is_an_error() {
        let response = trip_response(
            r#"{
                "Trip": [{
                    "LegList": { "Leg": [
                        {
                            "Origin": { "name": "Hauptwache", "time": "14:30:00" },
                            "Destination": { "name": "Hauptbahnhof", "time": "14:38:00" },
                            "type": "JNY"
                        }
                    ] }
                }]
            }"#,
        );

        assert!(matches!(
            convert_trips(&response),
            Err(ConversionError::MissingField("name"))
        ));
    }

    #[test]
    fn trip_without_legs_is_an_error() {
        let response = trip_response(r#"{ "Trip": [{ "LegList": { "Leg": [] } }] }"#);
        assert!(matches!(
            convert_trips(&response),
            Err(ConversionError::EmptyTrip)
        ));
    }

    #[test]
    fn bad_time_is_an_error() {
        let response = trip_response(
            r#"{
                "Trip": [{
                    "LegList": { "Leg": [
                        {
                            "Origin": { "name": "Hauptwache", "time": "25:99" },
                            "Destination": { "name": "Hauptbahnhof", "time": "14:38:00" },
                            "name": "S8",
                            "type": "JNY"
                        }
                    ] }
                }]
            }"#,
        );

        assert!(matches!(
            convert_trips(&response),
            Err(ConversionError::InvalidTime(_))
        ));
    }

    #[test]
    fn hhmm_times_parse_too() {
        assert_eq!(
            parse_leg_time("09:05").unwrap(),
            NaiveTime::from_hms_opt(9, 5, 0).unwrap()
        );
    }
}
