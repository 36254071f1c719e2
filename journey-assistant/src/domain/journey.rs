//! Journey types.
//!
//! A `Journey` is one connection returned by the provider, potentially
//! consisting of several legs (trains and interchange walks). A
//! `JourneyRequest` is the fully-resolved query sent to the provider,
//! and a `JourneyResult` is the answer handed to response rendering.

use chrono::NaiveTime;

use super::{StationCandidate, StationId};

/// Error returned when constructing a journey without legs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("journey must contain at least one leg")]
pub struct EmptyJourney;

/// A fully-resolved trip query, ready to send to the provider.
///
/// Both station ids come from resolved [`StationCandidate`]s, so a
/// request cannot exist in a partially-resolved state. Origin and
/// destination are allowed to be equal: a journey within the same
/// station complex is for the provider to reject or satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyRequest {
    origin: StationId,
    destination: StationId,
    requested_time: Option<NaiveTime>,
}

impl JourneyRequest {
    /// Build a request from two resolved candidates.
    ///
    /// An absent `requested_time` stays absent, signalling "depart now"
    /// to the provider; no default clock reading is baked in here.
    pub fn new(
        origin: &StationCandidate,
        destination: &StationCandidate,
        requested_time: Option<NaiveTime>,
    ) -> Self {
        Self {
            origin: origin.id.clone(),
            destination: destination.id.clone(),
            requested_time,
        }
    }

    /// Returns the origin station id.
    pub fn origin(&self) -> &StationId {
        &self.origin
    }

    /// Returns the destination station id.
    pub fn destination(&self) -> &StationId {
        &self.destination
    }

    /// Returns the requested departure time, if any was given.
    pub fn requested_time(&self) -> Option<NaiveTime> {
        self.requested_time
    }
}

/// What kind of movement a leg is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegKind {
    /// A public-transport leg.
    Transit {
        /// Line name as reported by the provider (e.g. "S8").
        line: String,
        /// Product category (e.g. "S-Bahn", "U-Bahn").
        category: Option<String>,
        /// Direction the vehicle is signed towards.
        direction: Option<String>,
    },

    /// A walk between stops.
    Walk {
        /// Walking distance in metres.
        distance_m: u32,
    },
}

/// One leg of a journey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyLeg {
    /// Transit or walk.
    pub kind: LegKind,

    /// Departure time at the leg's origin.
    pub departure: NaiveTime,

    /// Arrival time at the leg's destination.
    pub arrival: NaiveTime,

    /// Name of the stop the leg departs from.
    pub origin_name: String,

    /// Name of the stop the leg arrives at.
    pub destination_name: String,

    /// Departure platform, when the provider reports one.
    pub platform: Option<String>,
}

impl JourneyLeg {
    /// Returns the line name for transit legs.
    pub fn line(&self) -> Option<&str> {
        match &self.kind {
            LegKind::Transit { line, .. } => Some(line),
            LegKind::Walk { .. } => None,
        }
    }

    /// Whether this leg is a walk.
    pub fn is_walk(&self) -> bool {
        matches!(self.kind, LegKind::Walk { .. })
    }
}

/// One connection returned by the provider, in provider order.
///
/// Guaranteed non-empty by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journey {
    legs: Vec<JourneyLeg>,
}

impl Journey {
    /// Create a journey from its legs.
    pub fn new(legs: Vec<JourneyLeg>) -> Result<Self, EmptyJourney> {
        if legs.is_empty() {
            return Err(EmptyJourney);
        }
        Ok(Self { legs })
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[JourneyLeg] {
        &self.legs
    }

    /// Departure time of the first leg.
    pub fn departure(&self) -> NaiveTime {
        self.legs[0].departure
    }

    /// Arrival time of the last leg.
    pub fn arrival(&self) -> NaiveTime {
        self.legs[self.legs.len() - 1].arrival
    }
}

/// Outcome of a successful departure lookup.
///
/// Summarises the first connection the provider returned; the full leg
/// list is retained for response rendering.
#[derive(Debug, Clone)]
pub struct JourneyResult {
    /// When the journey departs (first leg).
    pub departure_time: NaiveTime,

    /// When the journey arrives (last leg).
    pub arrival_time: NaiveTime,

    /// Line of the first transit leg. Absent for purely pedestrian
    /// connections.
    pub line: Option<String>,

    /// Departure platform of the first transit leg, when reported.
    pub platform: Option<String>,

    /// Display name of the journey's final destination.
    pub destination_name: String,

    /// All legs, in travel order.
    pub legs: Vec<JourneyLeg>,
}

impl JourneyResult {
    /// Summarise a journey into a result.
    pub fn from_journey(journey: Journey) -> Self {
        let departure_time = journey.departure();
        let arrival_time = journey.arrival();

        let first_transit = journey.legs().iter().find(|leg| !leg.is_walk());
        let line = first_transit.and_then(|leg| leg.line()).map(str::to_string);
        let platform = first_transit.and_then(|leg| leg.platform.clone());

        let destination_name = journey
            .legs()
            .last()
            .map(|leg| leg.destination_name.clone())
            .unwrap_or_default();

        Self {
            departure_time,
            arrival_time,
            line,
            platform,
            destination_name,
            legs: journey.legs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, name: &str) -> StationCandidate {
        StationCandidate::new(StationId::parse(id).unwrap(), name, None)
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn transit_leg(line: &str, dep: NaiveTime, arr: NaiveTime, from: &str, to: &str) -> JourneyLeg {
        JourneyLeg {
            kind: LegKind::Transit {
                line: line.to_string(),
                category: Some("S-Bahn".to_string()),
                direction: Some(to.to_string()),
            },
            departure: dep,
            arrival: arr,
            origin_name: from.to_string(),
            destination_name: to.to_string(),
            platform: Some("2".to_string()),
        }
    }

    fn walk_leg(dep: NaiveTime, arr: NaiveTime, from: &str, to: &str) -> JourneyLeg {
        JourneyLeg {
            kind: LegKind::Walk { distance_m: 250 },
            departure: dep,
            arrival: arr,
            origin_name: from.to_string(),
            destination_name: to.to_string(),
            platform: None,
        }
    }

    #[test]
    fn request_keeps_absent_time_absent() {
        let origin = candidate("3000010", "Frankfurt (Main) Hauptbahnhof");
        let destination = candidate("3000525", "Frankfurt (Main) Willy-Brandt-Platz");

        let request = JourneyRequest::new(&origin, &destination, None);
        assert!(request.requested_time().is_none());
    }

    #[test]
    fn request_carries_given_time() {
        let origin = candidate("3000010", "Frankfurt (Main) Hauptbahnhof");
        let destination = candidate("3000525", "Frankfurt (Main) Willy-Brandt-Platz");

        let request = JourneyRequest::new(&origin, &destination, Some(time(16, 33)));
        assert_eq!(request.requested_time(), Some(time(16, 33)));
        assert_eq!(request.origin().as_str(), "3000010");
        assert_eq!(request.destination().as_str(), "3000525");
    }

    #[test]
    fn request_allows_same_origin_and_destination() {
        let station = candidate("3000010", "Frankfurt (Main) Hauptbahnhof");
        let request = JourneyRequest::new(&station, &station, None);
        assert_eq!(request.origin(), request.destination());
    }

    #[test]
    fn journey_rejects_empty_leg_list() {
        assert_eq!(Journey::new(vec![]), Err(EmptyJourney));
    }

    #[test]
    fn journey_times_from_first_and_last_leg() {
        let journey = Journey::new(vec![
            transit_leg("S8", time(14, 30), time(14, 45), "Hauptwache", "Hauptbahnhof"),
            transit_leg("RE 60", time(14, 52), time(15, 30), "Hauptbahnhof", "Mainz Hbf"),
        ])
        .unwrap();

        assert_eq!(journey.departure(), time(14, 30));
        assert_eq!(journey.arrival(), time(15, 30));
    }

    #[test]
    fn result_summarises_first_transit_leg() {
        let journey = Journey::new(vec![
            walk_leg(time(14, 25), time(14, 29), "Zuhause", "Hauptwache"),
            transit_leg("S8", time(14, 30), time(14, 45), "Hauptwache", "Hauptbahnhof"),
        ])
        .unwrap();

        let result = JourneyResult::from_journey(journey);
        assert_eq!(result.departure_time, time(14, 25));
        assert_eq!(result.arrival_time, time(14, 45));
        assert_eq!(result.line.as_deref(), Some("S8"));
        assert_eq!(result.platform.as_deref(), Some("2"));
        assert_eq!(result.destination_name, "Hauptbahnhof");
        assert_eq!(result.legs.len(), 2);
    }

    #[test]
    fn result_without_transit_legs_has_no_line() {
        let journey = Journey::new(vec![walk_leg(
            time(9, 0),
            time(9, 10),
            "Hauptwache",
            "Willy-Brandt-Platz",
        )])
        .unwrap();

        let result = JourneyResult::from_journey(journey);
        assert!(result.line.is_none());
        assert!(result.platform.is_none());
        assert_eq!(result.destination_name, "Willy-Brandt-Platz");
    }
}
