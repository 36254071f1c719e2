//! Parsed voice intent.
//!
//! The speech platform delivers slots as strings; the departure time
//! slot arrives as a full timestamp with zone suffix, e.g.
//! `"2019-08-26 18:30:00 +00:00"`. Only the time of day matters for a
//! trip query.

use chrono::NaiveTime;

/// A parsed "when is the next train to X" intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyIntent {
    /// Spoken destination, as recognized.
    pub destination: String,

    /// Spoken departure time, if any.
    pub departure_time: Option<NaiveTime>,
}

impl JourneyIntent {
    /// Build an intent from raw slot values.
    ///
    /// An unparseable time slot degrades to "depart now" rather than
    /// failing the whole intent.
    pub fn from_slots(destination: impl Into<String>, time_slot: Option<&str>) -> Self {
        Self {
            destination: destination.into(),
            departure_time: time_slot.and_then(parse_time_slot),
        }
    }
}

/// Extract the time of day from a departure-time slot value.
///
/// Accepts the platform's full form (`"2019-08-26 18:30:00 +00:00"`)
/// as well as bare `HH:MM:SS` / `HH:MM`. Returns `None` when no time
/// can be extracted.
pub fn parse_time_slot(raw: &str) -> Option<NaiveTime> {
    // Drop the zone suffix, then keep the last whitespace-separated
    // token (the time of day).
    let before_zone = raw.split('+').next().unwrap_or(raw).trim();
    let token = before_zone.split_whitespace().last()?;

    NaiveTime::parse_from_str(token, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(token, "%H:%M"))
        .ok()
}
