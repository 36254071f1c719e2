//! Station identifier types.

use std::fmt;

/// Error returned when parsing an invalid station id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A valid RMV station identifier (HAFAS "extId").
///
/// Station ids are non-empty strings of ASCII digits (e.g. `3000010` for
/// Frankfurt Hauptbahnhof). This type guarantees that any `StationId`
/// value is valid by construction, which is what allows a trip request
/// to exist only in a fully-resolved state.
///
/// # Examples
///
/// ```
/// use journey_assistant::domain::StationId;
///
/// let hbf = StationId::parse("3000010").unwrap();
/// assert_eq!(hbf.as_str(), "3000010");
///
/// // Empty ids are rejected
/// assert!(StationId::parse("").is_err());
///
/// // Non-digit characters are rejected
/// assert!(StationId::parse("30000x0").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StationId(String);

impl StationId {
    /// Parse a station id from a string.
    ///
    /// The input must be a non-empty sequence of ASCII digits.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        if s.is_empty() {
            return Err(InvalidStationId {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidStationId {
                reason: "must be ASCII digits 0-9",
            });
        }

        Ok(StationId(s.to_string()))
    }

    /// Returns the station id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One station match returned by the provider's station search.
///
/// A list of candidates is ordered by the provider's own relevance
/// ranking; the resolver's selection policy is deterministic over that
/// order and never re-sorts locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCandidate {
    /// Resolved station identifier.
    pub id: StationId,

    /// Human-readable station name as reported by the provider.
    pub name: String,

    /// City the station belongs to, when the provider reports one.
    pub city: Option<String>,
}

impl StationCandidate {
    /// Create a new candidate.
    pub fn new(id: StationId, name: impl Into<String>, city: Option<String>) -> Self {
        Self {
            id,
            name: name.into(),
            city,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StationId::parse("3000010").is_ok());
        assert!(StationId::parse("3011005").is_ok());
        assert!(StationId::parse("1").is_ok());
    }

    #[test]
    fn reject_empty() {
        assert!(StationId::parse("").is_err());
    }

    #[test]
    fn reject_non_digits() {
        assert!(StationId::parse("30000x0").is_err());
        assert!(StationId::parse("3000 10").is_err());
        assert!(StationId::parse("-300010").is_err());
        assert!(StationId::parse("drei").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let id = StationId::parse("3000010").unwrap();
        assert_eq!(id.as_str(), "3000010");
    }

    #[test]
    fn display_and_debug() {
        let id = StationId::parse("3011005").unwrap();
        assert_eq!(format!("{}", id), "3011005");
        assert_eq!(format!("{:?}", id), "StationId(3011005)");
    }

    #[test]
    fn equality() {
        let a = StationId::parse("3000010").unwrap();
        let b = StationId::parse("3000010").unwrap();
        let c = StationId::parse("3011005").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn candidate_construction() {
        let id = StationId::parse("3000010").unwrap();
        let candidate =
            StationCandidate::new(id.clone(), "Frankfurt (Main) Hauptbahnhof", None);
        assert_eq!(candidate.id, id);
        assert_eq!(candidate.name, "Frankfurt (Main) Hauptbahnhof");
        assert!(candidate.city.is_none());
    }
}
