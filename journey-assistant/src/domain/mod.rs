//! Domain types for the journey assistant.
//!
//! This module contains the core domain model types that represent
//! validated transit data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod journey;
mod station;

pub use journey::{EmptyJourney, Journey, JourneyLeg, JourneyRequest, JourneyResult, LegKind};
pub use station::{InvalidStationId, StationCandidate, StationId};
