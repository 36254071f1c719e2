//! Departure lookup.
//!
//! This module implements the top-level pipeline that answers one
//! voice intent: "when does the next train leave towards X?" —
//! normalization, station resolution for both ends, query
//! construction, and the provider call, with early exit on failure.

mod error;
mod finder;

pub use error::JourneyError;
pub use finder::{DepartureFinder, TripSearch};
