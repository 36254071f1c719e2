//! RMV open-data API client.
//!
//! This module provides an HTTP client for the RMV HAFAS API, which
//! supplies the two capabilities the assistant consumes:
//!
//! - `location.name`: free-text station search, returning candidates
//!   in the provider's own relevance order
//! - `trip`: connection lookup between two resolved stations,
//!   optionally constrained to a departure time
//!
//! Authentication is a query-parameter credential (`accessId`); the
//! key never appears in errors or logs.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{RmvClient, RmvConfig};
pub use convert::ConversionError;
pub use error::RmvError;
pub use mock::{MockFailure, MockRmvClient};
pub use types::{
    LegDto, LegListDto, LegStopDto, LocationEntry, LocationResponse, ProductDto, StopLocationDto,
    TripDto, TripResponse,
};
