//! Voice-driven journey lookup assistant for the RMV transit network.
//!
//! Answers the question: "when does the next train leave from home
//! towards this spoken destination?" A spoken station name is resolved
//! to a concrete stop via the RMV open-data API, a trip query is issued
//! from the configured home station, and the first connection is
//! rendered as a spoken German answer.

pub mod cache;
pub mod config;
pub mod domain;
pub mod intent;
pub mod journey;
pub mod resolve;
pub mod respond;
pub mod rmv;
