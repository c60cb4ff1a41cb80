//! CubeCast Core — competition odds engine for WCA events.
//!
//! This crate contains the heart of the odds calculator:
//! - Domain types (entrants, attempt records, competitor profiles)
//! - Event format table (attempt counts + scoring rules per event)
//! - Performance profile builder (recency-weighted mean/stdev, DNF rate)
//! - Method-of-moments gamma fitter
//! - Single-competitor score sampler
//! - Deterministic RNG hierarchy for parallel sampling
//! - Data layer (results provider trait, CSV results store, WCIF roster client)

pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod formats;
pub mod profile;
pub mod rng;
pub mod sampler;

pub use error::SimError;
