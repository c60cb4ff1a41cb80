//! CubeCast Runner — orchestrates a full odds run.
//!
//! Pipeline: roster + attempt history → competitor profiles → gamma fits →
//! parallel per-competitor sampling → win/podium aggregation → report.

pub mod config;
pub mod outcome;
pub mod report;
pub mod simulate;

pub use config::SimulationConfig;
pub use outcome::{OutcomeRow, OutcomeSummary};
pub use simulate::{prepare_profiles, run_simulation};
