//! Run-level error types.
//!
//! Per-competitor anomalies (no history, degenerate variance) are absorbed
//! inside the profile builder and fitter and never surface here. These
//! variants abort a run before any sampling happens.

use crate::data::DataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Unknown event id in the format table. Configuration error; the run
    /// must not fall back to a default scoring rule.
    #[error("no event format configured for '{event}'")]
    UnknownEvent { event: String },

    /// An event format paired a scoring rule with too few attempts to score.
    #[error("event format with {attempt_count} attempts needs at least {required}")]
    InvalidEventFormat { attempt_count: usize, required: usize },

    /// A profile reached the fitter with a non-positive weighted mean.
    /// Solve times are strictly positive, so this is a data error upstream.
    #[error("cannot fit gamma distribution: weighted mean {mean} is not positive")]
    NonPositiveMean { mean: f64 },

    /// Roster or results collaborator failed. Propagated as-is; the core
    /// does not retry.
    #[error(transparent)]
    Data(#[from] DataError),
}
