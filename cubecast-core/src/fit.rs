//! Method-of-moments gamma fit.
//!
//! A competitor's weighted (mean, stdev) pair maps onto gamma parameters with
//! the same first two moments: `shape = mean²/stdev²`, `scale = stdev²/mean`.
//! A degenerate stdev (single data point, or a perfectly consistent history)
//! is floored rather than failed; one clean historical round must not crash
//! the run.

use crate::domain::CompetitorProfile;
use crate::error::SimError;
use serde::{Deserialize, Serialize};

/// Substituted when the historical stdev is zero, undefined, or non-finite.
pub const STDEV_FLOOR: f64 = 0.01;

/// Gamma parameters fitted to a competitor profile. Both are strictly
/// positive whenever the fit succeeds; the sampler relies on that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FittedGamma {
    pub shape: f64,
    pub scale: f64,
}

/// Fit gamma parameters from a weighted mean and (possibly undefined) stdev.
///
/// A non-positive mean is a data error upstream and is rejected; solve times
/// are strictly positive.
pub fn fit_gamma(mean: f64, stdev: Option<f64>) -> Result<FittedGamma, SimError> {
    if !(mean > 0.0) {
        return Err(SimError::NonPositiveMean { mean });
    }

    let stdev = match stdev {
        Some(s) if s.is_finite() && s > 0.0 => s,
        _ => STDEV_FLOOR,
    };

    let variance = stdev * stdev;
    Ok(FittedGamma {
        shape: (mean * mean) / variance,
        scale: variance / mean,
    })
}

/// Convenience wrapper over [`fit_gamma`] for a whole profile.
pub fn fit_profile(profile: &CompetitorProfile) -> Result<FittedGamma, SimError> {
    fit_gamma(profile.weighted_mean, profile.weighted_stdev)
}
