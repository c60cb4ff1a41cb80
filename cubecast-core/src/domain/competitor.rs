use super::WcaId;
use serde::{Deserialize, Serialize};

/// One roster entry: a registered competitor for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrant {
    pub id: WcaId,
    pub name: String,
}

impl Entrant {
    pub fn new(id: impl Into<WcaId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Recency-weighted performance summary for one competitor, built from their
/// attempt history. Handed by value to the sampler.
///
/// `weighted_stdev` is `None` when only one historical round qualified, since
/// the stdev of a single point is undefined. The fitter substitutes a floor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorProfile {
    pub id: WcaId,
    pub name: String,
    pub weighted_mean: f64,
    pub weighted_stdev: Option<f64>,
    /// Fraction of all historical attempt slots that were non-finishes.
    pub dnf_rate: f64,
}
