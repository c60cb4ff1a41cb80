//! Single-competitor score sampler.
//!
//! For one competitor, draws `trials` synthetic rounds from the fitted gamma
//! distribution, applies per-attempt DNF replacement, and collapses each
//! round with the event's scoring rule. Output is a `trials`-length vector of
//! round scores, lower is better.

use crate::fit::FittedGamma;
use crate::formats::EventFormat;
use rand::Rng;
use rand_distr::{Distribution, Gamma};

/// Score assigned to a non-finish attempt: worse than any achievable time.
/// Matches the i32 ceiling of the WCA centisecond encoding.
pub const DNF_SENTINEL: f64 = i32::MAX as f64;

/// Sample `trials` round scores for one competitor.
///
/// Each attempt is an independent gamma draw truncated to whole centiseconds.
/// An independent Bernoulli(dnf_rate) trial then replaces it with
/// [`DNF_SENTINEL`]; the raw time is discarded, not combined. Attempts are
/// sorted ascending per round before the scoring rule is applied, so the
/// sentinel lands in the dropped-worst slot whenever possible.
pub fn sample_scores(
    fitted: &FittedGamma,
    dnf_rate: f64,
    format: &EventFormat,
    trials: usize,
    rng: &mut impl Rng,
) -> Vec<f64> {
    let gamma = Gamma::new(fitted.shape, fitted.scale)
        .expect("fitter guarantees positive shape and scale");

    let mut scores = Vec::with_capacity(trials);
    let mut round = vec![0.0f64; format.attempt_count];

    for _ in 0..trials {
        for slot in round.iter_mut() {
            let time = gamma.sample(rng).trunc();
            *slot = if rng.gen::<f64>() < dnf_rate {
                DNF_SENTINEL
            } else {
                time
            };
        }
        round.sort_unstable_by(|a, b| a.total_cmp(b));
        scores.push(format.rule.aggregate(&round));
    }

    scores
}
