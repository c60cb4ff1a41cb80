//! Performance profile builder.
//!
//! Turns a competitor's raw attempt history into a recency-weighted
//! performance summary: exponentially time-weighted mean and stdev over the
//! per-round finished-attempt averages, plus a DNF rate over every attempt
//! slot. Weights decay by calendar spacing, not row index, so irregular
//! competition schedules are handled correctly.

use crate::domain::{AttemptRecord, CompetitorProfile, Entrant, ATTEMPT_SLOTS};

/// Build a profile for one competitor, or `None` if they have no qualifying
/// history. Exclusion is an absence, never an error: the caller simply
/// leaves the competitor out of the simulation.
///
/// A round with zero finished attempts contributes nothing to the weighted
/// series but its non-finishes still count toward `dnf_rate`.
pub fn build_profile(
    entrant: &Entrant,
    records: &[AttemptRecord],
    half_life_days: f64,
) -> Option<CompetitorProfile> {
    assert!(half_life_days > 0.0, "half_life_days must be > 0");

    let total_slots = records.len() * ATTEMPT_SLOTS;
    if total_slots == 0 {
        return None;
    }

    let dnf_count: usize = records.iter().map(AttemptRecord::dnf_count).sum();
    let dnf_rate = dnf_count as f64 / total_slots as f64;

    let series: Vec<(chrono::NaiveDate, f64)> = records
        .iter()
        .filter_map(|r| r.instance_average().map(|avg| (r.date, avg)))
        .collect();

    // Zero finished rounds: nothing to estimate a mean from.
    if series.is_empty() {
        return None;
    }

    let anchor = series.iter().map(|(d, _)| *d).max()?;

    let mut sum_w = 0.0;
    let mut sum_wx = 0.0;
    for &(date, avg) in &series {
        let age_days = (anchor - date).num_days() as f64;
        let w = 0.5_f64.powf(age_days / half_life_days);
        sum_w += w;
        sum_wx += w * avg;
    }
    let weighted_mean = sum_wx / sum_w;

    let weighted_stdev = if series.len() < 2 {
        None
    } else {
        let mut sum_w2 = 0.0;
        let mut sum_wd2 = 0.0;
        for &(date, avg) in &series {
            let age_days = (anchor - date).num_days() as f64;
            let w = 0.5_f64.powf(age_days / half_life_days);
            sum_w2 += w * w;
            sum_wd2 += w * (avg - weighted_mean).powi(2);
        }
        // Reliability-corrected weighted variance (unbiased for equal weights).
        let denom = sum_w - sum_w2 / sum_w;
        if denom > 0.0 {
            Some((sum_wd2 / denom).sqrt())
        } else {
            None
        }
    };

    Some(CompetitorProfile {
        id: entrant.id.clone(),
        name: entrant.name.clone(),
        weighted_mean,
        weighted_stdev,
        dnf_rate,
    })
}
