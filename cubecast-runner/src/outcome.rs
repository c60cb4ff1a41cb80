//! Outcome aggregation: per-trial ranking into win/podium probabilities.

use cubecast_core::domain::{CompetitorProfile, WcaId};
use serde::{Deserialize, Serialize};

/// Final odds for one competitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeRow {
    pub id: WcaId,
    pub name: String,
    pub win_probability: f64,
    pub podium_probability: f64,
}

/// Full run output: one row per simulated competitor, sorted by win
/// probability descending (stable on the original competitor order for ties).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSummary {
    pub event: String,
    pub trials: usize,
    pub rows: Vec<OutcomeRow>,
}

/// Win/podium counts divided by trial count, indexed by original competitor
/// position.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    pub win: Vec<f64>,
    pub podium: Vec<f64>,
}

/// Rank every trial and accumulate win/podium fractions.
///
/// `scores[i]` is competitor i's score vector; all vectors must have length
/// `trials`. Exactly-equal scores are broken by the lower original index,
/// an explicit, deterministic policy.
pub fn tally_scores(scores: &[Vec<f64>], trials: usize) -> Tally {
    let n = scores.len();
    // A fully excluded field is an absence of rows, not a failure.
    if n == 0 {
        return Tally {
            win: Vec::new(),
            podium: Vec::new(),
        };
    }
    let podium_size = n.min(3);

    let mut win_counts = vec![0u64; n];
    let mut podium_counts = vec![0u64; n];
    let mut order: Vec<usize> = (0..n).collect();

    for t in 0..trials {
        order.sort_unstable_by(|&a, &b| scores[a][t].total_cmp(&scores[b][t]).then(a.cmp(&b)));
        win_counts[order[0]] += 1;
        for &i in &order[..podium_size] {
            podium_counts[i] += 1;
        }
    }

    Tally {
        win: win_counts.iter().map(|&c| c as f64 / trials as f64).collect(),
        podium: podium_counts
            .iter()
            .map(|&c| c as f64 / trials as f64)
            .collect(),
    }
}

/// Build the sorted summary from profiles and their score vectors.
pub fn summarize(
    event: &str,
    profiles: &[CompetitorProfile],
    scores: &[Vec<f64>],
    trials: usize,
) -> OutcomeSummary {
    let tally = tally_scores(scores, trials);

    let mut rows: Vec<OutcomeRow> = profiles
        .iter()
        .enumerate()
        .map(|(i, p)| OutcomeRow {
            id: p.id.clone(),
            name: p.name.clone(),
            win_probability: tally.win[i],
            podium_probability: tally.podium[i],
        })
        .collect();

    // Stable sort keeps original competitor order for equal win probabilities.
    rows.sort_by(|a, b| b.win_probability.total_cmp(&a.win_probability));

    OutcomeSummary {
        event: event.to_string(),
        trials,
        rows,
    }
}
