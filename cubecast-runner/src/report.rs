//! Fixed-width text report for an outcome summary.

use crate::outcome::OutcomeSummary;
use std::fmt::Write;

/// Render the odds table. Times are never shown, only rank probabilities.
pub fn render_table(summary: &OutcomeSummary) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Event {}: {} simulated competitions",
        summary.event, summary.trials
    );
    let _ = writeln!(
        out,
        "{:<11} {:<28} {:>8} {:>9}",
        "WCA ID", "Name", "Win %", "Podium %"
    );
    let _ = writeln!(out, "{}", "-".repeat(59));

    for row in &summary.rows {
        let _ = writeln!(
            out,
            "{:<11} {:<28} {:>7.3}% {:>8.3}%",
            row.id,
            row.name,
            row.win_probability * 100.0,
            row.podium_probability * 100.0
        );
    }

    out
}
