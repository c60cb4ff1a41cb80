//! Simulation orchestrator.
//!
//! Fits every competitor before any sampling starts, so configuration and
//! data errors abort the run with no partial output. Sampling then fans out
//! one unit of work per competitor over rayon; each unit receives plain
//! copyable inputs (fitted parameters, DNF rate, format, trial count) and an
//! independently seeded RNG, so no state crosses workers. The `collect` join
//! preserves competitor order regardless of completion order.

use crate::config::SimulationConfig;
use crate::outcome::{summarize, OutcomeSummary};
use cubecast_core::data::ResultsProvider;
use cubecast_core::domain::{CompetitorProfile, Entrant};
use cubecast_core::fit::{fit_profile, FittedGamma};
use cubecast_core::formats::EventFormatTable;
use cubecast_core::profile::build_profile;
use cubecast_core::rng::SeedHierarchy;
use cubecast_core::sampler::sample_scores;
use cubecast_core::SimError;
use rayon::prelude::*;

/// Pull attempt history for every roster entrant and build profiles.
///
/// Entrants with no qualifying history are excluded here; they never enter
/// the simulation and never appear in the output. Collaborator failures
/// propagate immediately.
pub fn prepare_profiles(
    provider: &dyn ResultsProvider,
    roster: &[Entrant],
    config: &SimulationConfig,
) -> Result<Vec<CompetitorProfile>, SimError> {
    let mut profiles = Vec::with_capacity(roster.len());
    for entrant in roster {
        let records = provider.attempt_history(&config.event, &entrant.id, config.lookback_days)?;
        if let Some(profile) = build_profile(entrant, &records, config.half_life_days) {
            profiles.push(profile);
        }
    }
    Ok(profiles)
}

/// Run the Monte Carlo simulation and aggregate win/podium odds.
///
/// The format lookup and every gamma fit happen up front; sampling begins
/// only once the whole run is known to be well-configured.
pub fn run_simulation(
    profiles: &[CompetitorProfile],
    formats: &EventFormatTable,
    config: &SimulationConfig,
) -> Result<OutcomeSummary, SimError> {
    let format = *formats.get(&config.event)?;

    let fitted: Vec<FittedGamma> = profiles
        .iter()
        .map(fit_profile)
        .collect::<Result<_, _>>()?;

    let seeds = SeedHierarchy::new(config.master_seed);
    let scores: Vec<Vec<f64>> = profiles
        .par_iter()
        .zip(fitted.par_iter())
        .map(|(profile, dist)| {
            let mut rng = seeds.rng_for(&config.event, &profile.id);
            sample_scores(dist, profile.dnf_rate, &format, config.trials, &mut rng)
        })
        .collect();

    Ok(summarize(&config.event, profiles, &scores, config.trials))
}
