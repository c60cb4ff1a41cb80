//! CubeCast CLI — win/podium odds for official WCA competitions.
//!
//! Commands:
//! - `roster` — list the entrants that would be simulated for an event
//! - `simulate` — run the Monte Carlo simulation and print the odds table

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use cubecast_core::data::wcif::DEFAULT_ROSTER_SIZE;
use cubecast_core::data::{CsvResultsStore, RosterClient};
use cubecast_core::formats::EventFormatTable;
use cubecast_runner::report::render_table;
use cubecast_runner::{prepare_profiles, run_simulation, SimulationConfig};

#[derive(Parser)]
#[command(
    name = "cubecast",
    about = "CubeCast — win/podium odds for WCA competitions"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the entrants that would be simulated for an event.
    Roster {
        /// WCA competition id (e.g. WC2025).
        competition_id: String,

        /// WCA event id (e.g. 333).
        event: String,

        /// Roster cap: top N seeds by average world ranking.
        #[arg(long, default_value_t = DEFAULT_ROSTER_SIZE)]
        max_competitors: usize,
    },
    /// Run the Monte Carlo simulation and print win/podium odds.
    Simulate {
        /// WCA competition id (e.g. WC2025).
        competition_id: String,

        /// WCA event id (e.g. 333).
        event: String,

        /// Path to a TOML config file. CLI flags override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Number of simulated competitions.
        #[arg(short = 'n', long)]
        trials: Option<usize>,

        /// Master seed for reproducible runs.
        #[arg(long)]
        seed: Option<u64>,

        /// Recency half-life in days.
        #[arg(long)]
        half_life_days: Option<f64>,

        /// Attempt-history lookback window in days.
        #[arg(long)]
        lookback_days: Option<i64>,

        /// Roster cap: top N seeds by average world ranking.
        #[arg(long)]
        max_competitors: Option<usize>,

        /// Joined WCA results export CSV.
        #[arg(long, default_value = "data/results.csv")]
        results_csv: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Roster {
            competition_id,
            event,
            max_competitors,
        } => run_roster(&competition_id, &event, max_competitors),
        Commands::Simulate {
            competition_id,
            event,
            config,
            trials,
            seed,
            half_life_days,
            lookback_days,
            max_competitors,
            results_csv,
        } => {
            let mut sim_config = match config {
                Some(path) => SimulationConfig::from_file(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => SimulationConfig::default(),
            };
            sim_config.event = event;
            if let Some(trials) = trials {
                sim_config.trials = trials;
            }
            if let Some(seed) = seed {
                sim_config.master_seed = seed;
            }
            if let Some(days) = half_life_days {
                sim_config.half_life_days = days;
            }
            if let Some(days) = lookback_days {
                sim_config.lookback_days = days;
            }
            if let Some(max) = max_competitors {
                sim_config.max_competitors = max;
            }
            sim_config.validate()?;

            run_simulate(&competition_id, &sim_config, &results_csv)
        }
    }
}

fn run_roster(competition_id: &str, event: &str, max_competitors: usize) -> Result<()> {
    let client = RosterClient::new();
    let roster = client
        .fetch_roster(competition_id, event, max_competitors)
        .with_context(|| format!("fetching roster for {competition_id}/{event}"))?;

    if roster.is_empty() {
        println!("No entrants registered for {event} at {competition_id}.");
        return Ok(());
    }

    println!("{:<11} Name", "WCA ID");
    for entrant in &roster {
        println!("{:<11} {}", entrant.id, entrant.name);
    }
    Ok(())
}

fn run_simulate(
    competition_id: &str,
    config: &SimulationConfig,
    results_csv: &Path,
) -> Result<()> {
    // Fail on a bad event id before touching the network or the store.
    let formats = EventFormatTable::wca_defaults();
    formats.get(&config.event)?;

    let client = RosterClient::new();
    let roster = client
        .fetch_roster(competition_id, &config.event, config.max_competitors)
        .with_context(|| format!("fetching roster for {competition_id}/{}", config.event))?;
    if roster.is_empty() {
        println!(
            "No entrants registered for {} at {competition_id}.",
            config.event
        );
        return Ok(());
    }

    let store = CsvResultsStore::open(results_csv)
        .with_context(|| format!("opening results store {}", results_csv.display()))?;

    let profiles = prepare_profiles(&store, &roster, config)?;
    if profiles.is_empty() {
        println!("No entrant has qualifying history in the lookback window.");
        return Ok(());
    }
    if profiles.len() < roster.len() {
        println!(
            "Excluded {} entrant(s) with no qualifying history.",
            roster.len() - profiles.len()
        );
    }

    let summary = run_simulation(&profiles, &formats, config)?;
    print!("{}", render_table(&summary));
    Ok(())
}
