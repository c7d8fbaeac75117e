//! skirmish: play rounds of the battlefield router from the command line.
//!
//! Each round generates a map, places units, finds and deconflicts their
//! routes, then prints every unit's route on its own copy of the map.
//! Logs go to stderr (`RUST_LOG` overrides the default `info` level), so
//! stdout carries only the maps or, with `--json`, one JSON document per round.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use bf_core::{RoundConfig, RoundLimits, RoundRng};
use bf_render::{help_text, render_round, render_terrain};
use bf_round::{NoopObserver, RoundBuilder, RoundOutcome};
use bf_route::DfsRouter;

// ── Command line ──────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Side length of a square map
    #[arg(long, default_value_t = 8)]
    size: usize,

    /// Row count (overrides --size)
    #[arg(long)]
    rows: Option<usize>,

    /// Column count (overrides --size)
    #[arg(long)]
    cols: Option<usize>,

    /// Number of units
    #[arg(long, default_value_t = 2)]
    units: usize,

    /// Percentage of elevated terrain
    #[arg(long, default_value_t = 20)]
    elevation: u8,

    /// Session seed; each round derives its own seed from it
    #[arg(long)]
    seed: Option<u64>,

    /// Number of rounds to play
    #[arg(long, default_value_t = 1)]
    rounds: u64,

    /// Print each round as JSON instead of maps
    #[arg(long)]
    json: bool,

    /// Print the legend and parameter ranges before playing
    #[arg(long)]
    legend: bool,
}

impl Args {
    fn round_config(&self, round: u64, session_seed: u64) -> RoundConfig {
        let mut config = RoundConfig::square(self.size, self.units, self.elevation)
            .with_seed(RoundRng::round_seed(session_seed, round));
        config.rows = self.rows.unwrap_or(self.size);
        config.cols = self.cols.unwrap_or(self.size);
        config
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let limits = RoundLimits::default();

    if args.legend {
        println!("{}", help_text(&limits));
    }

    let session_seed = args.seed.unwrap_or_else(|| RoundRng::from_entropy().next_u64());
    tracing::info!(session_seed, rounds = args.rounds, "session starting");

    for round in 0..args.rounds {
        let config = args.round_config(round, session_seed);
        config
            .validate(&limits)
            .context("invalid round parameters")?;

        let outcome = RoundBuilder::new(config, DfsRouter)
            .limits(limits.clone())
            .build()?
            .run(&mut NoopObserver)
            .with_context(|| format!("round {round} could not be played"))?;

        if args.json {
            println!("{}", serde_json::to_string(&outcome)?);
        } else {
            print_round(round, &outcome);
        }
    }

    Ok(())
}

fn print_round(round: u64, outcome: &RoundOutcome) {
    println!("=== Round {} (seed {}) ===", round + 1, outcome.seed);
    println!("{}", render_terrain(&outcome.grid));
    println!("{}", render_round(&outcome.grid, &outcome.endpoints, &outcome.routes));

    let conflicts = outcome.conflicts();
    if outcome.report.stalled || !conflicts.is_empty() {
        let blocked = if outcome.report.stalled {
            let units: Vec<String> =
                outcome.report.blocked.iter().map(|u| format!("Unit {}", u.0)).collect();
            format!("; {} block each other", units.join(", "))
        } else {
            String::new()
        };
        println!("Note: {} unresolved encounter(s){blocked}", conflicts.len());
    }
}
