//! Headless match runner.
//!
//! Plays one match against the bots with a scripted autopilot, optionally
//! paced at the real tick rate, and prints the outcome.

mod autopilot;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use shockers_core::constants::TICK_RATE;
use shockers_core::enums::{BulletOwner, MatchPhase, WeaponKind};
use shockers_core::events::GameEvent;
use shockers_core::state::MatchResult;
use shockers_core::tuning::Tuning;
use shockers_sim::{SimConfig, SimulationEngine};

use crate::autopilot::Autopilot;

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

#[derive(Parser)]
#[command(author, version, about = "Run a SHOCKERS match headless", long_about = None)]
struct Args {
    /// RNG seed; the same seed replays the same match
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Loadout: eggk-47, scrambler or free-ranger
    #[arg(short, long, default_value_t = WeaponKind::Eggk47)]
    weapon: WeaponKind,

    /// Stop after this many ticks if the match is still running
    #[arg(long, default_value_t = 5 * 60 * TICK_RATE as u64)]
    max_ticks: u64,

    /// JSON file overriding gameplay tuning
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Pace ticks at wall-clock speed
    #[arg(long, default_value_t = false)]
    realtime: bool,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    weapon: WeaponKind,
    ticks: u64,
    sim_secs: f64,
    shots_fired: u32,
    player_health: u32,
    score: u32,
    result: Option<MatchResult>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let tuning = match &args.tuning {
        Some(path) => Tuning::from_path(path)
            .with_context(|| format!("failed to load tuning from {}", path.display()))?,
        None => Tuning::default(),
    };

    info!(seed = args.seed, weapon = %args.weapon, "starting match");
    let summary = run_match(&args, tuning)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{json}");
    } else {
        match summary.result {
            Some(result) => println!(
                "{} after {:.1}s: score {} ({:?})",
                if result.won { "won" } else { "lost" },
                summary.sim_secs,
                result.score,
                result.reason
            ),
            None => println!(
                "unfinished after {} ticks: score {}, health {}",
                summary.ticks, summary.score, summary.player_health
            ),
        }
    }

    Ok(())
}

fn run_match(args: &Args, tuning: Tuning) -> Result<RunSummary> {
    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        weapon: args.weapon,
        tuning,
    })
    .context("invalid tuning")?;
    let mut pilot = Autopilot::default();
    let mut shots_fired = 0;
    let mut ticks = 0;
    let mut next_tick_time = Instant::now();

    let mut snapshot = engine.tick();
    ticks += 1;
    while snapshot.phase != MatchPhase::Ended && ticks < args.max_ticks {
        engine.queue_commands(pilot.commands(&snapshot));
        snapshot = engine.tick();
        ticks += 1;

        shots_fired += snapshot
            .events
            .iter()
            .filter(|e| {
                **e == GameEvent::ShotFired {
                    owner: BulletOwner::Player,
                }
            })
            .count() as u32;

        if args.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                std::thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind: reset instead of bursting to catch up
                next_tick_time = now;
            }
        }
    }

    Ok(RunSummary {
        seed: args.seed,
        weapon: args.weapon,
        ticks,
        sim_secs: snapshot.time.elapsed_secs,
        shots_fired,
        player_health: snapshot.player.health,
        score: snapshot.player.score,
        result: engine.result(),
    })
}
