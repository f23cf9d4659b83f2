use std::path::PathBuf;

use anyhow::{Context, Result};
use battle::{PilotPolicy, RosterConfig, SessionConfig, run_to_outcome};
use clap::{Parser, ValueEnum};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Policy {
    Balanced,
    Cheapest,
}

impl From<Policy> for PilotPolicy {
    fn from(policy: Policy) -> Self {
        match policy {
            Policy::Balanced => PilotPolicy::Balanced,
            Policy::Cheapest => PilotPolicy::Cheapest,
        }
    }
}

/// Play a session headlessly with the scripted pilot and report how it ended.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Roster TOML file; the standard four demons when omitted
    #[arg(short, long)]
    roster: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = Policy::Balanced)]
    policy: Policy,
    #[arg(long, default_value_t = 200_000)]
    max_frames: u64,
    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let roster = match &args.roster {
        Some(path) => RosterConfig::load(path)
            .with_context(|| format!("Failed to load roster: {}", path.display()))?,
        None => RosterConfig::default(),
    };
    let session = SessionConfig::new(args.seed).with_roster(roster);
    let report = run_to_outcome(&session, args.policy.into(), args.max_frames)
        .context("Failed to start the session")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Run complete.");
    println!("Seed: {}", report.seed);
    println!("Final Frame: {}", report.final_frame);
    println!("Outcome: {:?}", report.final_outcome);
    println!("Encounters Cleared: {}", report.encounters_cleared);
    println!("Rituals Failed: {}", report.rituals_failed);
    println!("Snapshot Hash: 0x{:016x}", report.final_snapshot_hash);

    Ok(())
}
