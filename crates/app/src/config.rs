//! Session configuration for the desktop app.
//! This module exists to turn environment variables and the config directory into a session.
//! It does not own roster parsing; `battle::config` does.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use battle::{RosterConfig, SessionConfig};
use directories::ProjectDirs;

use crate::APP_NAME;
use crate::seed::resolve_seed;

pub const SEED_ENV: &str = "DEMON_SEED";
pub const ROSTER_ENV: &str = "DEMON_ROSTER";

pub fn default_roster_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", APP_NAME).map(|proj_dirs| {
        let mut path = proj_dirs.config_dir().to_path_buf();
        path.push("roster.toml");
        path
    })
}

/// An explicit roster path must load; the default path is used only when the file exists.
pub fn resolve_roster(explicit: Option<&Path>, default: Option<&Path>) -> Result<RosterConfig> {
    if let Some(path) = explicit {
        return RosterConfig::load(path)
            .with_context(|| format!("Failed to load roster from {ROSTER_ENV}"));
    }
    match default {
        Some(path) if path.exists() => {
            RosterConfig::load(path).context("Failed to load the saved roster")
        }
        _ => Ok(RosterConfig::default()),
    }
}

pub fn resolve_session(
    seed_var: Option<&str>,
    roster_var: Option<&str>,
    default_roster: Option<&Path>,
    generated_seed: u64,
) -> Result<SessionConfig> {
    let seed = resolve_seed(seed_var, generated_seed).map_err(|err| anyhow!(err))?;
    let roster = resolve_roster(roster_var.map(Path::new), default_roster)?;
    log::info!("session seed {seed:?}, {} demons", roster.enemies.len());
    Ok(SessionConfig::new(seed.value()).with_roster(roster))
}
