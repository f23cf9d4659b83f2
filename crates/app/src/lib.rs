pub mod app_loop;
pub mod config;
pub mod seed;
pub mod viewport;

use battle::Outcome;

pub const APP_NAME: &str = "Demon Cleansing";

/// Format a snapshot hash as `0x` followed by exactly 16 lowercase hex digits.
pub fn format_snapshot_hash(hash: u64) -> String {
    format!("0x{hash:016x}")
}

/// Line shown on the title screen after a run settles.
pub fn outcome_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Victory => "Every demon was cleansed.",
        Outcome::Defeat => "The demons prevailed.",
    }
}
