//! Headless runs: a pilot plays a session until it settles or a frame budget runs out.
//! This module exists so tools and tests share one definition of "a finished run".
//! It does not own input policy; that lives in `pilot`.

use serde::Serialize;

use crate::config::{ConfigError, SessionConfig};
use crate::geometry::FrameInput;
use crate::output::{FrameOutput, ScreenCommand};
use crate::pilot::{Pilot, PilotPolicy};
use crate::screen::Outcome;
use crate::stack::ScreenStack;

/// One frame-time unit per rendered frame, as at 60 frames per second.
pub const HEADLESS_DT: f32 = 1.0;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    pub seed: u64,
    /// `None` when the frame budget ran out first.
    pub final_outcome: Option<Outcome>,
    pub final_frame: u64,
    pub final_snapshot_hash: u64,
    pub encounters_cleared: usize,
    pub rituals_failed: u32,
}

/// True once nothing is left to play: the outcome is settled or the screen closed.
pub fn is_finished(stack: &ScreenStack) -> bool {
    stack.closed() || stack.settled_outcome().is_some()
}

/// Drive `stack` with `next_input` until it finishes or `max_frames` frames pass.
pub fn drive(
    stack: &mut ScreenStack,
    max_frames: u64,
    mut next_input: impl FnMut(&ScreenStack) -> FrameInput,
    mut inspect: impl FnMut(&ScreenStack, &FrameOutput),
) -> u32 {
    let mut out = FrameOutput::new();
    let mut rituals_failed = 0;
    for _ in 0..max_frames {
        if is_finished(stack) {
            break;
        }
        let input = next_input(&*stack);
        stack.update(HEADLESS_DT, &input, &mut out);
        inspect(&*stack, &out);
        rituals_failed += out
            .commands
            .iter()
            .filter(|command| matches!(command, ScreenCommand::ShakeScreen(_)))
            .count() as u32;
        out.clear();
    }
    rituals_failed
}

pub fn report(stack: &ScreenStack, rituals_failed: u32) -> RunReport {
    let battle = stack.battle();
    let final_outcome = stack.settled_outcome();
    let cleared_current = usize::from(final_outcome == Some(Outcome::Victory));
    RunReport {
        seed: battle.seed(),
        final_outcome,
        final_frame: battle.frame(),
        final_snapshot_hash: battle.snapshot_hash(),
        encounters_cleared: battle.encounter_index() + cleared_current,
        rituals_failed,
    }
}

/// Play `session` with a fresh pilot following `policy`.
pub fn run_to_outcome(
    session: &SessionConfig,
    policy: PilotPolicy,
    max_frames: u64,
) -> Result<RunReport, ConfigError> {
    let mut stack = session.start()?;
    let mut pilot = Pilot::new(policy);
    log::info!("headless run: seed {}, {policy:?}, budget {max_frames} frames", session.seed);
    let failed = drive(&mut stack, max_frames, |stack| pilot.next_input(stack), |_, _| {});
    let report = report(&stack, failed);
    log::info!("run finished: {:?} after {} frames", report.final_outcome, report.final_frame);
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_exhaustion_reports_no_outcome() {
        let report = run_to_outcome(&SessionConfig::new(1), PilotPolicy::Balanced, 50)
            .expect("session starts");
        assert_eq!(report.final_outcome, None);
        assert_eq!(report.final_frame, 50);
        assert_eq!(report.encounters_cleared, 0);
    }
}
