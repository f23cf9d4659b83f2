//! Title screen and battle session switching.
//! This module exists so the desktop shell stays a thin polling loop over testable state.
//! It does not own windowing, input polling or drawing primitives.

use battle::geometry::screen_center;
use battle::{
    Canvas, ConfigError, FrameInput, FrameOutput, Outcome, ScreenStack, SessionConfig, TextStyle,
};

use crate::seed::run_seed;
use crate::{APP_NAME, format_snapshot_hash, outcome_line};

/// Frame-time units the title screen ignores clicks for.
pub const TITLE_GUARD_FT: f32 = 50.0;
pub const TITLE_PROMPT: &str = "Press LMB to play.";

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Title,
    Battle,
}

pub struct AppState {
    pub mode: AppMode,
    session: SessionConfig,
    stack: Option<ScreenStack>,
    title_guard: f32,
    runs_started: u64,
    last_outcome: Option<Outcome>,
}

impl AppState {
    pub fn new(session: SessionConfig) -> Self {
        Self {
            mode: AppMode::Title,
            session,
            stack: None,
            title_guard: TITLE_GUARD_FT,
            runs_started: 0,
            last_outcome: None,
        }
    }

    pub fn stack(&self) -> Option<&ScreenStack> {
        self.stack.as_ref()
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn runs_started(&self) -> u64 {
        self.runs_started
    }

    /// Process one frame. Only starting a run can fail, and only on a bad roster.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &FrameInput,
        out: &mut FrameOutput,
    ) -> Result<(), ConfigError> {
        match self.mode {
            AppMode::Title => {
                self.title_guard -= dt;
                if self.title_guard < 0.0 && input.primary {
                    self.start_run()?;
                }
            }
            AppMode::Battle => {
                let Some(stack) = self.stack.as_mut() else {
                    self.return_to_title();
                    return Ok(());
                };
                stack.update(dt, input, out);
                // A lost run ends when the battle screen closes itself; a won one stays open.
                if stack.closed() || stack.settled_outcome() == Some(Outcome::Victory) {
                    self.finish_run();
                }
            }
        }
        Ok(())
    }

    fn start_run(&mut self) -> Result<(), ConfigError> {
        let seed = run_seed(self.session.seed, self.runs_started);
        let session = SessionConfig { seed, roster: self.session.roster.clone() };
        self.stack = Some(session.start()?);
        self.runs_started += 1;
        self.mode = AppMode::Battle;
        log::info!("run {} started with seed {seed}", self.runs_started);
        Ok(())
    }

    fn finish_run(&mut self) {
        if let Some(stack) = self.stack.take() {
            let battle = stack.battle();
            self.last_outcome = battle.outcome();
            log::info!(
                "run {} ended: {:?} at frame {}, snapshot {}",
                self.runs_started,
                self.last_outcome,
                battle.frame(),
                format_snapshot_hash(battle.snapshot_hash())
            );
        }
        self.return_to_title();
    }

    fn return_to_title(&mut self) {
        self.mode = AppMode::Title;
        self.title_guard = TITLE_GUARD_FT;
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        match (&self.mode, &self.stack) {
            (AppMode::Battle, Some(stack)) => stack.draw(canvas),
            _ => {
                let center = screen_center();
                canvas.text(center.offset(0.0, -80.0), APP_NAME, TextStyle::Big, 0.0);
                canvas.text(center, TITLE_PROMPT, TextStyle::Small, 0.0);
                if let Some(outcome) = self.last_outcome {
                    let line = outcome_line(outcome);
                    canvas.text(center.offset(0.0, 60.0), line, TextStyle::Small, 0.0);
                }
            }
        }
    }
}
