//! Holder for the one minigame currently being played.
//! Outcome queries made while no started minigame is held are logic defects and panic.

use super::{Minigame, MinigameState};
use crate::canvas::{Canvas, TextStyle};
use crate::geometry::{FrameInput, SCREEN_WIDTH, Vec2, ft_to_seconds};
use crate::output::FrameOutput;

#[derive(Debug, Default)]
pub struct RitualContext {
    minigame: Option<Minigame>,
}

impl RitualContext {
    pub fn new() -> Self {
        Self::default()
    }

    fn active(&self) -> &Minigame {
        match &self.minigame {
            Some(game) if game.state() != MinigameState::Invalid => game,
            _ => panic!("ritual context queried without a started minigame"),
        }
    }

    /// Replace any previous minigame and start the new one.
    pub fn set_and_start(&mut self, duration: f32, mut minigame: Minigame) {
        minigame.start(duration);
        self.minigame = Some(minigame);
    }

    pub fn discard(&mut self) {
        self.minigame = None;
    }

    pub fn minigame(&self) -> Option<&Minigame> {
        self.minigame.as_ref()
    }

    pub fn state(&self) -> MinigameState {
        self.active().state()
    }

    pub fn is_in_progress(&self) -> bool {
        self.state() == MinigameState::InProgress
    }

    pub fn is_success(&self) -> bool {
        self.state() == MinigameState::Success
    }

    pub fn is_failure(&self) -> bool {
        self.state() == MinigameState::Failure
    }

    /// Whole seconds left on the clock, as shown to the player.
    pub fn seconds_left(&self) -> i32 {
        ft_to_seconds(self.active().time_left()) as i32
    }

    pub fn update(&mut self, dt: f32, input: &FrameInput, out: &mut FrameOutput) {
        match self.minigame.as_mut() {
            Some(game) if game.state() != MinigameState::Invalid => game.update(dt, input, out),
            _ => panic!("ritual context updated without a started minigame"),
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let minigame = self.active();
        minigame.draw(canvas);
        canvas.text(
            Vec2::new(SCREEN_WIDTH - 120.0, 20.0),
            &format!("Time left: {}", self.seconds_left()),
            TextStyle::Small,
            0.0,
        );
    }
}
