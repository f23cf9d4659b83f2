//! Timed ritual minigames and the shared terminal-state contract.
//! This module exists to keep the countdown and timeout polarity in one place for all variants.
//! It does not own ritual costs, effects, or menu presentation.

pub mod aura;
pub mod context;
pub mod drag;
pub mod symbol;

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::geometry::FrameInput;
use crate::output::FrameOutput;

pub use aura::AuraRitual;
pub use context::RitualContext;
pub use drag::DragRitual;
pub use symbol::SymbolRitual;

/// Timeout polarity: what running out the clock means.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RitualKind {
    /// The player endured; timeout is a success.
    Resist,
    /// The player ran out of time; timeout is a failure.
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MinigameState {
    Invalid,
    InProgress,
    Success,
    Failure,
}

impl MinigameState {
    pub fn is_terminal(self) -> bool {
        matches!(self, MinigameState::Success | MinigameState::Failure)
    }
}

/// Terminal outcome a variant asks for during its own update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Success,
    Failure,
}

#[derive(Clone, Debug)]
pub enum Challenge {
    Symbol(SymbolRitual),
    Aura(AuraRitual),
    Drag(DragRitual),
}

impl Challenge {
    fn update(&mut self, dt: f32, input: &FrameInput, out: &mut FrameOutput) -> Option<Verdict> {
        match self {
            Challenge::Symbol(symbol) => symbol.update(dt, input.pointer, out),
            Challenge::Aura(aura) => aura.update(dt, input.pointer, out),
            Challenge::Drag(drag) => drag.update(dt, input.pointer, out),
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        match self {
            Challenge::Symbol(symbol) => symbol.draw(canvas),
            Challenge::Aura(aura) => aura.draw(canvas),
            Challenge::Drag(drag) => drag.draw(canvas),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Minigame {
    state: MinigameState,
    time_left: f32,
    kind: RitualKind,
    challenge: Challenge,
}

impl Minigame {
    pub fn new(kind: RitualKind, challenge: Challenge) -> Self {
        Self { state: MinigameState::Invalid, time_left: 0.0, kind, challenge }
    }

    /// Arm the countdown with `duration` frame-time units.
    pub fn start(&mut self, duration: f32) {
        self.time_left = duration;
        self.state = MinigameState::InProgress;
    }

    pub fn state(&self) -> MinigameState {
        self.state
    }

    pub fn kind(&self) -> RitualKind {
        self.kind
    }

    pub fn time_left(&self) -> f32 {
        self.time_left
    }

    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// Countdown first, then the variant's own checks. A verdict from the
    /// variant this frame takes precedence over the timeout default.
    pub fn update(&mut self, dt: f32, input: &FrameInput, out: &mut FrameOutput) {
        if self.state != MinigameState::InProgress {
            return;
        }

        self.time_left -= dt;
        let timeout = (self.time_left <= 0.0).then_some(match self.kind {
            RitualKind::Resist => Verdict::Success,
            RitualKind::Complete => Verdict::Failure,
        });

        let verdict = self.challenge.update(dt, input, out).or(timeout);
        match verdict {
            Some(Verdict::Success) => self.success(),
            Some(Verdict::Failure) => self.failure(),
            None => {}
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.challenge.draw(canvas);
    }

    fn success(&mut self) {
        if self.state == MinigameState::InProgress {
            self.state = MinigameState::Success;
        }
    }

    fn failure(&mut self) {
        if self.state == MinigameState::InProgress {
            self.state = MinigameState::Failure;
        }
    }
}
