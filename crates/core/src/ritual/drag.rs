//! Drag-to-target ritual: carry every token into a target, one at a time.

use super::Verdict;
use crate::canvas::{Canvas, Tint};
use crate::geometry::Vec2;
use crate::output::{FrameOutput, SoundCue};

pub const DRAG_TOKEN_RADIUS: f32 = 21.0;
pub const DRAG_TARGET_SIZE: f32 = 78.0;
/// Centre-to-centre distance at which a token is deposited.
pub const DRAG_CAPTURE_DISTANCE: f32 = 60.0;
/// Degrees per frame-time unit; purely cosmetic.
pub const DRAG_TARGET_SPIN: f32 = 0.5;

#[derive(Clone, Debug)]
pub struct DragTarget {
    pub center: Vec2,
    pub rotation: f32,
}

#[derive(Clone, Debug)]
pub struct DragToken {
    pub position: Vec2,
    pub radius: f32,
    pub deposited: bool,
}

#[derive(Clone, Debug, Default)]
pub struct DragRitual {
    targets: Vec<DragTarget>,
    tokens: Vec<DragToken>,
    held: Option<usize>,
}

impl DragRitual {
    /// Targets and tokens are placed in absolute screen coordinates.
    pub fn add_target(&mut self, center: Vec2) {
        self.targets.push(DragTarget { center, rotation: 0.0 });
    }

    pub fn add_draggable(&mut self, position: Vec2) {
        self.tokens.push(DragToken { position, radius: DRAG_TOKEN_RADIUS, deposited: false });
    }

    pub fn targets(&self) -> &[DragTarget] {
        &self.targets
    }

    pub fn tokens(&self) -> &[DragToken] {
        &self.tokens
    }

    pub fn held(&self) -> Option<usize> {
        self.held
    }

    fn in_any_target(&self, position: Vec2) -> bool {
        self.targets.iter().any(|target| position.distance(target.center) < DRAG_CAPTURE_DISTANCE)
    }

    pub(super) fn update(
        &mut self,
        dt: f32,
        pointer: Vec2,
        out: &mut FrameOutput,
    ) -> Option<Verdict> {
        if self.held.is_some_and(|index| self.tokens[index].deposited) {
            self.held = None;
        }

        for index in 0..self.tokens.len() {
            let token = &self.tokens[index];
            if !token.deposited
                && self.held.is_none()
                && pointer.distance(token.position) < token.radius
            {
                self.held = Some(index);
                out.play(SoundCue::Bip);
            }

            if self.held != Some(index) {
                continue;
            }

            // Only the held token can be deposited.
            self.tokens[index].position = pointer;
            if self.in_any_target(pointer) {
                let token = &mut self.tokens[index];
                token.radius = 0.0;
                token.deposited = true;
                out.play(SoundCue::Blip);
                self.held = None;
            }
        }

        for target in &mut self.targets {
            target.rotation += dt * DRAG_TARGET_SPIN;
        }

        self.tokens.iter().all(|token| token.deposited).then_some(Verdict::Success)
    }

    pub(super) fn draw(&self, canvas: &mut dyn Canvas) {
        for target in &self.targets {
            canvas.square(target.center, DRAG_TARGET_SIZE, target.rotation, Tint::Target);
        }
        for (index, token) in self.tokens.iter().enumerate() {
            if token.deposited {
                continue;
            }
            let tint = if self.held == Some(index) { Tint::Engaged } else { Tint::Pending };
            canvas.circle(token.position, token.radius, tint);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_tokens() -> DragRitual {
        let mut ritual = DragRitual::default();
        ritual.add_target(Vec2::new(500.0, 400.0));
        ritual.add_draggable(Vec2::new(100.0, 100.0));
        ritual.add_draggable(Vec2::new(110.0, 100.0));
        ritual
    }

    #[test]
    fn hovering_picks_up_exactly_one_token() {
        let mut ritual = two_tokens();
        let mut out = FrameOutput::new();
        // Both tokens are under the pointer; only the first is held.
        ritual.update(1.0, Vec2::new(105.0, 100.0), &mut out);
        assert_eq!(ritual.held(), Some(0));
        assert_eq!(ritual.tokens()[0].position, Vec2::new(105.0, 100.0));
        assert_eq!(ritual.tokens()[1].position, Vec2::new(110.0, 100.0));
        assert_eq!(out.cues, vec![SoundCue::Bip]);
    }

    #[test]
    fn held_token_follows_pointer_and_deposits() {
        let mut ritual = two_tokens();
        let mut out = FrameOutput::new();
        ritual.update(1.0, Vec2::new(100.0, 100.0), &mut out);
        ritual.update(1.0, Vec2::new(300.0, 300.0), &mut out);
        assert_eq!(ritual.tokens()[0].position, Vec2::new(300.0, 300.0));
        assert_eq!(ritual.update(1.0, Vec2::new(490.0, 400.0), &mut out), None);
        assert!(ritual.tokens()[0].deposited);
        assert_eq!(ritual.tokens()[0].radius, 0.0);
        assert_eq!(ritual.held(), None);
        assert_eq!(out.cues, vec![SoundCue::Bip, SoundCue::Blip]);
    }

    #[test]
    fn last_deposit_succeeds_on_that_frame() {
        let mut ritual = two_tokens();
        let mut out = FrameOutput::new();
        ritual.update(1.0, Vec2::new(100.0, 100.0), &mut out);
        ritual.update(1.0, Vec2::new(500.0, 400.0), &mut out);
        ritual.update(1.0, Vec2::new(110.0, 100.0), &mut out);
        assert_eq!(ritual.held(), Some(1));
        assert_eq!(ritual.update(1.0, Vec2::new(505.0, 395.0), &mut out), Some(Verdict::Success));
    }

    #[test]
    fn unheld_token_in_range_stays_pending() {
        let mut ritual = DragRitual::default();
        ritual.add_target(Vec2::new(500.0, 400.0));
        ritual.add_draggable(Vec2::new(520.0, 400.0));
        let mut out = FrameOutput::new();
        assert_eq!(ritual.update(1.0, Vec2::ZERO, &mut out), None);
        assert!(!ritual.tokens()[0].deposited);
        assert_eq!(ritual.held(), None);
        assert!(out.cues.is_empty());

        // Touching it picks it up, and it is deposited where it lies.
        assert_eq!(ritual.update(1.0, Vec2::new(525.0, 400.0), &mut out), Some(Verdict::Success));
        assert!(ritual.tokens()[0].deposited);
        assert_eq!(out.cues, vec![SoundCue::Bip, SoundCue::Blip]);
    }

    #[test]
    fn targets_rotate() {
        let mut ritual = two_tokens();
        ritual.update(4.0, Vec2::ZERO, &mut FrameOutput::new());
        assert_eq!(ritual.targets()[0].rotation, 2.0);
    }
}
