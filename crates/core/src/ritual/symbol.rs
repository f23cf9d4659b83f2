//! Sequential-hit ritual: touch numbered points strictly in order.

use super::Verdict;
use crate::canvas::{Canvas, TextStyle, Tint};
use crate::geometry::{Vec2, screen_center};
use crate::output::{FrameOutput, SoundCue};

/// Declared radii are scaled by this for display and hit-testing.
pub const SYMBOL_RADIUS_SCALE: f32 = 2.8;
/// Radius lost per frame-time unit once a point is hit.
pub const SYMBOL_SHRINK_RATE: f32 = 1.0;

#[derive(Clone, Debug)]
pub struct SymbolPoint {
    pub center: Vec2,
    pub radius: f32,
    pub hit: bool,
}

#[derive(Clone, Debug, Default)]
pub struct SymbolRitual {
    points: Vec<SymbolPoint>,
}

impl SymbolRitual {
    /// Add a point at `offset` from the screen centre.
    pub fn add_point(&mut self, offset: Vec2, radius: f32) {
        self.points.push(SymbolPoint {
            center: screen_center() + offset,
            radius: radius * SYMBOL_RADIUS_SCALE,
            hit: false,
        });
    }

    pub fn points(&self) -> &[SymbolPoint] {
        &self.points
    }

    pub fn is_hit(&self, index: usize) -> bool {
        self.points[index].hit
    }

    /// The point that must be touched next, if any remain.
    pub fn next_point(&self) -> Option<&SymbolPoint> {
        self.points.iter().find(|point| !point.hit)
    }

    fn all_hit_before(&self, index: usize) -> bool {
        self.points[..index].iter().all(|point| point.hit)
    }

    fn all_hit(&self) -> bool {
        self.points.iter().all(|point| point.hit)
    }

    pub(super) fn update(
        &mut self,
        dt: f32,
        pointer: Vec2,
        out: &mut FrameOutput,
    ) -> Option<Verdict> {
        for index in 0..self.points.len() {
            let armed = self.all_hit_before(index);
            let point = &mut self.points[index];

            if armed && !point.hit && pointer.distance(point.center) < point.radius {
                out.play(SoundCue::Blip);
                point.hit = true;
            }

            if point.hit {
                point.radius = (point.radius - dt * SYMBOL_SHRINK_RATE).max(0.0);
            }
        }

        self.all_hit().then_some(Verdict::Success)
    }

    pub(super) fn draw(&self, canvas: &mut dyn Canvas) {
        for point in &self.points {
            let tint = if point.hit { Tint::Engaged } else { Tint::Pending };
            canvas.circle(point.center, point.radius, tint);
        }
        for (index, point) in self.points.iter().enumerate() {
            if !point.hit {
                canvas.text(point.center, &(index + 1).to_string(), TextStyle::Small, 0.0);
            }
        }
    }
}
