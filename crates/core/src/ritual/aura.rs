//! Sustained-hover ritual: keep every zone charged; one lapsed zone fails the ritual.

use super::Verdict;
use crate::canvas::{Canvas, Tint};
use crate::geometry::{Vec2, screen_center};
use crate::output::{FrameOutput, SoundCue};

pub const AURA_RADIUS_SCALE: f32 = 3.1;
pub const AURA_MAX_RADIUS: f32 = 75.0;
pub const AURA_GROW_RATE: f32 = 2.78;
pub const AURA_DECAY_RATE: f32 = 0.74;
/// A zone whose radius falls below this has lapsed.
pub const AURA_COLLAPSE_RADIUS: f32 = 5.0;

#[derive(Clone, Debug)]
pub struct AuraZone {
    pub center: Vec2,
    pub radius: f32,
    pub engaged: bool,
}

#[derive(Clone, Debug, Default)]
pub struct AuraRitual {
    zones: Vec<AuraZone>,
}

impl AuraRitual {
    /// Add a zone at `offset` from the screen centre.
    pub fn add_point(&mut self, offset: Vec2, radius: f32) {
        self.zones.push(AuraZone {
            center: screen_center() + offset,
            radius: radius * AURA_RADIUS_SCALE,
            engaged: false,
        });
    }

    pub fn zones(&self) -> &[AuraZone] {
        &self.zones
    }

    pub(super) fn update(
        &mut self,
        dt: f32,
        pointer: Vec2,
        out: &mut FrameOutput,
    ) -> Option<Verdict> {
        let mut any_engaged = false;

        for zone in &mut self.zones {
            zone.engaged = pointer.distance(zone.center) < zone.radius;
            if zone.engaged {
                any_engaged = true;
                zone.radius = (zone.radius + dt * AURA_GROW_RATE).min(AURA_MAX_RADIUS);
            } else {
                zone.radius = (zone.radius - dt * AURA_DECAY_RATE).max(0.0);
            }
        }

        if any_engaged {
            out.play(SoundCue::Bip);
        }

        self.zones
            .iter()
            .any(|zone| zone.radius < AURA_COLLAPSE_RADIUS)
            .then_some(Verdict::Failure)
    }

    pub(super) fn draw(&self, canvas: &mut dyn Canvas) {
        for zone in &self.zones {
            let tint = if zone.engaged { Tint::Engaged } else { Tint::Pending };
            canvas.circle(zone.center, zone.radius, tint);
        }
    }
}
