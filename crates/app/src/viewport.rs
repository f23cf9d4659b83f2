//! Mapping between the engine's logical 1024 x 768 screen and the real window.

use battle::{SCREEN_HEIGHT, SCREEN_WIDTH, Vec2};

/// Letterboxed uniform scale plus the window position of the logical origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub origin: Vec2,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { scale: 1.0, origin: Vec2::ZERO }
    }
}

impl Viewport {
    /// Largest uniform scale that fits the logical screen, centred in the window.
    pub fn fit(window_width: f32, window_height: f32) -> Self {
        let scale = (window_width / SCREEN_WIDTH).min(window_height / SCREEN_HEIGHT);
        if !scale.is_finite() || scale <= 0.0 {
            return Self::default();
        }
        let origin = Vec2::new(
            (window_width - SCREEN_WIDTH * scale) / 2.0,
            (window_height - SCREEN_HEIGHT * scale) / 2.0,
        );
        Self { scale, origin }
    }

    pub fn to_window(&self, logical: Vec2) -> Vec2 {
        Vec2::new(self.origin.x + logical.x * self.scale, self.origin.y + logical.y * self.scale)
    }

    pub fn to_logical(&self, window: Vec2) -> Vec2 {
        Vec2::new((window.x - self.origin.x) / self.scale, (window.y - self.origin.y) / self.scale)
    }

    pub fn length(&self, logical: f32) -> f32 {
        logical * self.scale
    }

    /// The same viewport displaced by a logical offset, for screen shake.
    pub fn shifted(self, offset: Vec2) -> Self {
        Self { scale: self.scale, origin: self.to_window(offset) }
    }
}
