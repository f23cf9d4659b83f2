//! Screen-space points, rectangles, per-frame pointer input, and frame-time units.
//! This module exists so the battle engine never depends on a windowing crate.
//! It does not own layout of any particular screen element.

use std::ops::Add;

use serde::{Deserialize, Serialize};

/// Logical screen width every layout is expressed against.
pub const SCREEN_WIDTH: f32 = 1024.0;
/// Logical screen height every layout is expressed against.
pub const SCREEN_HEIGHT: f32 = 768.0;

/// Frame-time units per second. Every `dt` in the engine is expressed in these.
pub const FT_PER_SECOND: f32 = 60.0;

pub fn seconds_to_ft(seconds: f32) -> f32 {
    seconds * FT_PER_SECOND
}

pub fn ft_to_seconds(ft: f32) -> f32 {
    ft / FT_PER_SECOND
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn offset(self, dx: f32, dy: f32) -> Vec2 {
        Vec2 { x: self.x + dx, y: self.y + dy }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

pub fn screen_center() -> Vec2 {
    Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0)
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Pointer state sampled once per rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: Vec2,
    pub primary: bool,
    pub secondary: bool,
}

impl FrameInput {
    pub fn hover(pointer: Vec2) -> Self {
        Self { pointer, primary: false, secondary: false }
    }

    pub fn click(pointer: Vec2) -> Self {
        Self { pointer, primary: true, secondary: false }
    }

    pub fn any_button(&self) -> bool {
        self.primary || self.secondary
    }

    /// The same pointer position with both buttons reported as released.
    pub fn released(self) -> Self {
        Self { pointer: self.pointer, primary: false, secondary: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_round_trip_through_frame_time() {
        assert_eq!(seconds_to_ft(4.0), 240.0);
        assert_eq!(ft_to_seconds(90.0), 1.5);
    }

    #[test]
    fn rect_contains_edges() {
        let rect = Rect { x: 10.0, y: 10.0, width: 20.0, height: 5.0 };
        assert!(rect.contains(Vec2::new(10.0, 10.0)));
        assert!(rect.contains(Vec2::new(30.0, 15.0)));
        assert!(!rect.contains(Vec2::new(30.5, 12.0)));
        assert_eq!(rect.center(), Vec2::new(20.0, 12.5));
    }

    #[test]
    fn distance_is_euclidean() {
        assert_eq!(Vec2::new(0.0, 0.0).distance(Vec2::new(3.0, 4.0)), 5.0);
    }
}
