//! Drawing seam between the engine and whatever renders it.

use crate::geometry::Vec2;

/// Semantic fill for a shape; the renderer maps these to colours.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Pending,
    Engaged,
    Target,
    Panel,
    PanelHovered,
    Health,
    Shield,
    Mana,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Small,
    Big,
}

pub trait Canvas {
    fn circle(&mut self, center: Vec2, radius: f32, tint: Tint);

    /// Square centred on `center`, rotated by `rotation` degrees.
    fn square(&mut self, center: Vec2, size: f32, rotation: f32, tint: Tint);

    fn rect(&mut self, top_left: Vec2, width: f32, height: f32, tint: Tint);

    /// Text centred on `center`. `wave` is the vertical wobble amplitude.
    fn text(&mut self, center: Vec2, text: &str, style: TextStyle, wave: f32);

    /// Enemy artwork looked up by its renderer-side key.
    fn portrait(&mut self, key: &str, center: Vec2);
}

/// Canvas that records what was drawn; used by tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub circles: Vec<(Vec2, f32, Tint)>,
    pub squares: Vec<(Vec2, f32, f32, Tint)>,
    pub rects: Vec<(Vec2, f32, f32, Tint)>,
    pub texts: Vec<String>,
    pub portraits: Vec<(String, Vec2)>,
}

impl Canvas for RecordingCanvas {
    fn circle(&mut self, center: Vec2, radius: f32, tint: Tint) {
        self.circles.push((center, radius, tint));
    }

    fn square(&mut self, center: Vec2, size: f32, rotation: f32, tint: Tint) {
        self.squares.push((center, size, rotation, tint));
    }

    fn rect(&mut self, top_left: Vec2, width: f32, height: f32, tint: Tint) {
        self.rects.push((top_left, width, height, tint));
    }

    fn text(&mut self, _center: Vec2, text: &str, _style: TextStyle, _wave: f32) {
        self.texts.push(text.to_string());
    }

    fn portrait(&mut self, key: &str, center: Vec2) {
        self.portraits.push((key.to_string(), center));
    }
}
