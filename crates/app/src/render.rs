//! Macroquad backend for the engine's drawing seam.

use app::viewport::Viewport;
use battle::{Canvas, FrameOutput, ScreenCommand, TextStyle, Tint, Vec2};
use macroquad::prelude::{
    BLACK, Color, DARKGRAY, WHITE, clear_background, draw_circle, draw_circle_lines, draw_poly,
    draw_rectangle, draw_text, get_time, measure_text, screen_height, screen_width,
};
use macroquad::rand::gen_range;

const SMALL_FONT: f32 = 24.0;
const BIG_FONT: f32 = 48.0;
const LINE_SPACING: f32 = 1.2;
const WAVE_RATE: f64 = 4.0;
const PORTRAIT_RADIUS: f32 = 120.0;

fn tint_color(tint: Tint) -> Color {
    match tint {
        Tint::Pending => Color::from_rgba(150, 150, 150, 255),
        Tint::Engaged => Color::from_rgba(255, 40, 40, 255),
        Tint::Target => Color::from_rgba(0, 0, 0, 180),
        Tint::Panel => Color::from_rgba(0, 0, 0, 200),
        Tint::PanelHovered => Color::from_rgba(60, 60, 60, 220),
        Tint::Health => Color::from_rgba(190, 30, 30, 255),
        Tint::Shield => Color::from_rgba(70, 110, 220, 255),
        Tint::Mana => Color::from_rgba(130, 60, 200, 255),
    }
}

fn portrait_color(key: &str) -> Color {
    let shade = key.bytes().fold(90u8, |acc, byte| acc.wrapping_mul(31).wrapping_add(byte));
    Color::from_rgba(120 + shade / 2, 30, 40 + shade / 4, 255)
}

/// Draws through a letterboxed viewport and owns the window shake.
#[derive(Default)]
pub struct MacroquadCanvas {
    base: Viewport,
    view: Viewport,
    shake: f32,
}

impl MacroquadCanvas {
    /// Viewport for the current window size, without shake.
    pub fn viewport(&self) -> Viewport {
        self.base
    }

    /// Take the commands that belong to the renderer.
    pub fn absorb(&mut self, out: &FrameOutput) {
        for command in &out.commands {
            if let ScreenCommand::ShakeScreen(amount) = command {
                self.shake = self.shake.max(*amount);
            }
        }
    }

    /// Refit to the window and advance the shake by `dt` frame-time units.
    pub fn begin_frame(&mut self, dt: f32) {
        clear_background(BLACK);
        self.base = Viewport::fit(screen_width(), screen_height());
        self.view = self.base;
        if self.shake > 0.0 {
            let s = self.shake;
            self.view = self.base.shifted(Vec2::new(gen_range(-s, s), gen_range(-s, s)));
            self.shake = (self.shake - dt).max(0.0);
        }
    }

    fn font_size(&self, style: TextStyle) -> f32 {
        let logical = match style {
            TextStyle::Small => SMALL_FONT,
            TextStyle::Big => BIG_FONT,
        };
        self.view.length(logical)
    }
}

impl Canvas for MacroquadCanvas {
    fn circle(&mut self, center: Vec2, radius: f32, tint: Tint) {
        let at = self.view.to_window(center);
        draw_circle(at.x, at.y, self.view.length(radius), tint_color(tint));
    }

    fn square(&mut self, center: Vec2, size: f32, rotation: f32, tint: Tint) {
        let at = self.view.to_window(center);
        // draw_poly takes the circumradius and starts from a vertex.
        let radius = self.view.length(size) / 2.0_f32.sqrt();
        draw_poly(at.x, at.y, 4, radius, rotation + 45.0, tint_color(tint));
    }

    fn rect(&mut self, top_left: Vec2, width: f32, height: f32, tint: Tint) {
        let at = self.view.to_window(top_left);
        draw_rectangle(
            at.x,
            at.y,
            self.view.length(width),
            self.view.length(height),
            tint_color(tint),
        );
    }

    fn text(&mut self, center: Vec2, text: &str, style: TextStyle, wave: f32) {
        let font_size = self.font_size(style);
        let line_height = font_size * LINE_SPACING;
        let lines: Vec<&str> = text.split('\n').collect();
        let at = self.view.to_window(center);
        let top = at.y - line_height * (lines.len() as f32 - 1.0) / 2.0;
        let phase = (get_time() * WAVE_RATE) as f32;

        for (row, line) in lines.iter().enumerate() {
            let dims = measure_text(line, None, font_size as u16, 1.0);
            let bob = self.view.length(wave) * (phase + row as f32).sin();
            let baseline = top + row as f32 * line_height + dims.offset_y / 2.0 + bob;
            draw_text(line, at.x - dims.width / 2.0, baseline, font_size, WHITE);
        }
    }

    fn portrait(&mut self, key: &str, center: Vec2) {
        let at = self.view.to_window(center);
        let radius = self.view.length(PORTRAIT_RADIUS);
        draw_circle(at.x, at.y, radius, portrait_color(key));
        draw_circle_lines(at.x, at.y, radius, self.view.length(4.0), DARKGRAY);
    }
}
