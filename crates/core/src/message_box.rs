//! Modal text overlay dismissed by a primary press after a short guard period.

use crate::canvas::{Canvas, TextStyle, Tint};
use crate::geometry::{FrameInput, Vec2, screen_center};

/// Frame-time units during which a fresh message box ignores input.
pub const MESSAGE_BOX_GUARD_FT: f32 = 70.0;

const BOX_WIDTH: f32 = 660.0;
const BOX_HEIGHT: f32 = 360.0;

#[derive(Clone, Debug, PartialEq)]
pub struct MessageBox {
    text: String,
    guard: f32,
}

impl MessageBox {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), guard: MESSAGE_BOX_GUARD_FT }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns true on the frame the box is dismissed.
    pub fn update(&mut self, dt: f32, input: &FrameInput) -> bool {
        if self.guard >= 0.0 {
            self.guard -= dt;
            false
        } else {
            input.primary
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let center = screen_center();
        let top_left = Vec2::new(center.x - BOX_WIDTH / 2.0, center.y - BOX_HEIGHT / 2.0);
        canvas.rect(top_left, BOX_WIDTH, BOX_HEIGHT, Tint::Panel);
        canvas.text(center, &self.text, TextStyle::Small, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_presses_during_guard() {
        let mut message = MessageBox::new("Not enough mana.");
        let press = FrameInput::click(screen_center());
        for _ in 0..70 {
            assert!(!message.update(1.0, &press));
        }
        // Guard reaches zero but is still not negative.
        assert!(!message.update(1.0, &press));
        assert!(message.update(1.0, &press));
    }

    #[test]
    fn stays_open_without_a_press() {
        let mut message = MessageBox::new("You won!");
        for _ in 0..200 {
            assert!(!message.update(1.0, &FrameInput::default()));
        }
        assert_eq!(message.text(), "You won!");
    }
}
