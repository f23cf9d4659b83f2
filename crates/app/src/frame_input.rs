//! Pointer input collection for one rendered frame.

use app::viewport::Viewport;
use battle::{FrameInput, Vec2};
use macroquad::prelude::{MouseButton, is_mouse_button_down, mouse_position};

/// Pointer in logical coordinates plus the held state of both buttons.
pub fn capture_frame_input(viewport: &Viewport) -> FrameInput {
    let (x, y) = mouse_position();
    FrameInput {
        pointer: viewport.to_logical(Vec2::new(x, y)),
        primary: is_mouse_button_down(MouseButton::Left),
        secondary: is_mouse_button_down(MouseButton::Right),
    }
}
