//! Window configuration for the desktop app.

use app::APP_NAME;
use battle::{SCREEN_HEIGHT, SCREEN_WIDTH};
use macroquad::window::Conf;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        // The viewport letterboxes the logical screen, so any size works.
        window_resizable: true,
        high_dpi: true,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::build_window_conf;

    #[test]
    fn enables_high_dpi_rendering() {
        assert!(build_window_conf().high_dpi);
    }

    #[test]
    fn opens_at_the_logical_screen_size() {
        let conf = build_window_conf();
        assert_eq!(conf.window_width, 1024);
        assert_eq!(conf.window_height, 768);
        assert_eq!(conf.window_title, "Demon Cleansing");
    }
}
