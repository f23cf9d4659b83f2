mod frame_input;
mod render;
mod window_config;

use std::env;

use app::app_loop::AppState;
use app::config::{ROSTER_ENV, SEED_ENV, default_roster_path, resolve_session};
use app::seed::generate_runtime_seed;
use battle::{FT_PER_SECOND, FrameOutput};
use frame_input::capture_frame_input;
use macroquad::prelude::{get_frame_time, next_frame};
use render::MacroquadCanvas;
use window_config::build_window_conf;

#[macroquad::main(build_window_conf)]
async fn main() {
    env_logger::init();

    let seed_var = env::var(SEED_ENV).ok();
    let roster_var = env::var(ROSTER_ENV).ok();
    let session = match resolve_session(
        seed_var.as_deref(),
        roster_var.as_deref(),
        default_roster_path().as_deref(),
        generate_runtime_seed(),
    ) {
        Ok(session) => session,
        Err(err) => {
            log::error!("could not configure the session: {err:#}");
            return;
        }
    };

    let mut app = AppState::new(session);
    let mut canvas = MacroquadCanvas::default();
    let mut out = FrameOutput::new();

    loop {
        let dt = get_frame_time() * FT_PER_SECOND;
        let input = capture_frame_input(&canvas.viewport());

        if let Err(err) = app.tick(dt, &input, &mut out) {
            log::error!("could not start a run: {err}");
        }
        for cue in &out.cues {
            log::trace!("sound cue {cue:?}");
        }
        canvas.absorb(&out);
        out.clear();

        canvas.begin_frame(dt);
        app.draw(&mut canvas);
        next_frame().await;
    }
}
