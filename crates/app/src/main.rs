use core::{Simulation, Vec2};
use macroquad::prelude::{
    BLACK, GRAY, ORANGE, WHITE, clear_background, draw_text, get_frame_time, next_frame,
    screen_height, screen_width,
};

mod frame_input;
mod minimap;
mod render;
mod window_config;

use app::camera::{CAMERA_ZOOM, CameraView};
use app::config_file;
use app::seed::{generate_runtime_seed, resolve_seed_from_args};
use app::{format_seed, format_snapshot_hash};
use window_config::build_window_conf;

/// Upper bound on a frame's delta so window drags and debugger pauses do
/// not become one giant simulation step.
const MAX_FRAME_DT: f32 = 0.1;

#[macroquad::main(build_window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed_choice = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };
    let config = match config_file::load_from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("failed to load {}: {error}", config_file::CONFIG_ENV_VAR);
            std::process::exit(2);
        }
    };

    let mut sim = Simulation::new(seed_choice.value(), config.clone());

    loop {
        let input = frame_input::capture_frame_input();
        if input.regenerate {
            sim = Simulation::new(generate_runtime_seed(), config.clone());
        }

        let intent = frame_input::intent_from_keys(input.held);
        sim.tick(&intent, get_frame_time().min(MAX_FRAME_DT));

        clear_background(BLACK);
        let view = CameraView::follow(
            sim.world().player.center(),
            Vec2::new(screen_width(), screen_height()),
            Vec2::new(config.world_width(), config.world_height()),
            CAMERA_ZOOM,
        );
        render::draw_world(sim.world(), sim.config(), &view);
        minimap::draw_minimap(sim.world());

        let status = format!(
            "seed {}  tick {}  hash {}",
            format_seed(sim.seed()),
            sim.current_tick(),
            format_snapshot_hash(sim.snapshot_hash()),
        );
        draw_text(&status, 8.0, screen_height() - 10.0, 16.0, GRAY);

        if render::any_guard_chasing(sim.world()) {
            draw_text("SPOTTED", 8.0, 24.0, 28.0, ORANGE);
        } else {
            let exposure = render::detection_bar(sim.world());
            if exposure > 0.0 {
                let label = format!("exposure {:.0}%", exposure / config.detection_threshold * 100.0);
                draw_text(&label, 8.0, 24.0, 20.0, WHITE);
            }
        }

        next_frame().await;
    }
}
