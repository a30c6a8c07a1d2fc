//! Window configuration for the desktop shell.

use app::APP_NAME;
use macroquad::window::Conf;

const DEFAULT_WINDOW_WIDTH: i32 = 800;
const DEFAULT_WINDOW_HEIGHT: i32 = 600;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // Linux desktop sessions may not scale low-DPI framebuffers
        // automatically; request a high-DPI framebuffer up front.
        high_dpi: true,
        ..Default::default()
    }
}
