//! Main-view drawing: tiles, vision cones, guards, player. All world
//! coordinates go through the camera's scale-and-translate; nothing here
//! mutates simulation state.

use core::{Cell, GuardState, SimConfig, TileKind, Vec2, World};
use macroquad::color::Color;
use macroquad::prelude::{draw_rectangle, draw_triangle, vec2};

use app::camera::CameraView;

const COLOR_FLOOR: Color = Color::new(0.13, 0.13, 0.13, 1.0);
const COLOR_WALL: Color = Color::new(0.27, 0.27, 0.27, 1.0);
const COLOR_SHADOW: Color = Color::new(0.07, 0.07, 0.10, 1.0);
const COLOR_SAFE: Color = Color::new(0.0, 0.35, 0.15, 1.0);
const COLOR_PLAYER: Color = Color::new(0.0, 0.85, 0.85, 1.0);
const COLOR_GUARD: Color = Color::new(0.85, 0.15, 0.15, 1.0);
const COLOR_CONE: Color = Color::new(1.0, 0.2, 0.2, 0.12);
const COLOR_CONE_ALERT: Color = Color::new(1.0, 0.2, 0.2, 0.30);

const CONE_SEGMENTS: u32 = 16;

fn tile_color(kind: TileKind) -> Color {
    match kind {
        TileKind::Floor => COLOR_FLOOR,
        TileKind::Wall => COLOR_WALL,
        TileKind::Shadow => COLOR_SHADOW,
        TileKind::Safe => COLOR_SAFE,
    }
}

pub fn draw_world(world: &World, config: &SimConfig, view: &CameraView) {
    let grid = &world.grid;
    let tile = grid.tile_size() * view.zoom;
    for row in 0..grid.height() as i32 {
        for col in 0..grid.width() as i32 {
            let cell = Cell { row, col };
            let top_left = view.world_to_screen(Vec2::new(
                col as f32 * grid.tile_size(),
                row as f32 * grid.tile_size(),
            ));
            draw_rectangle(top_left.x, top_left.y, tile, tile, tile_color(grid.tile_at(cell)));
        }
    }

    for guard in world.guards.values() {
        draw_vision_cone(guard.center(), guard.facing, config, view, guard.detection > 0.0);
        let corner = view.world_to_screen(guard.pos);
        let side = guard.size * view.zoom;
        draw_rectangle(corner.x, corner.y, side, side, COLOR_GUARD);
    }

    let player = &world.player;
    let corner = view.world_to_screen(player.pos);
    let side = player.size * view.zoom;
    draw_rectangle(corner.x, corner.y, side, side, COLOR_PLAYER);
}

/// Translucent triangle fan over the cone's angular span. Occlusion is not
/// traced here; the cone shows the guard's orientation, not exact sight.
fn draw_vision_cone(center: Vec2, facing: f32, config: &SimConfig, view: &CameraView, alert: bool) {
    let color = if alert { COLOR_CONE_ALERT } else { COLOR_CONE };
    let apex = view.world_to_screen(center);
    let start = facing - config.fov_angle / 2.0;
    let step = config.fov_angle / CONE_SEGMENTS as f32;

    for segment in 0..CONE_SEGMENTS {
        let a = start + step * segment as f32;
        let b = a + step;
        let edge_a = view.world_to_screen(Vec2::new(
            center.x + a.cos() * config.fov_range,
            center.y + a.sin() * config.fov_range,
        ));
        let edge_b = view.world_to_screen(Vec2::new(
            center.x + b.cos() * config.fov_range,
            center.y + b.sin() * config.fov_range,
        ));
        draw_triangle(
            vec2(apex.x, apex.y),
            vec2(edge_a.x, edge_a.y),
            vec2(edge_b.x, edge_b.y),
            color,
        );
    }
}

pub fn detection_bar(world: &World) -> f32 {
    world.guards.values().map(|guard| guard.detection).fold(0.0, f32::max)
}

pub fn any_guard_chasing(world: &World) -> bool {
    world.guards.values().any(|guard| matches!(guard.state, GuardState::Chase { .. }))
}
