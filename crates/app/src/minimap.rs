//! Fixed-scale overview in the top-right corner: walls, guard dots, the
//! player dot, and a frame around the panel.

use core::{Cell, TileKind, World};
use macroquad::color::Color;
use macroquad::prelude::{draw_rectangle, draw_rectangle_lines, screen_width};

const TILE_PX: f32 = 4.0;
const MARGIN_PX: f32 = 10.0;

const COLOR_BACKDROP: Color = Color::new(0.0, 0.0, 0.0, 0.6);
const COLOR_WALL: Color = Color::new(0.5, 0.5, 0.5, 1.0);
const COLOR_PLAYER: Color = Color::new(0.0, 0.85, 0.85, 1.0);
const COLOR_GUARD: Color = Color::new(0.85, 0.15, 0.15, 1.0);
const COLOR_FRAME: Color = Color::new(1.0, 1.0, 1.0, 0.8);

pub fn draw_minimap(world: &World) {
    let grid = &world.grid;
    let panel_w = grid.width() as f32 * TILE_PX;
    let panel_h = grid.height() as f32 * TILE_PX;
    let origin_x = screen_width() - panel_w - MARGIN_PX;
    let origin_y = MARGIN_PX;

    draw_rectangle(origin_x, origin_y, panel_w, panel_h, COLOR_BACKDROP);
    for row in 0..grid.height() as i32 {
        for col in 0..grid.width() as i32 {
            if grid.tile_at(Cell { row, col }) == TileKind::Wall {
                draw_rectangle(
                    origin_x + col as f32 * TILE_PX,
                    origin_y + row as f32 * TILE_PX,
                    TILE_PX,
                    TILE_PX,
                    COLOR_WALL,
                );
            }
        }
    }

    let scale = TILE_PX / grid.tile_size();
    for guard in world.guards.values() {
        let center = guard.center();
        draw_rectangle(
            origin_x + center.x * scale - 1.0,
            origin_y + center.y * scale - 1.0,
            2.0,
            2.0,
            COLOR_GUARD,
        );
    }
    let player = world.player.center();
    draw_rectangle(
        origin_x + player.x * scale - 1.5,
        origin_y + player.y * scale - 1.5,
        3.0,
        3.0,
        COLOR_PLAYER,
    );

    draw_rectangle_lines(origin_x, origin_y, panel_w, panel_h, 1.0, COLOR_FRAME);
}
