//! Procedural level fill and spawn placement.
//! The fill is a simple independent per-cell draw; perception and
//! pathfinding must tolerate whatever connectivity falls out of it.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use crate::config::SimConfig;
use crate::state::Grid;
use crate::types::{Cell, TileKind, Vec2};

/// Uniform draw in [0, 1) built from the top 24 bits of the stream.
pub(crate) fn unit_f32(rng: &mut ChaCha8Rng) -> f32 {
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}

pub(crate) fn pick_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

/// Generates the tile matrix: border cells forced to `Wall`, each interior
/// cell drawn independently per the configured probabilities.
pub fn generate_grid(rng: &mut ChaCha8Rng, config: &SimConfig) -> Grid {
    let (cols, rows) = (config.grid_cols, config.grid_rows);
    debug_assert!(cols >= 3 && rows >= 3, "grid must have interior cells");

    let mut tiles = Vec::with_capacity(cols * rows);
    for row in 0..rows {
        for col in 0..cols {
            let on_border = row == 0 || col == 0 || row == rows - 1 || col == cols - 1;
            let tile = if on_border { TileKind::Wall } else { draw_interior_tile(rng, config) };
            tiles.push(tile);
        }
    }
    Grid::from_tiles(cols, rows, config.tile_size, tiles)
}

fn draw_interior_tile(rng: &mut ChaCha8Rng, config: &SimConfig) -> TileKind {
    let roll = unit_f32(rng);
    if roll < config.wall_chance {
        TileKind::Wall
    } else if roll < config.wall_chance + config.safe_chance {
        TileKind::Safe
    } else if roll < config.wall_chance + config.safe_chance + config.shadow_chance {
        TileKind::Shadow
    } else {
        TileKind::Floor
    }
}

/// Picks a spawn tile and returns the top-left position that centers an
/// entity of `size` in it. Walls are always rejected; guard spawns also
/// reject concealment tiles so a guard never starts somewhere it may not
/// stand. The draw loop is capped; on exhaustion the first acceptable tile
/// in scan order is used instead.
pub fn random_spawn(
    rng: &mut ChaCha8Rng,
    grid: &Grid,
    size: f32,
    avoid_concealment: bool,
    attempts: u32,
) -> Vec2 {
    let acceptable = |tile: TileKind| {
        !tile.blocks_movement()
            && (!avoid_concealment || (tile != TileKind::Shadow && tile != TileKind::Safe))
    };

    for _ in 0..attempts {
        let cell = Cell {
            row: pick_index(rng, grid.height()) as i32,
            col: pick_index(rng, grid.width()) as i32,
        };
        if acceptable(grid.tile_at(cell)) {
            return centered_in_cell(grid, cell, size);
        }
    }

    for row in 0..grid.height() as i32 {
        for col in 0..grid.width() as i32 {
            let cell = Cell { row, col };
            if acceptable(grid.tile_at(cell)) {
                return centered_in_cell(grid, cell, size);
            }
        }
    }

    debug_assert!(false, "grid has no acceptable spawn tile");
    centered_in_cell(grid, Cell { row: 1, col: 1 }, size)
}

fn centered_in_cell(grid: &Grid, cell: Cell, size: f32) -> Vec2 {
    let center = grid.cell_center(cell);
    Vec2::new(center.x - size / 2.0, center.y - size / 2.0)
}
