//! Guard sight rules: sampled-segment line of sight, the vision cone, and
//! the footprint sampling policy for spotting the player.
//! Kept free of movement planning so the rules stay independently testable.

use crate::config::SimConfig;
use crate::sim::steering;
use crate::state::{Grid, Guard, GuardState, Player};
use crate::types::{TileKind, Vec2};

/// Samples the straight segment from `origin` to `target` at half-tile
/// granularity, rounding the sample count up. False as soon as a sample
/// lands on a movement-blocking tile. Deliberately an approximation: the
/// step size is the tunable, not an exact intersection test.
pub fn has_line_of_sight(grid: &Grid, origin: Vec2, target: Vec2) -> bool {
    let dx = target.x - origin.x;
    let dy = target.y - origin.y;
    let distance = dx.hypot(dy);
    let step = grid.tile_size() / 2.0;
    let steps = (distance / step).ceil() as i32;

    for i in 1..=steps {
        let t = i as f32 / steps as f32;
        if grid.tile_at_world(origin.x + dx * t, origin.y + dy * t).blocks_movement() {
            return false;
        }
    }
    true
}

/// Cone-and-occlusion visibility of a single point. Safe tiles conceal
/// absolutely; shadow tiles block fresh detection (chase pursuit bypasses
/// this function entirely and uses raw line of sight).
pub fn is_visible(grid: &Grid, guard: &Guard, config: &SimConfig, target: Vec2) -> bool {
    let tile = grid.tile_at_world(target.x, target.y);
    if tile == TileKind::Safe || tile == TileKind::Shadow {
        return false;
    }

    let center = guard.center();
    if center.distance_to(target) > config.fov_range {
        return false;
    }
    if steering::angle_diff(guard.facing, center.bearing_to(target)) > config.fov_angle / 2.0 {
        return false;
    }
    has_line_of_sight(grid, center, target)
}

/// Evaluates the five player footprint samples. Any sample on a safe tile
/// vetoes perception for the whole tick, regardless of the other samples;
/// otherwise one hit suffices. While chasing, samples are tested with raw
/// line of sight instead of the cone.
pub fn perceives_player(grid: &Grid, guard: &Guard, config: &SimConfig, player: &Player) -> bool {
    let chasing = matches!(guard.state, GuardState::Chase { .. });
    let mut perceived = false;
    for sample in player.detection_samples() {
        if grid.tile_at_world(sample.x, sample.y) == TileKind::Safe {
            return false;
        }
        if !perceived {
            perceived = if chasing {
                has_line_of_sight(grid, guard.center(), sample)
            } else {
                is_visible(grid, guard, config, sample)
            };
        }
    }
    perceived
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn corridor_grid(tiles_override: &[(Cell, TileKind)]) -> Grid {
        let (cols, rows) = (12, 7);
        let mut tiles = vec![TileKind::Floor; cols * rows];
        for col in 0..cols {
            tiles[col] = TileKind::Wall;
            tiles[(rows - 1) * cols + col] = TileKind::Wall;
        }
        for row in 0..rows {
            tiles[row * cols] = TileKind::Wall;
            tiles[row * cols + cols - 1] = TileKind::Wall;
        }
        for (cell, kind) in tiles_override {
            tiles[(cell.row as usize) * cols + cell.col as usize] = *kind;
        }
        Grid::from_tiles(cols, rows, 32.0, tiles)
    }

    fn guard_at_cell(grid: &Grid, cell: Cell, facing: f32) -> Guard {
        let center = grid.cell_center(cell);
        Guard::new(Vec2::new(center.x - 8.0, center.y - 8.0), 16.0, facing)
    }

    fn player_at_cell(grid: &Grid, cell: Cell) -> Player {
        let center = grid.cell_center(cell);
        Player::new(Vec2::new(center.x - 8.0, center.y - 8.0), 16.0)
    }

    #[test]
    fn wall_on_segment_midpoint_blocks_sight() {
        let grid = corridor_grid(&[(Cell { row: 3, col: 5 }, TileKind::Wall)]);
        let origin = grid.cell_center(Cell { row: 3, col: 3 });
        let target = grid.cell_center(Cell { row: 3, col: 7 });
        assert!(!has_line_of_sight(&grid, origin, target));
    }

    #[test]
    fn adjacent_floor_cells_in_a_row_see_each_other() {
        let grid = corridor_grid(&[]);
        let origin = grid.cell_center(Cell { row: 3, col: 4 });
        let target = grid.cell_center(Cell { row: 3, col: 5 });
        assert!(has_line_of_sight(&grid, origin, target));
    }

    #[test]
    fn zero_length_segment_is_always_clear() {
        let grid = corridor_grid(&[]);
        let point = grid.cell_center(Cell { row: 2, col: 2 });
        assert!(has_line_of_sight(&grid, point, point));
    }

    #[test]
    fn safe_tile_conceals_at_any_distance_and_angle() {
        let safe = Cell { row: 3, col: 4 };
        let grid = corridor_grid(&[(safe, TileKind::Safe)]);
        let guard = guard_at_cell(&grid, Cell { row: 3, col: 3 }, 0.0);
        let config = SimConfig::default();
        let target = grid.cell_center(safe);
        assert!(!is_visible(&grid, &guard, &config, target));
    }

    #[test]
    fn shadow_tile_blocks_fresh_detection_inside_the_cone() {
        let shadow = Cell { row: 3, col: 4 };
        let grid = corridor_grid(&[(shadow, TileKind::Shadow)]);
        let guard = guard_at_cell(&grid, Cell { row: 3, col: 3 }, 0.0);
        let config = SimConfig::default();
        assert!(!is_visible(&grid, &guard, &config, grid.cell_center(shadow)));
    }

    #[test]
    fn targets_outside_range_or_cone_are_not_visible() {
        let grid = corridor_grid(&[]);
        let config = SimConfig::default();
        let guard = guard_at_cell(&grid, Cell { row: 3, col: 2 }, 0.0);

        let beyond_range = Vec2::new(guard.center().x + config.fov_range + 1.0, guard.center().y);
        assert!(!is_visible(&grid, &guard, &config, beyond_range));

        // Directly behind the guard, one tile away.
        let behind = grid.cell_center(Cell { row: 3, col: 1 });
        assert!(!is_visible(&grid, &guard, &config, behind));
    }

    #[test]
    fn facing_target_in_open_corridor_is_visible() {
        let grid = corridor_grid(&[]);
        let config = SimConfig::default();
        let guard = guard_at_cell(&grid, Cell { row: 3, col: 3 }, 0.0);
        assert!(is_visible(&grid, &guard, &config, grid.cell_center(Cell { row: 3, col: 6 })));
    }

    #[test]
    fn any_footprint_sample_on_safe_vetoes_perception() {
        // Player straddles a safe tile: center on floor in plain view, one
        // corner inside the safe zone. The veto must win over the hits.
        let safe = Cell { row: 3, col: 5 };
        let grid = corridor_grid(&[(safe, TileKind::Safe)]);
        let config = SimConfig::default();
        let guard = guard_at_cell(&grid, Cell { row: 3, col: 3 }, 0.0);

        let safe_center = grid.cell_center(safe);
        let mut player = player_at_cell(&grid, Cell { row: 3, col: 4 });
        player.pos.x = safe_center.x - 16.0 - 10.0; // right corner pokes into the safe tile
        assert!(!perceives_player(&grid, &guard, &config, &player));
    }

    #[test]
    fn chase_perception_ignores_cone_and_shadow() {
        let shadow = Cell { row: 3, col: 2 };
        let grid = corridor_grid(&[(shadow, TileKind::Shadow)]);
        let config = SimConfig::default();

        // Guard faces away from the player, who stands in shadow. Patrol
        // perception misses; chase perception keeps tracking.
        let mut guard = guard_at_cell(&grid, Cell { row: 3, col: 5 }, 0.0);
        let player = player_at_cell(&grid, shadow);
        assert!(!perceives_player(&grid, &guard, &config, &player));

        guard.state = GuardState::Chase { target: player.center() };
        assert!(perceives_player(&grid, &guard, &config, &player));
    }
}
