//! Simulation tunables. Defaults match the reference level layout; hosts may
//! override any subset through the serde surface.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Edge length of one grid tile in world units.
    pub tile_size: f32,
    pub grid_cols: usize,
    pub grid_rows: usize,

    /// Per-interior-cell generation probabilities; the remainder is lit floor.
    pub wall_chance: f32,
    pub safe_chance: f32,
    pub shadow_chance: f32,

    pub player_size: f32,
    pub player_speed: f32,
    pub crouch_multiplier: f32,
    pub sprint_multiplier: f32,

    pub guard_size: f32,
    pub guard_count: usize,

    pub speed_patrol: f32,
    pub speed_investigate: f32,
    pub speed_chase: f32,

    pub turn_patrol: f32,
    pub turn_investigate: f32,
    pub turn_chase: f32,
    pub turn_search: f32,

    /// Full vision-cone angle; half of it on either side of facing.
    pub fov_angle: f32,
    pub fov_range: f32,
    pub hearing_radius: f32,
    pub detection_threshold: f32,

    /// A guard must face within these tolerances of the bearing to its
    /// target before it translates: path following uses the tighter one.
    pub facing_tolerance_path: f32,
    pub facing_tolerance_move: f32,

    /// Distance at which a path waypoint counts as reached.
    pub waypoint_arrive: f32,
    /// Distance at which an investigate/search destination counts as reached.
    pub search_arrive: f32,
    pub search_spin_time: f32,

    /// Half-width of the random re-heading swing after a patrol collision.
    pub reheading_cone: f32,

    /// Caps on random draws so a disconnected grid cannot livelock a tick.
    pub patrol_dest_attempts: u32,
    pub spawn_attempts: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            grid_cols: 25,
            grid_rows: 18,
            wall_chance: 0.10,
            safe_chance: 0.05,
            shadow_chance: 0.10,
            player_size: 40.0,
            player_speed: 100.0,
            crouch_multiplier: 0.5,
            sprint_multiplier: 1.5,
            guard_size: 16.0,
            guard_count: 3,
            speed_patrol: 40.0,
            speed_investigate: 25.0,
            speed_chase: 75.0,
            turn_patrol: PI / 8.0,
            turn_investigate: PI / 6.0,
            turn_chase: PI / 3.0,
            turn_search: PI / 2.0,
            fov_angle: PI / 3.0,
            fov_range: 120.0,
            hearing_radius: 80.0,
            detection_threshold: 0.3,
            facing_tolerance_path: 0.2,
            facing_tolerance_move: 0.3,
            waypoint_arrive: 2.0,
            search_arrive: 4.0,
            search_spin_time: 1.0,
            reheading_cone: PI / 3.0,
            patrol_dest_attempts: 32,
            spawn_attempts: 1024,
        }
    }
}

impl SimConfig {
    pub fn world_width(&self) -> f32 {
        self.grid_cols as f32 * self.tile_size
    }

    pub fn world_height(&self) -> f32 {
        self.grid_rows as f32 * self.tile_size
    }
}
