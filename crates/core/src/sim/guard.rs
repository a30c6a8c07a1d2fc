//! Guard behavior: detection accumulation, state transitions, and
//! per-state movement. Collision rollback lives in the simulation step,
//! which owns the grid-versus-footprint pass for all agents.

use rand_chacha::ChaCha8Rng;

use crate::config::SimConfig;
use crate::mapgen::pick_index;
use crate::sim::{pathfinding, perception, steering};
use crate::state::{Grid, Guard, GuardState, Player, SearchStage};
use crate::types::{Cell, NoiseEvent, SimEvent, Vec2};

impl Guard {
    /// One tick of behavior. Evaluation order: detection, noise response,
    /// lost contact, investigation arrival, then the active state's
    /// movement. The caller resolves collisions afterwards.
    pub(crate) fn update(
        &mut self,
        dt: f32,
        grid: &Grid,
        config: &SimConfig,
        player: &Player,
        noise: Option<&NoiseEvent>,
        rng: &mut ChaCha8Rng,
        events: &mut Vec<SimEvent>,
    ) {
        let center = self.center();

        // Detection ramps up while the player is perceived and decays
        // symmetrically while not, clamped to the threshold.
        let perceived = perception::perceives_player(grid, self, config, player);
        self.detection = (self.detection + if perceived { dt } else { -dt })
            .clamp(0.0, config.detection_threshold);

        if self.detection >= config.detection_threshold {
            let pursuit = player.center();
            match &mut self.state {
                GuardState::Chase { target } => *target = pursuit,
                _ => self.set_state(GuardState::Chase { target: pursuit }, events),
            }
        }

        if let GuardState::Patrol { .. } = self.state
            && let Some(noise) = noise
            && center.distance_to(noise.pos) < config.hearing_radius
        {
            events.push(SimEvent::NoiseHeard { guard: self.id, at: noise.pos });
            self.detection = 0.0;
            self.set_state(GuardState::Investigate { target: noise.pos }, events);
        }

        let contact_lost = match &self.state {
            GuardState::Chase { target } if self.detection == 0.0 => Some(*target),
            _ => None,
        };
        if let Some(target) = contact_lost {
            self.set_state(
                GuardState::Search { stage: SearchStage::Move, target, timer: 0.0 },
                events,
            );
        }

        let investigation_done = match &self.state {
            GuardState::Investigate { target }
                if center.distance_to(*target) < config.search_arrive =>
            {
                Some(*target)
            }
            _ => None,
        };
        if let Some(target) = investigation_done {
            self.set_state(
                GuardState::Search { stage: SearchStage::Spin, target, timer: 0.0 },
                events,
            );
        }

        match &mut self.state {
            GuardState::Patrol { path, cursor } => {
                if path.is_empty() {
                    if let Some(goal) =
                        random_floor_cell(grid, rng, config.patrol_dest_attempts)
                    {
                        *path = pathfinding::find_path(grid, grid.cell_of(center.x, center.y), goal);
                        *cursor = 0;
                    }
                    // No destination this tick; re-roll next tick.
                }
                if let Some(node) = path.get(*cursor) {
                    let target = grid.cell_center(*node);
                    let bearing = center.bearing_to(target);
                    self.facing =
                        steering::rotate_towards(self.facing, bearing, config.turn_patrol, dt);
                    if steering::angle_diff(self.facing, bearing) < config.facing_tolerance_path {
                        let distance = center.distance_to(target);
                        let step = distance.min(config.speed_patrol * dt);
                        self.pos.x += self.facing.cos() * step;
                        self.pos.y += self.facing.sin() * step;
                        if distance < config.waypoint_arrive {
                            *cursor += 1;
                        }
                    }
                }
                if *cursor >= path.len() && !path.is_empty() {
                    // Route complete; draw a fresh destination next tick.
                    path.clear();
                    *cursor = 0;
                }
            }
            GuardState::Investigate { target } => {
                let target = *target;
                self.facing = steering::rotate_towards(
                    self.facing,
                    center.bearing_to(target),
                    config.turn_investigate,
                    dt,
                );
                self.advance_if_aligned(center, target, config.speed_investigate, config, dt);
            }
            GuardState::Chase { target } => {
                let target = *target;
                self.facing = steering::rotate_towards(
                    self.facing,
                    center.bearing_to(target),
                    config.turn_chase,
                    dt,
                );
                self.advance_if_aligned(center, target, config.speed_chase, config, dt);
            }
            GuardState::Search { stage: stage @ SearchStage::Move, target, timer } => {
                let destination = *target;
                self.facing = steering::rotate_towards(
                    self.facing,
                    center.bearing_to(destination),
                    config.turn_chase,
                    dt,
                );
                if steering::angle_diff(self.facing, center.bearing_to(destination))
                    < config.facing_tolerance_move
                {
                    self.pos.x += self.facing.cos() * config.speed_chase * dt;
                    self.pos.y += self.facing.sin() * config.speed_chase * dt;
                }
                if center.distance_to(destination) < config.search_arrive {
                    *stage = SearchStage::Spin;
                    *timer = 0.0;
                }
            }
            GuardState::Search { stage: SearchStage::Spin, timer, .. } => {
                *timer += dt;
                let expired = *timer >= config.search_spin_time;
                self.facing = steering::rotate_in_place(self.facing, config.turn_search, dt);
                if expired {
                    self.detection = 0.0;
                    self.set_state(GuardState::idle_patrol(), events);
                }
            }
        }
    }

    /// Turn-then-move coupling: translate along facing only once roughly
    /// facing the bearing to the target.
    fn advance_if_aligned(
        &mut self,
        center: Vec2,
        target: Vec2,
        speed: f32,
        config: &SimConfig,
        dt: f32,
    ) {
        if steering::angle_diff(self.facing, center.bearing_to(target))
            < config.facing_tolerance_move
        {
            self.pos.x += self.facing.cos() * speed * dt;
            self.pos.y += self.facing.sin() * speed * dt;
        }
    }

    fn set_state(&mut self, next: GuardState, events: &mut Vec<SimEvent>) {
        let from = self.state.tag();
        let to = next.tag();
        if from != to {
            events.push(SimEvent::GuardStateChanged { guard: self.id, from, to });
        }
        self.state = next;
    }
}

/// Draws random cells until one is lit floor, capped so a grid with no
/// reachable floor degrades to an idle tick instead of a livelock.
fn random_floor_cell(grid: &Grid, rng: &mut ChaCha8Rng, attempts: u32) -> Option<Cell> {
    for _ in 0..attempts {
        let cell = Cell {
            row: pick_index(rng, grid.height()) as i32,
            col: pick_index(rng, grid.width()) as i32,
        };
        if grid.tile_at(cell).is_walkable() {
            return Some(cell);
        }
    }
    None
}
