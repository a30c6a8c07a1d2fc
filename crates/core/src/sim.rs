//! Fixed-step simulation driver. `Simulation` owns the world, the seeded
//! RNG, and the event log; hosts call [`Simulation::tick`] once per frame
//! with the player's movement intent.
//!
//! Per-tick order is fixed: player movement and rollback, noise derivation,
//! then each guard's behavior followed by its own rollback. Guards within a
//! tick always observe the player's already-resolved position.

mod guard;
mod player;

pub mod pathfinding;
pub mod perception;
pub mod steering;

use std::f32::consts::TAU;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;
use xxhash_rust::xxh3::Xxh3;

use crate::config::SimConfig;
use crate::mapgen;
use crate::state::{footprint_corners, Grid, Guard, GuardState, Player, SearchStage, World};
use crate::types::{GuardStateTag, MoveIntent, NoiseEvent, SimEvent, TileKind, Vec2};

/// What one tick produced, for hosts that react to it (HUD, audio cues).
#[derive(Clone, Copy, Debug, Default)]
pub struct TickReport {
    /// The noise the player emitted this tick, if any.
    pub noise: Option<NoiseEvent>,
    /// Whether the player's movement was rolled back by a wall.
    pub player_blocked: bool,
}

pub struct Simulation {
    seed: u64,
    tick: u64,
    rng: ChaCha8Rng,
    config: SimConfig,
    world: World,
    log: Vec<SimEvent>,
}

impl Simulation {
    /// Builds a fresh level. All randomness, including the tile fill and
    /// every spawn, comes from the one stream seeded here, so equal seeds
    /// give equal worlds.
    pub fn new(seed: u64, config: SimConfig) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let grid = mapgen::generate_grid(&mut rng, &config);

        let player_pos = mapgen::random_spawn(
            &mut rng,
            &grid,
            config.player_size,
            false,
            config.spawn_attempts,
        );
        let player = Player::new(player_pos, config.player_size);

        let mut guards = SlotMap::with_key();
        for _ in 0..config.guard_count {
            let pos = mapgen::random_spawn(
                &mut rng,
                &grid,
                config.guard_size,
                true,
                config.spawn_attempts,
            );
            let facing = steering::wrap_angle(mapgen::unit_f32(&mut rng) * TAU);
            let id = guards.insert(Guard::new(pos, config.guard_size, facing));
            guards[id].id = id;
        }

        Self {
            seed,
            tick: 0,
            rng,
            config,
            world: World { grid, player, guards },
            log: Vec::new(),
        }
    }

    /// Advances the world by `dt` seconds.
    pub fn tick(&mut self, intent: &MoveIntent, dt: f32) -> TickReport {
        debug_assert!(dt >= 0.0, "time does not run backwards");
        let World { grid, player, guards } = &mut self.world;
        let grid = &*grid;

        let prev_player_pos = player.pos;
        let moved = player::apply_intent(player, &self.config, intent, dt);
        let player_blocked = footprint_blocked(grid, player.pos, player.size, false);
        if player_blocked {
            player.pos = prev_player_pos;
        }

        // Noise is sourced from the resolved position, so a rolled-back
        // sprint still rings out from where the player actually stands.
        let noise =
            (moved && player.noise_level > 0).then(|| NoiseEvent { pos: player.center() });

        for (_, guard) in guards.iter_mut() {
            let prev_pos = guard.pos;
            let prev_facing = guard.facing;
            guard.update(dt, grid, &self.config, player, noise.as_ref(), &mut self.rng, &mut self.log);

            // Guards treat safe zones as solid so they can never stand
            // where the player is untouchable.
            if footprint_blocked(grid, guard.pos, guard.size, true) {
                guard.pos = prev_pos;
                match &mut guard.state {
                    GuardState::Patrol { path, cursor } => {
                        path.clear();
                        *cursor = 0;
                    }
                    GuardState::Search { stage: stage @ SearchStage::Move, timer, .. } => {
                        *stage = SearchStage::Spin;
                        *timer = 0.0;
                    }
                    _ => {}
                }
                if matches!(guard.state, GuardState::Patrol { .. }) {
                    // Re-head somewhere else instead of grinding into the
                    // obstacle until the next route is drawn.
                    let jitter =
                        (mapgen::unit_f32(&mut self.rng) * 2.0 - 1.0) * self.config.reheading_cone;
                    guard.facing = steering::wrap_angle(prev_facing + jitter);
                }
                self.log.push(SimEvent::GuardBlocked { guard: guard.id });
            }
        }

        self.tick += 1;
        TickReport { noise, player_blocked }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Events accumulated since construction, in emission order.
    pub fn log(&self) -> &[SimEvent] {
        &self.log
    }

    /// Order-sensitive digest of the mutable world state. Two runs with the
    /// same seed and the same intent sequence produce the same digest at
    /// every tick.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.update(&self.seed.to_le_bytes());
        hasher.update(&self.tick.to_le_bytes());

        let player = &self.world.player;
        hasher.update(&player.pos.x.to_bits().to_le_bytes());
        hasher.update(&player.pos.y.to_bits().to_le_bytes());
        hasher.update(&[player.crouching as u8, player.sprinting as u8, player.noise_level]);

        for (_, guard) in self.world.guards.iter() {
            hasher.update(&guard.pos.x.to_bits().to_le_bytes());
            hasher.update(&guard.pos.y.to_bits().to_le_bytes());
            hasher.update(&guard.facing.to_bits().to_le_bytes());
            hasher.update(&guard.detection.to_bits().to_le_bytes());
            hasher.update(&[tag_code(guard.state.tag())]);
        }
        hasher.digest()
    }
}

fn tag_code(tag: GuardStateTag) -> u8 {
    match tag {
        GuardStateTag::Patrol => 0,
        GuardStateTag::Investigate => 1,
        GuardStateTag::Chase => 2,
        GuardStateTag::Search => 3,
    }
}

/// Whether any footprint corner of an axis-aligned body at `pos` overlaps
/// an impassable tile. Safe zones count as impassable only for guards.
fn footprint_blocked(grid: &Grid, pos: Vec2, size: f32, treat_safe_as_solid: bool) -> bool {
    footprint_corners(pos, size).into_iter().any(|corner| {
        let tile = grid.tile_at_world(corner.x, corner.y);
        tile.blocks_movement() || (treat_safe_as_solid && tile == TileKind::Safe)
    })
}
