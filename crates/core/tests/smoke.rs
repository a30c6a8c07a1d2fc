//! Long-run soak over procedurally generated levels: invariants that must
//! hold regardless of what the fill and the guard behaviors do.

use core::{GuardState, MoveIntent, SimConfig, Simulation, Vec2};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

const DT: f32 = 1.0 / 60.0;

fn random_intent(rng: &mut ChaCha8Rng) -> MoveIntent {
    let roll = rng.next_u32();
    let axis = |bits: u32| match bits % 3 {
        0 => -1.0,
        1 => 0.0,
        _ => 1.0,
    };
    MoveIntent {
        dir: Vec2::new(axis(roll), axis(roll >> 8)),
        crouch: roll & 0x1_0000 != 0,
        sprint: roll & 0x2_0000 != 0,
    }
}

#[test]
fn thousand_ticks_keep_every_invariant() {
    for seed in [11u64, 4242, 0xFEED] {
        let mut sim = Simulation::new(seed, SimConfig::default());
        let mut script = ChaCha8Rng::seed_from_u64(seed.wrapping_mul(31));

        let config = sim.config().clone();
        let world_w = config.world_width();
        let world_h = config.world_height();

        for tick in 0..1000 {
            sim.tick(&random_intent(&mut script), DT);

            let world = sim.world();
            let player = &world.player;
            assert!(
                player.pos.x >= 0.0
                    && player.pos.y >= 0.0
                    && player.pos.x + player.size <= world_w
                    && player.pos.y + player.size <= world_h,
                "seed {seed} tick {tick}: player escaped the level at {:?}",
                player.pos
            );

            for guard in world.guards.values() {
                assert!(
                    guard.pos.x >= 0.0
                        && guard.pos.y >= 0.0
                        && guard.pos.x + guard.size <= world_w
                        && guard.pos.y + guard.size <= world_h,
                    "seed {seed} tick {tick}: guard escaped the level at {:?}",
                    guard.pos
                );
                assert!(
                    guard.detection >= 0.0 && guard.detection <= config.detection_threshold,
                    "seed {seed} tick {tick}: detection {} out of range",
                    guard.detection
                );
                assert!(
                    guard.facing > -std::f32::consts::PI
                        && guard.facing <= std::f32::consts::PI,
                    "seed {seed} tick {tick}: facing {} unwrapped",
                    guard.facing
                );
                if let GuardState::Search { timer, .. } = guard.state {
                    assert!(timer <= config.search_spin_time + DT);
                }
            }
        }
        assert_eq!(sim.current_tick(), 1000);
    }
}

#[test]
fn guard_count_is_stable_across_the_run() {
    let mut sim = Simulation::new(5, SimConfig::default());
    let expected = sim.config().guard_count;
    assert_eq!(sim.world().guards.len(), expected);

    let mut script = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..300 {
        sim.tick(&random_intent(&mut script), DT);
    }
    assert_eq!(sim.world().guards.len(), expected);
}
