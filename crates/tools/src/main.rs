//! Headless soak runner: drives a simulation with a scripted intent stream
//! and prints the final digest plus event tallies. Two invocations with the
//! same arguments must print identical output; anything else is a
//! determinism regression.

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};
use sim_core::{MoveIntent, SimConfig, SimEvent, Simulation, Vec2};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Level seed to run
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Number of fixed steps to simulate
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Seconds per step
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Optional JSON config file overriding the defaults
    #[arg(long)]
    config: Option<String>,
}

/// Intent script drawn from a stream independent of the simulation's own,
/// so the script does not shift when internal draw counts change.
fn scripted_intent(rng: &mut ChaCha8Rng) -> MoveIntent {
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

fn main() -> Result<()> {
    let args = Args::parse();
    if !args.dt.is_finite() || args.dt <= 0.0 {
        bail!("--dt must be positive, got {}", args.dt);
    }

    let config = match &args.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {path}"))?;
            serde_json::from_str(&content)
                .with_context(|| format!("failed to parse config file: {path}"))?
        }
        None => SimConfig::default(),
    };

    let mut sim = Simulation::new(args.seed, config);
    let mut script = ChaCha8Rng::seed_from_u64(args.seed.wrapping_mul(31).wrapping_add(1));

    let mut noise_ticks = 0u64;
    let mut blocked_player_ticks = 0u64;
    for _ in 0..args.ticks {
        let report = sim.tick(&scripted_intent(&mut script), args.dt);
        if report.noise.is_some() {
            noise_ticks += 1;
        }
        if report.player_blocked {
            blocked_player_ticks += 1;
        }
    }

    let mut state_changes = 0u64;
    let mut noises_heard = 0u64;
    let mut guards_blocked = 0u64;
    for event in sim.log() {
        match event {
            SimEvent::GuardStateChanged { .. } => state_changes += 1,
            SimEvent::NoiseHeard { .. } => noises_heard += 1,
            SimEvent::GuardBlocked { .. } => guards_blocked += 1,
        }
    }

    println!("Soak complete.");
    println!("Seed: {}", args.seed);
    println!("Final Tick: {}", sim.current_tick());
    println!("Snapshot Hash: 0x{:016x}", sim.snapshot_hash());
    println!("Player noise ticks: {noise_ticks}");
    println!("Player blocked ticks: {blocked_player_ticks}");
    println!("Guard state changes: {state_changes}");
    println!("Noises heard: {noises_heard}");
    println!("Guards blocked: {guards_blocked}");

    Ok(())
}
