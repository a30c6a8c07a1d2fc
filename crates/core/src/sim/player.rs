//! Player locomotion for one tick: intent to displacement plus the noise
//! level the movement emits. Collision rollback happens in the step
//! function after this runs.

use crate::config::SimConfig;
use crate::state::Player;
use crate::types::MoveIntent;

pub(crate) const NOISE_SILENT: u8 = 0;
pub(crate) const NOISE_WALK: u8 = 1;
pub(crate) const NOISE_SPRINT: u8 = 3;

/// Applies one tick of movement intent. Returns whether the player tried
/// to move this tick; a zero direction is a standstill and emits nothing.
pub(crate) fn apply_intent(
    player: &mut Player,
    config: &SimConfig,
    intent: &MoveIntent,
    dt: f32,
) -> bool {
    player.crouching = intent.crouch;
    player.sprinting = intent.sprint;

    let length = intent.dir.x.hypot(intent.dir.y);
    if length == 0.0 {
        player.noise_level = NOISE_SILENT;
        return false;
    }

    let mut speed = config.player_speed;
    if player.crouching {
        speed *= config.crouch_multiplier;
    } else if player.sprinting {
        speed *= config.sprint_multiplier;
    }

    player.pos.x += intent.dir.x / length * speed * dt;
    player.pos.y += intent.dir.y / length * speed * dt;

    player.noise_level = if player.crouching {
        NOISE_SILENT
    } else if player.sprinting {
        NOISE_SPRINT
    } else {
        NOISE_WALK
    };
    true
}
