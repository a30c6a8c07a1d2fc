//! Keyboard capture for one rendered frame, split into a raw held-key
//! snapshot and the pure mapping to a movement intent.

use core::{MoveIntent, Vec2};
use macroquad::prelude::{KeyCode, is_key_down, is_key_pressed};

#[derive(Clone, Copy, Debug, Default)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub crouch: bool,
    pub sprint: bool,
}

pub struct FrameInput {
    pub held: HeldKeys,
    pub regenerate: bool,
}

pub fn capture_frame_input() -> FrameInput {
    let held = HeldKeys {
        up: is_key_down(KeyCode::W) || is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::S) || is_key_down(KeyCode::Down),
        left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
        crouch: is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl),
        sprint: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
    };
    FrameInput { held, regenerate: is_key_pressed(KeyCode::R) }
}

/// Opposing directions cancel; the simulation normalizes the vector.
pub fn intent_from_keys(held: HeldKeys) -> MoveIntent {
    let mut dir = Vec2::ZERO;
    if held.up {
        dir.y -= 1.0;
    }
    if held.down {
        dir.y += 1.0;
    }
    if held.left {
        dir.x -= 1.0;
    }
    if held.right {
        dir.x += 1.0;
    }
    MoveIntent { dir, crouch: held.crouch, sprint: held.sprint }
}
