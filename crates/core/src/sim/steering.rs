//! Facing-angle helpers shared by the guard behaviors.

use std::f32::consts::PI;

/// Wraps an angle to (-pi, pi].
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI) - PI;
    if wrapped == -PI { PI } else { wrapped }
}

/// Absolute shortest angular distance between two bearings.
pub fn angle_diff(a: f32, b: f32) -> f32 {
    wrap_angle(b - a).abs()
}

/// One tick of rotation toward `desired`: snap when the per-tick maximum
/// covers the remaining delta, otherwise step by the maximum in the
/// delta's sign.
pub fn rotate_towards(facing: f32, desired: f32, rate: f32, dt: f32) -> f32 {
    let delta = wrap_angle(desired - facing);
    let max_rotation = rate * dt;
    if delta.abs() < max_rotation {
        wrap_angle(desired)
    } else {
        wrap_angle(facing + delta.signum() * max_rotation)
    }
}

pub fn rotate_in_place(facing: f32, rate: f32, dt: f32) -> f32 {
    wrap_angle(facing + rate * dt)
}
