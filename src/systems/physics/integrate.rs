use crate::core::math::{average_vec, clamp_vec, integrate_velocity_verlet};
use crate::core::Vec2;
use crate::rigid_body::Body;

use super::{forces, MAX_VELOCITY, UNIT_SCALE};

/// Advance one body by `dt` seconds of elapsed time.
///
/// The position moves from the previous velocity and acceleration before
/// the velocity advances from the trapezoidal average of the
/// force-derived acceleration and the stored one. The stored
/// `acceleration` field itself is left untouched.
#[inline(always)]
pub fn integrate_body(body: &mut Body, gravity: Vec2, fluid_density: f32, dt: f32) {
    let total_force = forces::accumulate_forces(body, gravity, fluid_density);

    let delta = integrate_velocity_verlet(body.velocity, dt, body.acceleration) * UNIT_SCALE;
    let position = body.position();
    body.set_position(position.x + delta.x, position.y + delta.y);

    let new_acceleration = total_force / body.mass;
    let average_acceleration = average_vec(&[new_acceleration, body.acceleration]);

    let velocity = clamp_vec(
        body.velocity + average_acceleration * dt,
        -MAX_VELOCITY,
        MAX_VELOCITY,
    );
    body.set_velocity(velocity.x, velocity.y);
}
