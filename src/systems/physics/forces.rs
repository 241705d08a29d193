use crate::core::math::{clamp_vec, drag_force};
use crate::core::Vec2;
use crate::rigid_body::Body;

use super::MAX_FORCE;

/// Sum the forces acting on a body this tick, clamped componentwise to
/// `[-MAX_FORCE, MAX_FORCE]`.
#[inline(always)]
pub fn accumulate_forces(body: &Body, gravity: Vec2, fluid_density: f32) -> Vec2 {
    let mut total = Vec2::zero();

    // Weight
    total += gravity * body.mass;

    // Air/fluid resistance on the body's frontal area
    total += drag_force(fluid_density, body.drag, body.surface_area, body.velocity);

    clamp_vec(total, -MAX_FORCE, MAX_FORCE)
}
