//! Stateless per-tick physics pass.
//!
//! Force accumulation, integration, and boundary collision response are
//! free functions over `&mut Body` plus the world's environment values;
//! the simulation step drives them over every body in collection order.

pub mod collision;
pub mod forces;
pub mod integrate;

/// Componentwise bound on the accumulated force.
pub const MAX_FORCE: f32 = 10.0;

/// Componentwise bound on body velocity.
pub const MAX_VELOCITY: f32 = 2.0;

/// Conversion from the integrator's distance unit to the position unit,
/// applied to every position delta. Fixed part of the contract, not a
/// tunable.
pub const UNIT_SCALE: f32 = 100.0;
