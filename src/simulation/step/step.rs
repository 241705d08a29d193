use crate::core::Vec2;
use crate::systems::physics::{collision, integrate};

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore, dt: f32) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.body_count = world.bodies.len() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let gravity = world.gravity;
    let density = world.density;

    // === INTEGRATION PASS ===
    // Forces, Verlet displacement, trapezoidal velocity advance
    if perf_on {
        let t0 = PerfTimer::start();
        integrate_all(world, gravity, density, dt);
        world.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        integrate_all(world, gravity, density, dt);
    }

    // === BOUNDARY COLLISION PASS ===
    // Runs after every body has integrated, as a second pass over all
    let width = world.width as f32;
    let height = world.height as f32;
    if perf_on {
        let t0 = PerfTimer::start();
        let resolved = resolve_all(world, width, height);
        world.perf_stats.collision_ms = t0.elapsed_ms();
        world.perf_stats.collisions_resolved = resolved;
    } else {
        resolve_all(world, width, height);
    }

    if perf_on {
        // Post-step snapshot
        world.perf_stats.bodies_processed = world.bodies.len() as u32;

        let mut max_speed = 0.0f32;
        for body in world.bodies.iter() {
            let speed = body.velocity.length();
            if speed > max_speed {
                max_speed = speed;
            }
        }
        world.perf_stats.max_body_speed = max_speed;

        if let Some(start) = step_start {
            world.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    world.frame += 1;
}

fn integrate_all(world: &mut WorldCore, gravity: Vec2, density: f32, dt: f32) {
    for body in world.bodies.iter_mut() {
        integrate::integrate_body(body, gravity, density, dt);
    }
}

fn resolve_all(world: &mut WorldCore, width: f32, height: f32) -> u32 {
    let mut resolved = 0;
    for body in world.bodies.iter_mut() {
        resolved += collision::resolve_boundaries(body, width, height);
    }
    resolved
}
