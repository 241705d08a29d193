use crate::core::Vec2;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_gravity(world: &mut WorldCore, x: f32, y: f32) {
    world.gravity = Vec2::new(x, y);
}

pub(super) fn adjust_gravity(world: &mut WorldCore, dx: f32, dy: f32) {
    let gravity = world.gravity;
    set_gravity(world, gravity.x + dx, gravity.y + dy);
}

pub(super) fn set_density(world: &mut WorldCore, density: f32) {
    world.density = density;
}

pub(super) fn adjust_density(world: &mut WorldCore, amount: f32) {
    world.density += amount;
}
