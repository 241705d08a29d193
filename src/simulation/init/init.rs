use crate::core::Vec2;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32) -> WorldCore {
    WorldCore {
        bodies: Vec::new(),
        gravity: Vec2::zero(),
        density: 0.0,
        width,
        height,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
