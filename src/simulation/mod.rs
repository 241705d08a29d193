//! World orchestration for the rigid-body sandbox.
//!
//! `WorldCore` only orchestrates: force accumulation, integration, and
//! collision response live in `systems/physics`, per-body state in
//! `systems/rigid_body`, construction input in `domain/scene`. The
//! wasm-facing wrapper is in `facade`.

use crate::core::Vec2;
use crate::domain::scene::SceneBundle;
use crate::systems::rigid_body::Body;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world: ordered bodies plus the shared environment.
pub struct WorldCore {
    bodies: Vec<Body>,

    // Environment
    gravity: Vec2,
    density: f32,
    width: u32,
    height: u32,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a new world with given boundary extents
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(width, height)
    }

    pub fn load_scene_bundle_json(&mut self, json: &str) -> Result<(), String> {
        let bundle = SceneBundle::from_json(json)?;
        commands::load_scene_bundle(self, &bundle)
    }

    pub fn load_scene_bundle(&mut self, bundle: &SceneBundle) -> Result<(), String> {
        commands::load_scene_bundle(self, bundle)
    }

    /// Boot the built-in single-box demo scene
    pub fn load_demo_scene(&mut self) -> Result<(), String> {
        commands::load_scene_bundle(self, &SceneBundle::demo())
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn gravity(&self) -> Vec2 { self.gravity }

    pub fn density(&self) -> f32 { self.density }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        settings::set_gravity(self, x, y);
    }

    /// Nudge gravity by a delta on each axis (keyboard settings hook)
    pub fn adjust_gravity(&mut self, dx: f32, dy: f32) {
        settings::adjust_gravity(self, dx, dy);
    }

    pub fn set_density(&mut self, density: f32) {
        settings::set_density(self, density);
    }

    pub fn adjust_density(&mut self, amount: f32) {
        settings::adjust_density(self, amount);
    }

    /// Append a body; names are not checked for uniqueness
    pub fn add_body(&mut self, body: Body) {
        commands::add_body(self, body);
    }

    /// First body matching `name`, in insertion order
    pub fn get_body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|body| body.name == name)
    }

    pub fn get_body_mut(&mut self, name: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|body| body.name == name)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    // === SPAWN COMMANDS ===

    /// Spawn a circle body with the default drag profile
    pub fn spawn_circle(&mut self, name: &str, x: f32, y: f32, radius: f32, mass: f32) {
        commands::spawn_circle(self, name, x, y, radius, mass);
    }

    /// Spawn a rect body from flat `[x0, y0, x1, y1, ...]` local vertices
    pub fn spawn_rect(
        &mut self,
        name: &str,
        x: f32,
        y: f32,
        vertices: &[f32],
        radius: f32,
        mass: f32,
    ) -> Result<(), String> {
        commands::spawn_rect(self, name, x, y, vertices, radius, mass)
    }

    /// Drop all bodies and restart the frame counter
    pub fn clear(&mut self) {
        commands::clear(self);
    }

    // === BODY PARAMETER COMMANDS (settings layer) ===
    // Each returns false when no body matches the name.

    pub fn set_body_position(&mut self, name: &str, x: f32, y: f32) -> bool {
        commands::set_body_position(self, name, x, y)
    }

    pub fn set_body_velocity(&mut self, name: &str, x: f32, y: f32) -> bool {
        commands::set_body_velocity(self, name, x, y)
    }

    pub fn set_body_restitution(&mut self, name: &str, restitution: f32) -> bool {
        commands::set_body_restitution(self, name, restitution)
    }

    pub fn adjust_body_restitution(&mut self, name: &str, amount: f32) -> bool {
        commands::adjust_body_restitution(self, name, amount)
    }

    pub fn set_body_drag(&mut self, name: &str, drag: f32) -> bool {
        commands::set_body_drag(self, name, drag)
    }

    pub fn adjust_body_drag(&mut self, name: &str, amount: f32) -> bool {
        commands::adjust_body_drag(self, name, amount)
    }

    pub fn set_body_angle(&mut self, name: &str, angle: f32) -> bool {
        commands::set_body_angle(self, name, angle)
    }

    pub fn set_body_angular_force(&mut self, name: &str, force: f32) -> bool {
        commands::set_body_angular_force(self, name, force)
    }

    pub fn set_body_scale(&mut self, name: &str, scale: f32) -> bool {
        commands::set_body_scale(self, name, scale)
    }

    /// JSON display snapshot of the world and every body
    pub fn snapshot_json(&self) -> String {
        commands::snapshot_json(self)
    }

    /// Advance the simulation by `dt` seconds of elapsed wall time
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
