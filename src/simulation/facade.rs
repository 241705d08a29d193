use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given boundary extents
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn gravity_x(&self) -> f32 { self.core.gravity().x }

    #[wasm_bindgen(getter)]
    pub fn gravity_y(&self) -> f32 { self.core.gravity().y }

    #[wasm_bindgen(getter)]
    pub fn density(&self) -> f32 { self.core.density() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gravity(&mut self, x: f32, y: f32) {
        self.core.set_gravity(x, y);
    }

    /// Nudge gravity by a delta on each axis (keyboard settings hook)
    pub fn adjust_gravity(&mut self, dx: f32, dy: f32) {
        self.core.adjust_gravity(dx, dy);
    }

    pub fn set_density(&mut self, density: f32) {
        self.core.set_density(density);
    }

    pub fn adjust_density(&mut self, amount: f32) {
        self.core.adjust_density(amount);
    }

    /// Spawn a circle body with the default drag profile
    pub fn spawn_circle(&mut self, name: &str, x: f32, y: f32, radius: f32, mass: f32) {
        self.core.spawn_circle(name, x, y, radius, mass);
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
    ) -> Result<(), JsValue> {
        self.core
            .spawn_rect(name, x, y, vertices, radius, mass)
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn load_scene_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_scene_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Boot the built-in single-box demo scene
    pub fn load_demo_scene(&mut self) -> Result<(), JsValue> {
        self.core
            .load_demo_scene()
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Clear all bodies
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward by `dt` seconds of elapsed time
    pub fn step(&mut self, dt: f32) {
        self.core.step(dt);
    }

    // === BODY PARAMETER API (settings layer) ===
    // Each returns false when no body matches the name.

    pub fn set_body_position(&mut self, name: &str, x: f32, y: f32) -> bool {
        self.core.set_body_position(name, x, y)
    }

    pub fn set_body_velocity(&mut self, name: &str, x: f32, y: f32) -> bool {
        self.core.set_body_velocity(name, x, y)
    }

    pub fn set_body_restitution(&mut self, name: &str, restitution: f32) -> bool {
        self.core.set_body_restitution(name, restitution)
    }

    pub fn adjust_body_restitution(&mut self, name: &str, amount: f32) -> bool {
        self.core.adjust_body_restitution(name, amount)
    }

    pub fn set_body_drag(&mut self, name: &str, drag: f32) -> bool {
        self.core.set_body_drag(name, drag)
    }

    pub fn adjust_body_drag(&mut self, name: &str, amount: f32) -> bool {
        self.core.adjust_body_drag(name, amount)
    }

    pub fn set_body_angle(&mut self, name: &str, angle: f32) -> bool {
        self.core.set_body_angle(name, angle)
    }

    pub fn set_body_angular_force(&mut self, name: &str, force: f32) -> bool {
        self.core.set_body_angular_force(name, force)
    }

    pub fn set_body_scale(&mut self, name: &str, scale: f32) -> bool {
        self.core.set_body_scale(name, scale)
    }

    // === BODY STATE READS (display layer) ===
    // NaN means "no such body"; an Infinity produced by a degenerate
    // mass passes through for the display layer to render.

    pub fn body_position_x(&self, name: &str) -> f32 {
        self.core.get_body(name).map_or(f32::NAN, |b| b.position().x)
    }

    pub fn body_position_y(&self, name: &str) -> f32 {
        self.core.get_body(name).map_or(f32::NAN, |b| b.position().y)
    }

    pub fn body_velocity_x(&self, name: &str) -> f32 {
        self.core.get_body(name).map_or(f32::NAN, |b| b.velocity.x)
    }

    pub fn body_velocity_y(&self, name: &str) -> f32 {
        self.core.get_body(name).map_or(f32::NAN, |b| b.velocity.y)
    }

    pub fn body_angle(&self, name: &str) -> f32 {
        self.core.get_body(name).map_or(f32::NAN, |b| b.angle())
    }

    pub fn body_restitution(&self, name: &str) -> f32 {
        self.core.get_body(name).map_or(f32::NAN, |b| b.restitution)
    }

    pub fn body_drag(&self, name: &str) -> f32 {
        self.core.get_body(name).map_or(f32::NAN, |b| b.drag)
    }

    pub fn body_angular_velocity(&self, name: &str) -> f32 {
        self.core.get_body(name).map_or(f32::NAN, |b| b.angular_velocity())
    }

    pub fn body_angular_force(&self, name: &str) -> f32 {
        self.core.get_body(name).map_or(f32::NAN, |b| b.angular_force())
    }

    /// Flat `[x0, y0, x1, y1, ...]` world vertices of a rect body;
    /// empty for circles and unknown names
    pub fn body_world_vertices(&self, name: &str) -> Vec<f32> {
        match self.core.get_body(name).and_then(|b| b.world_vertices()) {
            Some(vertices) => {
                let mut flat = Vec::with_capacity(vertices.len() * 2);
                for vertex in vertices.iter() {
                    flat.push(vertex.x);
                    flat.push(vertex.y);
                }
                flat
            }
            None => Vec::new(),
        }
    }

    /// JSON display snapshot for stat overlays; non-finite floats
    /// serialize as null
    pub fn snapshot_json(&self) -> String {
        self.core.snapshot_json()
    }
}
