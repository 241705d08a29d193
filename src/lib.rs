//! Gravita Engine - 2D rigid-body sandbox physics in WASM
//!
//! Bodies under gravity and fluid drag, advanced by a velocity-Verlet-style
//! position-delta integrator, bouncing off the world's axis-aligned edges.
//!
//! Architecture:
//! - core/          - Math primitives (Vec2, Line, function kit)
//! - domain/        - Scene bundles and display snapshots
//! - systems/       - Rigid bodies and the per-tick physics pass
//! - simulation/    - Orchestration only
//! - api/           - Public API

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;

pub mod world {
    pub use crate::simulation::*;
}

// Compatibility re-exports (keeps internal/external paths working)
pub use systems::physics;
pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Gravita WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::World;
