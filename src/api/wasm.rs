//! Wasm-facing API surface.

pub use crate::simulation::{PerfStats, World};
