//! Math primitives: vectors, line segments, and the pure function kit.

pub mod line;
pub mod math;
pub mod vec2;

pub use line::Line;
pub use vec2::Vec2;
