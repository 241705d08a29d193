//! Rigid bodies for the sandbox world.
//!
//! A body stores its physical state plus, for the oriented-rectangle
//! variant, shape vertices in local coordinates (relative to the body
//! position) that are transformed to world coordinates on every
//! position, angle, or scale change.

mod body;

pub use body::{Body, RectGeometry, Shape, ShapeError};
