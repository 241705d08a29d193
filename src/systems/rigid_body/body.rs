use std::f32::consts::PI;
use std::fmt;

use crate::core::line::{to_lines, to_vertices};
use crate::core::math::{rotate_around, scale_lines, to_world_vertices};
use crate::core::{Line, Vec2};

/// Rect-body construction failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// Rect bodies are built from exactly 4 local vertices.
    InvalidVertexCount { count: usize },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVertexCount { count } => {
                write!(f, "rect body requires exactly 4 vertices (got {count})")
            }
        }
    }
}

impl std::error::Error for ShapeError {}

/// Shape variant of a body. Circles carry no extra geometry; rects carry
/// their polygon state.
#[derive(Debug)]
pub enum Shape {
    Circle,
    Rect(RectGeometry),
}

/// Oriented-rectangle geometry.
///
/// `world_vertices` and `sides` are derived from the shape vertices, the
/// body position, `angle`, and `scale`; the owning body re-runs the
/// refresh on every position/angle/scale change so they never go stale.
#[derive(Debug)]
pub struct RectGeometry {
    shape_vertices: [Vec2; 4],
    world_vertices: [Vec2; 4],
    sides: [Line; 4],
    /// Nominal radians; the refresh hands it unchanged to the
    /// degree-taking rotation.
    angle: f32,
    scale: f32,
    pub angular_velocity: f32,
    pub angular_acceleration: f32,
    pub angular_force: f32,
}

impl RectGeometry {
    fn new(shape_vertices: [Vec2; 4]) -> Self {
        Self {
            shape_vertices,
            world_vertices: [Vec2::zero(); 4],
            sides: [Line::default(); 4],
            angle: 0.0,
            scale: 1.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            angular_force: 0.0,
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn shape_vertices(&self) -> &[Vec2; 4] {
        &self.shape_vertices
    }

    pub fn world_vertices(&self) -> &[Vec2; 4] {
        &self.world_vertices
    }

    /// `sides[i]` connects `world_vertices[i]` to `world_vertices[(i+1) % 4]`.
    pub fn sides(&self) -> &[Line; 4] {
        &self.sides
    }

    /// Local-to-world refresh. The fixed order is: translate the stored
    /// world vertices by the position delta (skipped unless both delta
    /// components are nonzero), rescale the stored shape vertices
    /// through their lines, translate them to world space from the new
    /// position, rotate each about the position, then rebuild the
    /// closing sides. The order matters once `scale != 1`.
    fn refresh(&mut self, position: Vec2, position_delta: Vec2) {
        if position_delta.x != 0.0 && position_delta.y != 0.0 {
            for vertex in self.world_vertices.iter_mut() {
                *vertex += position_delta;
            }
        }

        let scaled_lines = scale_lines(to_lines(&self.shape_vertices), self.scale);
        let scaled_vertices = to_vertices(&scaled_lines);

        let unrotated = to_world_vertices(&scaled_vertices, position);

        for (i, vertex) in unrotated.iter().enumerate() {
            self.world_vertices[i] = rotate_around(*vertex, position, self.angle, true);
        }

        self.sides = to_lines(&self.world_vertices);
    }
}

/// A simulated object: position, velocity, and the coefficients the
/// per-tick force pass reads.
#[derive(Debug)]
pub struct Body {
    /// Lookup key; uniqueness within a world is the caller's job.
    pub name: String,
    position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Integration divisor; keep it positive. A zero mass divides to
    /// infinity and the engine lets that propagate.
    pub mass: f32,
    /// Half-extent of the square bounding footprint used for boundary
    /// collision (side `2 * radius`), for both shape variants.
    pub radius: f32,
    /// Signed bounce coefficient. A negative value flips the colliding
    /// velocity component; that sign convention is what makes a body
    /// bounce off a wall.
    pub restitution: f32,
    /// Drag coefficient fed to the fluid-resistance force.
    pub drag: f32,
    /// Frontal area facing the fluid, in the screen-unit convention.
    pub surface_area: f32,
    pub shape: Shape,
}

impl Body {
    /// Circle body at `(x, y)` with the default drag profile: unit drag
    /// coefficient and the frontal area of a disc of `radius`.
    pub fn new_circle(name: &str, x: f32, y: f32, radius: f32, mass: f32) -> Self {
        Self {
            name: name.to_string(),
            position: Vec2::new(x, y),
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass,
            radius,
            restitution: 0.0,
            drag: 1.0,
            surface_area: PI * radius * radius / 50_000.0,
            shape: Shape::Circle,
        }
    }

    /// Oriented-rectangle body from exactly 4 local vertices. Fails with
    /// [`ShapeError::InvalidVertexCount`] on any other count, without
    /// partially constructing the body.
    pub fn new_rect(
        name: &str,
        vertices: &[Vec2],
        x: f32,
        y: f32,
        radius: f32,
        mass: f32,
    ) -> Result<Self, ShapeError> {
        let local: [Vec2; 4] = vertices
            .try_into()
            .map_err(|_| ShapeError::InvalidVertexCount {
                count: vertices.len(),
            })?;

        let mut body = Self {
            name: name.to_string(),
            position: Vec2::new(x, y),
            velocity: Vec2::zero(),
            acceleration: Vec2::zero(),
            mass,
            radius,
            restitution: 0.0,
            drag: 1.0,
            surface_area: PI * radius * radius / 50_000.0,
            shape: Shape::Rect(RectGeometry::new(local)),
        };
        body.update_vertices(Vec2::zero());

        Ok(body)
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Move the body; rect geometry refreshes from the new position.
    pub fn set_position(&mut self, x: f32, y: f32) {
        let next = Vec2::new(x, y);
        let delta = self.position - next;

        self.position = next;

        self.update_vertices(delta);
    }

    /// Plain assignment for both shape variants.
    pub fn set_velocity(&mut self, x: f32, y: f32) {
        self.velocity = Vec2::new(x, y);
    }

    pub fn angle(&self) -> f32 {
        match &self.shape {
            Shape::Rect(geometry) => geometry.angle,
            Shape::Circle => 0.0,
        }
    }

    /// Set the rotation angle; a no-op for circles.
    pub fn set_angle(&mut self, angle: f32) {
        if let Shape::Rect(geometry) = &mut self.shape {
            geometry.angle = angle;
        }
        self.update_vertices(Vec2::zero());
    }

    pub fn scale(&self) -> f32 {
        match &self.shape {
            Shape::Rect(geometry) => geometry.scale,
            Shape::Circle => 1.0,
        }
    }

    /// Set the uniform polygon scale; a no-op for circles.
    pub fn set_scale(&mut self, scale: f32) {
        if let Shape::Rect(geometry) = &mut self.shape {
            geometry.scale = scale;
        }
        self.update_vertices(Vec2::zero());
    }

    pub fn angular_velocity(&self) -> f32 {
        match &self.shape {
            Shape::Rect(geometry) => geometry.angular_velocity,
            Shape::Circle => 0.0,
        }
    }

    pub fn angular_force(&self) -> f32 {
        match &self.shape {
            Shape::Rect(geometry) => geometry.angular_force,
            Shape::Circle => 0.0,
        }
    }

    /// Store the scalar angular force for the external driver to read
    /// back; the engine never integrates it.
    pub fn set_angular_force(&mut self, force: f32) {
        if let Shape::Rect(geometry) = &mut self.shape {
            geometry.angular_force = force;
        }
    }

    /// World-space polygon vertices; `None` for circles.
    pub fn world_vertices(&self) -> Option<&[Vec2; 4]> {
        match &self.shape {
            Shape::Rect(geometry) => Some(geometry.world_vertices()),
            Shape::Circle => None,
        }
    }

    /// Polygon sides closing the loop; `None` for circles.
    pub fn sides(&self) -> Option<&[Line; 4]> {
        match &self.shape {
            Shape::Rect(geometry) => Some(geometry.sides()),
            Shape::Circle => None,
        }
    }

    fn update_vertices(&mut self, position_delta: Vec2) {
        let position = self.position;
        if let Shape::Rect(geometry) = &mut self.shape {
            geometry.refresh(position, position_delta);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_vertices(half: f32) -> Vec<Vec2> {
        vec![
            Vec2::new(-half, -half),
            Vec2::new(half, -half),
            Vec2::new(half, half),
            Vec2::new(-half, half),
        ]
    }

    fn approx(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn rect_construction_rejects_wrong_vertex_counts() {
        let three = square_vertices(50.0)[..3].to_vec();
        let err = Body::new_rect("bad", &three, 0.0, 0.0, 50.0, 1.0).unwrap_err();
        assert_eq!(err, ShapeError::InvalidVertexCount { count: 3 });

        let mut five = square_vertices(50.0);
        five.push(Vec2::zero());
        let err = Body::new_rect("bad", &five, 0.0, 0.0, 50.0, 1.0).unwrap_err();
        assert_eq!(err, ShapeError::InvalidVertexCount { count: 5 });
    }

    #[test]
    fn rect_construction_places_world_vertices_around_position() {
        let body = Body::new_rect("box", &square_vertices(50.0), 250.0, 300.0, 50.0, 0.1).unwrap();

        let vertices = body.world_vertices().unwrap();
        assert!(approx(vertices[0], Vec2::new(200.0, 250.0)));
        assert!(approx(vertices[1], Vec2::new(300.0, 250.0)));
        assert!(approx(vertices[2], Vec2::new(300.0, 350.0)));
        assert!(approx(vertices[3], Vec2::new(200.0, 350.0)));
    }

    #[test]
    fn sides_connect_world_vertices_in_a_closed_loop() {
        let body = Body::new_rect("box", &square_vertices(50.0), 100.0, 100.0, 50.0, 1.0).unwrap();

        let vertices = body.world_vertices().unwrap();
        let sides = body.sides().unwrap();
        for i in 0..4 {
            assert_eq!(sides[i].start, vertices[i]);
            assert_eq!(sides[i].stop, vertices[(i + 1) % 4]);
        }
    }

    #[test]
    fn moving_a_rect_body_moves_its_world_vertices() {
        let mut body =
            Body::new_rect("box", &square_vertices(50.0), 100.0, 100.0, 50.0, 1.0).unwrap();

        body.set_position(150.0, 120.0);

        let vertices = body.world_vertices().unwrap();
        assert!(approx(vertices[0], Vec2::new(100.0, 70.0)));
        assert!(approx(vertices[2], Vec2::new(200.0, 170.0)));
    }

    #[test]
    fn scale_rescales_before_the_rotation_step() {
        let mut body =
            Body::new_rect("box", &square_vertices(50.0), 100.0, 100.0, 50.0, 1.0).unwrap();

        body.set_scale(0.5);
        let vertices = body.world_vertices().unwrap();
        assert!(approx(vertices[0], Vec2::new(75.0, 75.0)));
        assert!(approx(vertices[2], Vec2::new(125.0, 125.0)));

        // 90 goes through the degree-taking rotation.
        body.set_angle(90.0);
        let vertices = body.world_vertices().unwrap();
        assert!(approx(vertices[0], Vec2::new(125.0, 75.0)));
        assert!(approx(vertices[1], Vec2::new(125.0, 125.0)));
    }

    #[test]
    fn circle_bodies_carry_no_polygon_geometry() {
        let body = Body::new_circle("ball", 10.0, 10.0, 5.0, 1.0);
        assert!(body.world_vertices().is_none());
        assert!(body.sides().is_none());
        assert_eq!(body.angle(), 0.0);
        assert_eq!(body.scale(), 1.0);
    }

    #[test]
    fn velocity_setter_is_plain_assignment() {
        let mut body = Body::new_circle("ball", 0.0, 0.0, 5.0, 1.0);
        body.set_velocity(1.5, -2.5);
        assert_eq!(body.velocity, Vec2::new(1.5, -2.5));
    }
}
