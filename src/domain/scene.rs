//! Scene bundles and display snapshots.
//!
//! A scene bundle is the JSON construction input for a world: the shared
//! environment plus body definitions. Snapshots go the other way,
//! serializing per-body display state for stat overlays. serde_json
//! writes non-finite floats as `null`, so a runaway velocity reaches the
//! display layer as `null` for it to render as "Inf" rather than the
//! core clamping it away.

use std::f32::consts::PI;

use serde::{Deserialize, Serialize};

use crate::core::Vec2;
use crate::systems::rigid_body::Body;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Rect,
}

/// Construction input for one body.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BodyDef {
    pub name: String,
    pub shape: ShapeKind,
    pub position: [f32; 2],
    /// Local vertices for rect bodies; must hold exactly 4 entries.
    #[serde(default)]
    pub vertices: Vec<[f32; 2]>,
    pub radius: f32,
    pub mass: f32,
    #[serde(default = "default_drag")]
    pub drag: f32,
    #[serde(default)]
    pub restitution: f32,
    /// Defaults to the frontal area of a disc of `radius`.
    #[serde(default)]
    pub surface_area: Option<f32>,
    #[serde(default)]
    pub velocity: [f32; 2],
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_drag() -> f32 {
    1.0
}

fn default_scale() -> f32 {
    1.0
}

impl BodyDef {
    /// Instantiate the definition. A rect definition without exactly 4
    /// vertices fails without partially constructing the body.
    pub fn build(&self) -> Result<Body, String> {
        let [x, y] = self.position;

        let mut body = match self.shape {
            ShapeKind::Circle => Body::new_circle(&self.name, x, y, self.radius, self.mass),
            ShapeKind::Rect => {
                let vertices: Vec<Vec2> = self
                    .vertices
                    .iter()
                    .map(|[vx, vy]| Vec2::new(*vx, *vy))
                    .collect();
                Body::new_rect(&self.name, &vertices, x, y, self.radius, self.mass)
                    .map_err(|e| e.to_string())?
            }
        };

        body.drag = self.drag;
        body.restitution = self.restitution;
        body.surface_area = self
            .surface_area
            .unwrap_or(PI * self.radius * self.radius / 50_000.0);
        body.set_velocity(self.velocity[0], self.velocity[1]);
        if self.scale != 1.0 {
            body.set_scale(self.scale);
        }

        Ok(body)
    }
}

/// World construction input: environment plus body definitions.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneBundle {
    #[serde(default)]
    pub gravity: [f32; 2],
    #[serde(default)]
    pub density: f32,
    pub bodies: Vec<BodyDef>,
}

impl SceneBundle {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }

    /// The classic single-box scene: a 50-radius, 0.1-mass box floating
    /// in a dense zero-gravity fluid, ready for keyboard-driven gravity.
    pub fn demo() -> Self {
        Self {
            gravity: [0.0, 0.0],
            density: 10.0,
            bodies: vec![BodyDef {
                name: "OrangeBox".to_string(),
                shape: ShapeKind::Rect,
                position: [250.0, 300.0],
                vertices: vec![[-50.0, -50.0], [50.0, -50.0], [50.0, 50.0], [-50.0, 50.0]],
                radius: 50.0,
                mass: 0.1,
                drag: 1.0,
                restitution: 0.0,
                surface_area: None,
                velocity: [0.0, 0.0],
                scale: 1.0,
            }],
        }
    }
}

/// Per-body display state for stat overlays.
#[derive(Serialize)]
pub struct BodySnapshot {
    pub name: String,
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub angle: f32,
    pub restitution: f32,
    pub drag: f32,
    pub angular_velocity: f32,
    pub angular_force: f32,
}

impl BodySnapshot {
    pub fn of(body: &Body) -> Self {
        let position = body.position();
        Self {
            name: body.name.clone(),
            position: [position.x, position.y],
            velocity: [body.velocity.x, body.velocity.y],
            angle: body.angle(),
            restitution: body.restitution,
            drag: body.drag,
            angular_velocity: body.angular_velocity(),
            angular_force: body.angular_force(),
        }
    }
}

/// World-level display state.
#[derive(Serialize)]
pub struct WorldSnapshot {
    pub gravity: [f32; 2],
    pub density: f32,
    pub frame: u64,
    pub bodies: Vec<BodySnapshot>,
}
