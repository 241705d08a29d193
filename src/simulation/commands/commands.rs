use crate::core::Vec2;
use crate::domain::scene::{BodySnapshot, SceneBundle, WorldSnapshot};
use crate::systems::rigid_body::{Body, ShapeError};

use super::WorldCore;

pub(super) fn add_body(world: &mut WorldCore, body: Body) {
    world.bodies.push(body);
}

pub(super) fn spawn_circle(
    world: &mut WorldCore,
    name: &str,
    x: f32,
    y: f32,
    radius: f32,
    mass: f32,
) {
    add_body(world, Body::new_circle(name, x, y, radius, mass));
}

pub(super) fn spawn_rect(
    world: &mut WorldCore,
    name: &str,
    x: f32,
    y: f32,
    vertices: &[f32],
    radius: f32,
    mass: f32,
) -> Result<(), String> {
    if vertices.len() % 2 != 0 {
        let count = (vertices.len() + 1) / 2;
        return Err(ShapeError::InvalidVertexCount { count }.to_string());
    }

    let local: Vec<Vec2> = vertices
        .chunks_exact(2)
        .map(|pair| Vec2::new(pair[0], pair[1]))
        .collect();

    let body = Body::new_rect(name, &local, x, y, radius, mass).map_err(|e| e.to_string())?;
    add_body(world, body);
    Ok(())
}

pub(super) fn clear(world: &mut WorldCore) {
    world.bodies.clear();
    world.frame = 0;
}

pub(super) fn load_scene_bundle(world: &mut WorldCore, bundle: &SceneBundle) -> Result<(), String> {
    // Build everything before touching the world so a bad definition
    // leaves the current scene intact.
    let mut bodies = Vec::with_capacity(bundle.bodies.len());
    for def in &bundle.bodies {
        bodies.push(def.build()?);
    }

    clear(world);
    world.gravity = Vec2::new(bundle.gravity[0], bundle.gravity[1]);
    world.density = bundle.density;
    world.bodies = bodies;
    Ok(())
}

pub(super) fn set_body_position(world: &mut WorldCore, name: &str, x: f32, y: f32) -> bool {
    match world.get_body_mut(name) {
        Some(body) => {
            body.set_position(x, y);
            true
        }
        None => false,
    }
}

pub(super) fn set_body_velocity(world: &mut WorldCore, name: &str, x: f32, y: f32) -> bool {
    match world.get_body_mut(name) {
        Some(body) => {
            body.set_velocity(x, y);
            true
        }
        None => false,
    }
}

pub(super) fn set_body_restitution(world: &mut WorldCore, name: &str, restitution: f32) -> bool {
    match world.get_body_mut(name) {
        Some(body) => {
            body.restitution = restitution;
            true
        }
        None => false,
    }
}

pub(super) fn adjust_body_restitution(world: &mut WorldCore, name: &str, amount: f32) -> bool {
    match world.get_body_mut(name) {
        Some(body) => {
            body.restitution += amount;
            true
        }
        None => false,
    }
}

pub(super) fn set_body_drag(world: &mut WorldCore, name: &str, drag: f32) -> bool {
    match world.get_body_mut(name) {
        Some(body) => {
            body.drag = drag;
            true
        }
        None => false,
    }
}

pub(super) fn adjust_body_drag(world: &mut WorldCore, name: &str, amount: f32) -> bool {
    match world.get_body_mut(name) {
        Some(body) => {
            body.drag += amount;
            true
        }
        None => false,
    }
}

pub(super) fn set_body_angle(world: &mut WorldCore, name: &str, angle: f32) -> bool {
    match world.get_body_mut(name) {
        Some(body) => {
            body.set_angle(angle);
            true
        }
        None => false,
    }
}

pub(super) fn set_body_angular_force(world: &mut WorldCore, name: &str, force: f32) -> bool {
    match world.get_body_mut(name) {
        Some(body) => {
            body.set_angular_force(force);
            true
        }
        None => false,
    }
}

pub(super) fn set_body_scale(world: &mut WorldCore, name: &str, scale: f32) -> bool {
    match world.get_body_mut(name) {
        Some(body) => {
            body.set_scale(scale);
            true
        }
        None => false,
    }
}

pub(super) fn snapshot_json(world: &WorldCore) -> String {
    let snapshot = WorldSnapshot {
        gravity: [world.gravity.x, world.gravity.y],
        density: world.density,
        frame: world.frame,
        bodies: world.bodies.iter().map(BodySnapshot::of).collect(),
    };

    serde_json::to_string(&snapshot).unwrap_or_default()
}
