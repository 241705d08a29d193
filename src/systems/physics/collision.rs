use crate::rigid_body::Body;

/// Resolve collisions against the four world edges.
///
/// Edges are evaluated independently in the fixed order left, right,
/// top, bottom, so a body in a corner responds to two edges in the same
/// pass. Each response multiplies the colliding velocity component by
/// the body's (signed) restitution. Returns how many edges responded.
#[inline(always)]
pub fn resolve_boundaries(body: &mut Body, width: f32, height: f32) -> u32 {
    let mut resolved = 0;

    // Left edge: separate the body from the wall after the bounce
    if body.position().x < 0.0 && body.velocity.x < 0.0 {
        body.set_velocity(body.velocity.x * body.restitution, body.velocity.y);
        body.set_position(0.0, body.position().y);
        resolved += 1;
    }

    // Right edge
    if body.position().x + body.radius * 2.0 > width && body.velocity.x > 0.0 {
        body.set_velocity(body.velocity.x * body.restitution, body.velocity.y);
        body.set_position(width - body.radius * 2.0, body.position().y);
        resolved += 1;
    }

    // Top edge flips the velocity but rewrites the position to itself,
    // leaving the body where it is.
    if body.position().y < 0.0 && body.velocity.y < 0.0 {
        body.set_velocity(body.velocity.x, body.velocity.y * body.restitution);
        let position = body.position();
        body.set_position(position.x, position.y);
        resolved += 1;
    }

    // Bottom edge
    if body.position().y + body.radius * 2.0 > height && body.velocity.y > 0.0 {
        body.set_velocity(body.velocity.x, body.velocity.y * body.restitution);
        body.set_position(body.position().x, height - body.radius * 2.0);
        resolved += 1;
    }

    resolved
}
