//! Pure function kit for the physics pass.
//!
//! Everything here is deterministic given identical floating-point
//! inputs; no state, no side effects.

use std::f32::consts::PI;

use super::{Line, Vec2};

/// Clamp a scalar into `[minimum, maximum]`.
#[inline]
pub fn clamp(value: f32, minimum: f32, maximum: f32) -> f32 {
    let value = if value < minimum { minimum } else { value };

    if value > maximum {
        maximum
    } else {
        value
    }
}

/// Clamp both components into the same `[minimum, maximum]` range.
#[inline]
pub fn clamp_vec(value: Vec2, minimum: f32, maximum: f32) -> Vec2 {
    Vec2::new(
        clamp(value.x, minimum, maximum),
        clamp(value.y, minimum, maximum),
    )
}

/// Arithmetic mean of scalars. Empty input divides by zero; callers
/// never pass one.
#[inline]
pub fn average(values: &[f32]) -> f32 {
    let mut sum = 0.0;

    for value in values {
        sum += *value;
    }

    sum / values.len() as f32
}

/// Arithmetic mean of vectors, componentwise.
#[inline]
pub fn average_vec(values: &[Vec2]) -> Vec2 {
    let mut sum = Vec2::zero();

    for value in values {
        sum += *value;
    }

    sum / values.len() as f32
}

#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

#[inline]
pub fn to_degrees(radians: f32) -> f32 {
    radians * 180.0 / PI
}

/// Rotate `point` around `origin`. The angle is taken in degrees and
/// converted internally; it is negated when `clockwise` is false.
pub fn rotate_around(point: Vec2, origin: Vec2, angle: f32, clockwise: bool) -> Vec2 {
    let angle = if clockwise { angle } else { -angle };
    let radians = to_radians(angle);
    let (sin, cos) = radians.sin_cos();

    let dx = point.x - origin.x;
    let dy = point.y - origin.y;

    Vec2::new(dx * cos - dy * sin + origin.x, dx * sin + dy * cos + origin.y)
}

/// Translate local vertices into world space from `origin`. No rotation.
#[inline]
pub fn to_world_vertices<const N: usize>(local: &[Vec2; N], origin: Vec2) -> [Vec2; N] {
    std::array::from_fn(|i| origin + local[i])
}

/// Scale both endpoints of `line`. 1 is 100% normal size.
#[inline]
pub fn scale_line(line: Line, scale: f32) -> Line {
    Line::new(line.start * scale, line.stop * scale)
}

#[inline]
pub fn scale_lines<const N: usize>(lines: [Line; N], scale: f32) -> [Line; N] {
    lines.map(|line| scale_line(line, scale))
}

/// Mean point of a polygon's vertices.
pub fn centroid(vertices: &[Vec2]) -> Vec2 {
    let mut sum = Vec2::zero();

    for vertex in vertices {
        sum += *vertex;
    }

    Vec2::new(sum.x / vertices.len() as f32, sum.y / vertices.len() as f32)
}

/// Verlet-style displacement for one tick: `v * dt + a * dt^2 / 2`.
///
/// Despite the historical name this returns a position delta, not a new
/// velocity.
#[inline]
pub fn integrate_velocity_verlet(velocity: Vec2, dt: f32, acceleration: Vec2) -> Vec2 {
    velocity * dt + acceleration * (0.5 * dt * dt)
}

/// Drag force of air/fluid on the surface of a moving body.
///
/// The velocity is squared componentwise, which discards the per-axis
/// sign of travel before the single negative constant is applied; the
/// force does not oppose each axis of motion independently.
#[inline]
pub fn drag_force(
    fluid_density: f32,
    drag_coefficient: f32,
    surface_area: f32,
    velocity: Vec2,
) -> Vec2 {
    (velocity * velocity) * (-1.0 * (fluid_density * drag_coefficient * surface_area) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn clamp_bounds_scalars_and_passes_in_range_values() {
        assert_eq!(clamp(5.0, -2.0, 2.0), 2.0);
        assert_eq!(clamp(-5.0, -2.0, 2.0), -2.0);
        assert_eq!(clamp(1.5, -2.0, 2.0), 1.5);
    }

    #[test]
    fn clamp_vec_bounds_each_component_independently() {
        let clamped = clamp_vec(Vec2::new(3.0, -7.0), -2.0, 2.0);
        assert_eq!(clamped, Vec2::new(2.0, -2.0));

        let in_range = Vec2::new(0.5, -1.5);
        assert_eq!(clamp_vec(in_range, -2.0, 2.0), in_range);
    }

    #[test]
    fn average_of_a_duplicated_value_is_that_value() {
        assert_eq!(average(&[3.5, 3.5]), 3.5);

        let v = Vec2::new(1.0, -2.0);
        assert_eq!(average_vec(&[v, v]), v);
    }

    #[test]
    fn average_vec_is_componentwise() {
        let avg = average_vec(&[Vec2::new(0.0, 4.0), Vec2::new(2.0, 0.0)]);
        assert_eq!(avg, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn zero_density_means_zero_drag() {
        let force = drag_force(0.0, 3.0, 7.0, Vec2::new(5.0, -5.0));
        assert_eq!(force, Vec2::zero());
    }

    #[test]
    fn drag_force_ignores_velocity_sign() {
        // Opposite directions of travel on each axis, same drag force.
        let force = drag_force(1.0, 1.0, 2.0, Vec2::new(-3.0, 3.0));
        assert_eq!(force, Vec2::new(-9.0, -9.0));
    }

    #[test]
    fn zero_elapsed_time_means_zero_displacement() {
        let delta = integrate_velocity_verlet(Vec2::new(4.0, -4.0), 0.0, Vec2::new(9.8, 9.8));
        assert_eq!(delta, Vec2::zero());
    }

    #[test]
    fn verlet_combines_velocity_and_half_acceleration() {
        let delta = integrate_velocity_verlet(Vec2::new(1.0, 0.0), 2.0, Vec2::new(0.0, 1.0));
        assert_eq!(delta, Vec2::new(2.0, 2.0));
    }

    #[test]
    fn rotating_by_zero_and_full_turn_returns_the_point() {
        let point = Vec2::new(3.0, 4.0);
        let origin = Vec2::new(1.0, 1.0);

        let unrotated = rotate_around(point, origin, 0.0, true);
        assert!(approx(unrotated.x, point.x) && approx(unrotated.y, point.y));

        let full_turn = rotate_around(point, origin, 360.0, true);
        assert!(approx(full_turn.x, point.x) && approx(full_turn.y, point.y));
    }

    #[test]
    fn counter_clockwise_negates_the_angle() {
        let origin = Vec2::zero();
        let point = Vec2::new(1.0, 0.0);

        let cw = rotate_around(point, origin, 90.0, true);
        assert!(approx(cw.x, 0.0) && approx(cw.y, 1.0));

        let ccw = rotate_around(point, origin, 90.0, false);
        assert!(approx(ccw.x, 0.0) && approx(ccw.y, -1.0));
    }

    #[test]
    fn world_vertices_are_translate_only() {
        let local = [Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)];
        let world = to_world_vertices(&local, Vec2::new(10.0, 20.0));
        assert_eq!(world, [Vec2::new(9.0, 19.0), Vec2::new(11.0, 21.0)]);
    }

    #[test]
    fn scaling_lines_scales_both_endpoints() {
        let line = Line::new(Vec2::new(2.0, 4.0), Vec2::new(-2.0, -4.0));
        let scaled = scale_lines([line], 0.5);
        assert_eq!(scaled[0].start, Vec2::new(1.0, 2.0));
        assert_eq!(scaled[0].stop, Vec2::new(-1.0, -2.0));
    }

    #[test]
    fn centroid_is_the_mean_vertex() {
        let vertices = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        assert_eq!(centroid(&vertices), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn degree_radian_conversions_invert_each_other() {
        assert!(approx(to_radians(180.0), std::f32::consts::PI));
        assert!(approx(to_degrees(to_radians(73.0)), 73.0));
    }
}
