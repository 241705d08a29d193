use super::Vec2;

/// Line segment between two points.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line {
    pub start: Vec2,
    pub stop: Vec2,
}

impl Line {
    pub fn new(start: Vec2, stop: Vec2) -> Self {
        Self { start, stop }
    }
}

/// Connect consecutive vertices into a closed loop of lines; the last
/// line runs back to the first vertex.
pub fn to_lines<const N: usize>(vertices: &[Vec2; N]) -> [Line; N] {
    std::array::from_fn(|i| {
        let next = if i < N - 1 { i + 1 } else { 0 };
        Line::new(vertices[i], vertices[next])
    })
}

/// Collapse a closed loop of lines back to its start vertices.
pub fn to_vertices<const N: usize>(lines: &[Line; N]) -> [Vec2; N] {
    std::array::from_fn(|i| lines[i].start)
}
