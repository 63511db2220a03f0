//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Rgba8, Vertex};

/// Axis-aligned coloured rectangle in court space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    /// Half-extents
    pub radius: Vec2,
    pub color: Rgba8,
}

impl Rect {
    pub const fn new(center: Vec2, radius: Vec2, color: Rgba8) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Same rectangle moved by `offset`, recoloured
    pub fn shadow(&self, offset: Vec2, color: Rgba8) -> Self {
        Self::new(self.center + offset, self.radius, color)
    }
}

/// Append a rectangle as two counter-clockwise triangles
pub fn push_rect(vertices: &mut Vec<Vertex>, rect: &Rect) {
    let Rect {
        center: c,
        radius: r,
        color,
    } = *rect;

    vertices.push(Vertex::new(c.x - r.x, c.y - r.y, color));
    vertices.push(Vertex::new(c.x + r.x, c.y - r.y, color));
    vertices.push(Vertex::new(c.x + r.x, c.y + r.y, color));

    vertices.push(Vertex::new(c.x - r.x, c.y - r.y, color));
    vertices.push(Vertex::new(c.x + r.x, c.y + r.y, color));
    vertices.push(Vertex::new(c.x - r.x, c.y + r.y, color));
}

/// Triangle list for a sequence of rectangles, in draw order
pub fn triangulate(rects: &[Rect]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(rects.len() * 6);
    for rect in rects {
        push_rect(&mut vertices, rect);
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_area(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> f32 {
        (b[0] - a[0]) * (c[1] - a[1]) - (c[0] - a[0]) * (b[1] - a[1])
    }

    #[test]
    fn test_rect_is_two_ccw_triangles() {
        let rect = Rect::new(Vec2::new(1.0, 2.0), Vec2::new(0.5, 0.25), [1, 2, 3, 4]);
        let vertices = triangulate(&[rect]);

        assert_eq!(vertices.len(), 6);
        for tri in vertices.chunks(3) {
            let area = signed_area(tri[0].position, tri[1].position, tri[2].position);
            assert!(area > 0.0, "triangle must wind counter-clockwise");
            assert!(tri.iter().all(|v| v.color == [1, 2, 3, 4]));
        }
        assert_eq!(vertices[0].position, [0.5, 1.75]);
        assert_eq!(vertices[2].position, [1.5, 2.25]);
    }
}
