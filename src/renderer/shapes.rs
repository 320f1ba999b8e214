//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let tl = Vertex::new(x, y, color);
    let tr = Vertex::new(x + width, y, color);
    let bl = Vertex::new(x, y + height, color);
    let br = Vertex::new(x + width, y + height, color);

    vec![tl, bl, tr, tr, bl, br]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle fan from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(10.0, 20.0, 30.0, 40.0, [1.0; 4]);
        assert_eq!(v.len(), 6);
        let has = |x: f32, y: f32| v.iter().any(|v| v.position == [x, y]);
        assert!(has(10.0, 20.0));
        assert!(has(40.0, 20.0));
        assert!(has(10.0, 60.0));
        assert!(has(40.0, 60.0));
    }

    #[test]
    fn test_circle_vertex_count_and_bounds() {
        let v = circle(Vec2::new(50.0, 50.0), 10.0, [1.0; 4], 24);
        assert_eq!(v.len(), 24 * 3);
        for vert in &v {
            let dx = vert.position[0] - 50.0;
            let dy = vert.position[1] - 50.0;
            assert!((dx * dx + dy * dy).sqrt() <= 10.0 + 1e-4);
        }
    }
}
