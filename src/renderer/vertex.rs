//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in surface pixel coordinates, top-left origin
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements
pub mod colors {
    /// Deep-space backdrop (#000022)
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.133, 1.0];
    /// The dot (#FFD700 gold)
    pub const DOT: [f32; 4] = [1.0, 0.843, 0.0, 1.0];
    /// Obstacles (#888888)
    pub const OBSTACLE: [f32; 4] = [0.533, 0.533, 0.533, 1.0];
    pub const STAR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Dimming quad drawn over the scene on game over
    pub const GAME_OVER_OVERLAY: [f32; 4] = [0.0, 0.0, 0.0, 0.5];

    /// Palette color as a render pass clear color
    pub fn to_wgpu(c: [f32; 4]) -> wgpu::Color {
        wgpu::Color {
            r: c[0] as f64,
            g: c[1] as f64,
            b: c[2] as f64,
            a: c[3] as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::colors;

    #[test]
    fn test_background_clear_color_matches_palette() {
        let c = colors::to_wgpu(colors::BACKGROUND);
        assert_eq!(
            [c.r, c.g, c.b, c.a],
            [
                colors::BACKGROUND[0] as f64,
                colors::BACKGROUND[1] as f64,
                colors::BACKGROUND[2] as f64,
                colors::BACKGROUND[3] as f64,
            ]
        );
    }
}
