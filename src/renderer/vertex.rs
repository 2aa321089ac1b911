//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
///
/// `Pod` so backends can upload slices of these straight into GPU buffers.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
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
}

/// Colors for the fixed scene elements; ball colors come per-ball from the
/// simulation
pub mod colors {
    /// Wall outline
    pub const WALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    /// Filled disc behind the play area
    pub const BACKING: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Neutral tint for the shared ball mesh; instances multiply their own
    /// color over it
    pub const BALL: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
