//! Renderer boundary
//!
//! The simulation never touches a drawing API. Each frame the loop
//! publishes the ball list plus the fixed wall meshes through `FrameData`;
//! a `SceneRenderer` implementation turns them into draw calls. The
//! built-in trace backend draws nothing and logs summaries instead, which
//! keeps headless runs and tests free of any GPU or window dependency.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use std::fmt;

use glam::Vec2;

use crate::consts::BALL_RADIUS;
use crate::sim::Ball;

/// Triangle segments for the shared ball mesh
pub const BALL_SEGMENTS: u32 = 32;
/// Triangle segments for the wall meshes
pub const WALL_SEGMENTS: u32 = 100;
/// Total thickness of the wall outline ring
pub const WALL_OUTLINE_THICKNESS: f32 = 0.005;

/// Fixed meshes for the scene, built once per wall radius
pub struct WallGeometry {
    /// Filled backing disc behind the play area
    pub backing: Vec<Vertex>,
    /// Thin ring tracing the wall itself
    pub outline: Vec<Vertex>,
    /// Ball disc at the origin; backends instance it at each ball's
    /// position tinted with that ball's color
    pub ball: Vec<Vertex>,
}

impl WallGeometry {
    pub fn new(wall_radius: f32) -> Self {
        let half = WALL_OUTLINE_THICKNESS / 2.0;
        Self {
            backing: shapes::circle(Vec2::ZERO, wall_radius, colors::BACKING, WALL_SEGMENTS),
            outline: shapes::ring(
                Vec2::ZERO,
                wall_radius - half,
                wall_radius + half,
                colors::WALL,
                WALL_SEGMENTS,
            ),
            ball: shapes::circle(Vec2::ZERO, BALL_RADIUS, colors::BALL, BALL_SEGMENTS),
        }
    }
}

/// Everything a backend needs for one frame
pub struct FrameData<'a> {
    /// Every live ball: position, radius, and current color
    pub balls: &'a [Ball],
    /// Radius of the circular wall
    pub wall_radius: f32,
    /// Fixed scene meshes
    pub wall: &'a WallGeometry,
}

/// Draw failure surfaced to the loop, which logs it and keeps running
#[derive(Debug)]
pub enum RenderError {
    /// The drawing surface is gone and wants recreating
    SurfaceLost,
    /// Anything else the backend needs to report
    Backend(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "drawing surface lost"),
            RenderError::Backend(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Draw-call boundary implemented by backends
pub trait SceneRenderer {
    /// Backend identifier for logs (e.g. "trace", "webgpu", "canvas2d")
    fn backend(&self) -> &'static str;

    /// Draw one frame; the frame borrows simulation state and must be
    /// consumed before the next step
    fn draw(&mut self, frame: &FrameData) -> Result<(), RenderError>;
}

/// Backend that draws nothing and logs population summaries
pub struct TraceRenderer {
    /// Log every N frames; 0 disables the summaries
    every: u64,
    frames: u64,
}

impl TraceRenderer {
    pub fn new(every: u64) -> Self {
        Self { every, frames: 0 }
    }
}

impl SceneRenderer for TraceRenderer {
    fn backend(&self) -> &'static str {
        "trace"
    }

    fn draw(&mut self, frame: &FrameData) -> Result<(), RenderError> {
        self.frames += 1;
        if self.every > 0 && self.frames % self.every == 0 {
            let fastest = frame.balls.iter().map(|b| b.speed()).fold(0.0f32, f32::max);
            log::debug!(
                "frame {}: {} balls, fastest {:.2}",
                self.frames,
                frame.balls.len(),
                fastest
            );
        }
        Ok(())
    }
}
