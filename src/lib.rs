//! Multiball - balls multiplying inside a circular wall
//!
//! Core modules:
//! - `sim`: Deterministic simulation (gravity, wall collisions, duplication)
//! - `renderer`: Frame data and mesh generation for embedder renderers
//! - `platform`: Clock and input abstraction
//! - `audio`: Wall-impact sound cue
//! - `app`: The simulate-then-draw frame loop

pub mod app;
pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Vec2;

/// Fixed tuning constants
pub mod consts {
    /// Radius of the circular wall, world units
    pub const WALL_RADIUS: f32 = 0.9;
    /// Radius shared by every ball
    pub const BALL_RADIUS: f32 = 0.05;
    /// Global slow-down applied to every frame delta
    pub const SIMULATION_SPEED: f32 = 0.5;
    /// Downward acceleration, world units per scaled second squared
    pub const GRAVITY: f32 = 1.4;

    /// Starting value of the per-ball momentum accumulator, and the base of
    /// the post-collision speed (`BASE_MOMENTUM + added_momentum`)
    pub const BASE_MOMENTUM: f32 = 1.05;
    /// Momentum gained per wall hit
    pub const MOMENTUM_INCREMENT: f32 = 0.05;
    /// Ceiling for the momentum accumulator
    pub const MAX_ADDED_MOMENTUM: f32 = 5.0;
    /// Fraction of the rebound redirected toward the center
    pub const CENTER_BIAS: f32 = 0.5;
    /// Scale of the random kick mixed into every rebound
    pub const RANDOM_FACTOR: f32 = 0.4;
    /// Speed ceiling enforced after every update
    pub const MAX_SPEED: f32 = 2.5;

    /// Population cap; spawns beyond it are suppressed
    pub const MAX_BALLS: usize = 1000;
    /// Gap between the spawn sampling square and the wall
    pub const SPAWN_MARGIN: f32 = 0.1;
    /// Initial velocity components are drawn from plus or minus this
    pub const SPAWN_SPEED_RANGE: f32 = 0.25;
    /// Velocity damping applied to a freshly spawned duplicate
    pub const DUPLICATE_DAMPING: f32 = 0.95;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}
