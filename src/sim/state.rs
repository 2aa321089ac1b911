//! Ball state and the population container
//!
//! Everything the simulation owns lives here, including the RNG. Seeding is
//! explicit so any run can be reproduced exactly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::color::radial_color;
use crate::consts::*;

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Draw color, refreshed from center distance on every step
    pub color: [f32; 3],
    /// Momentum accumulator; grows with each wall hit, resets on duplication
    pub added_momentum: f32,
}

impl Ball {
    /// Sample a ball somewhere inside the wall with a small random velocity
    ///
    /// Positions come from the square inset by `SPAWN_MARGIN`, rejection
    /// sampled until the whole ball fits inside the wall.
    pub fn random(rng: &mut Pcg32, wall_radius: f32) -> Self {
        let span = wall_radius - SPAWN_MARGIN;
        let radius = BALL_RADIUS;

        let mut pos;
        loop {
            pos = Vec2::new(rng.random_range(-span..span), rng.random_range(-span..span));
            if pos.length() <= wall_radius - radius {
                break;
            }
        }

        let vel = Vec2::new(
            rng.random_range(-SPAWN_SPEED_RANGE..SPAWN_SPEED_RANGE),
            rng.random_range(-SPAWN_SPEED_RANGE..SPAWN_SPEED_RANGE),
        );

        Self {
            pos,
            vel,
            radius,
            color: radial_color(pos.length() / wall_radius),
            added_momentum: BASE_MOMENTUM,
        }
    }

    /// Current speed
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// The ball population and its RNG
///
/// Balls are only ever added, never removed; `MAX_BALLS` is the sole bound
/// on growth. Identical seeds and identical call sequences produce
/// identical populations.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Radius of the enclosing wall
    pub wall_radius: f32,
    /// Every live ball
    pub balls: Vec<Ball>,
    pub(super) rng: Pcg32,
}

impl Simulation {
    /// Create an empty simulation with the standard wall
    pub fn new(seed: u64) -> Self {
        Self::with_wall_radius(seed, WALL_RADIUS)
    }

    /// Create an empty simulation with a custom wall radius
    pub fn with_wall_radius(seed: u64, wall_radius: f32) -> Self {
        Self {
            seed,
            wall_radius,
            balls: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Spawn one randomly placed ball
    ///
    /// Returns false when the population cap suppressed the spawn. The RNG
    /// is not consumed on a suppressed spawn.
    pub fn spawn_random(&mut self) -> bool {
        if self.balls.len() >= MAX_BALLS {
            return false;
        }
        let ball = Ball::random(&mut self.rng, self.wall_radius);
        self.balls.push(ball);
        true
    }
}
