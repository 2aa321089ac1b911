//! Collision detection and response against the circular wall
//!
//! The wall is the only collider in the toy: balls pass through each other
//! freely. What makes the rebound interesting is the blend applied after
//! reflection (center pull plus a random kick), which keeps the population
//! from settling into repeating orbits.

use glam::Vec2;

use crate::{cartesian_to_polar, polar_to_cartesian};

/// Contact with the wall, captured before any position correction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallContact {
    /// Center distance of the ball at the moment of contact
    pub distance: f32,
    /// Unit normal at the contact, pointing outward from the center
    pub normal: Vec2,
}

/// Check a ball against the wall from the inside
///
/// Returns the contact when the ball's bounding circle crosses the wall.
/// The normal comes from the uncorrected position; callers that snap the
/// ball back onto the wall must reflect about this normal, not one derived
/// from the corrected position.
pub fn wall_contact(ball_pos: Vec2, ball_radius: f32, wall_radius: f32) -> Option<WallContact> {
    let distance = ball_pos.length();
    if distance + ball_radius <= wall_radius {
        return None;
    }
    // A ball dead-center has no defined normal. Only reachable when the
    // wall is smaller than the ball; report no contact instead of NaN.
    if distance <= f32::EPSILON {
        return None;
    }
    Some(WallContact {
        distance,
        normal: ball_pos / distance,
    })
}

/// Snap a position back onto the wall boundary, preserving its angle
pub fn snap_to_wall(ball_pos: Vec2, ball_radius: f32, wall_radius: f32) -> Vec2 {
    let (_, theta) = cartesian_to_polar(ball_pos);
    polar_to_cartesian(wall_radius - ball_radius, theta)
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Direction of travel after a wall hit
///
/// Blends the reflected velocity with a pull toward the center and a random
/// kick, then normalizes. `jitter` is expected in [-1, 1]^2. The bias and
/// kick weights are parameters so tests can isolate the pure reflection;
/// the simulation always passes the fixed constants.
pub fn rebound_direction(
    reflected: Vec2,
    normal: Vec2,
    jitter: Vec2,
    center_bias: f32,
    random_factor: f32,
) -> Vec2 {
    let blended = reflected * (1.0 - center_bias) - normal * center_bias + jitter * random_factor;
    let dir = blended.normalize_or_zero();
    if dir == Vec2::ZERO {
        // Blend cancelled out exactly; fall back to straight inward.
        return -normal;
    }
    dir
}
