//! Per-frame simulation update
//!
//! One pass advances every ball: gravity, integration, wall rebound with a
//! momentum reward, recolor, speed clamp. Wall hits queue damped duplicates
//! that join the population only after the pass, so a ball never moves on
//! the frame that created it.

use glam::Vec2;
use rand::Rng;

use super::collision::{rebound_direction, reflect, snap_to_wall, wall_contact};
use super::color::radial_color;
use super::state::{Ball, Simulation};
use crate::consts::*;

/// Advance every ball by `delta_time` seconds
///
/// The frame delta is scaled by `SIMULATION_SPEED` before any physics runs.
/// `on_wall_hit` is the sound-cue seam: it fires once per wall collision,
/// synchronously during the pass, and must not block.
pub fn step<F: FnMut()>(sim: &mut Simulation, delta_time: f32, mut on_wall_hit: F) {
    let dt = delta_time * SIMULATION_SPEED;

    let Simulation {
        wall_radius,
        balls,
        rng,
        ..
    } = sim;
    let wall_radius = *wall_radius;

    // Population at the start of the pass; collisions only queue into
    // `spawned`, so the cap check stays stable while we iterate.
    let population = balls.len();
    let mut spawned: Vec<Ball> = Vec::new();

    for ball in balls.iter_mut() {
        // Semi-implicit Euler: apply gravity first, integrate with the
        // updated velocity.
        ball.vel.y -= GRAVITY * dt;
        ball.pos += ball.vel * dt;

        let distance = match wall_contact(ball.pos, ball.radius, wall_radius) {
            Some(contact) => {
                on_wall_hit();

                // The rebound reflects about the normal captured before the
                // snap; the snap itself only pulls the ball inward along
                // that same direction.
                ball.pos = snap_to_wall(ball.pos, ball.radius, wall_radius);

                let jitter = Vec2::new(
                    rng.random_range(-1.0..1.0),
                    rng.random_range(-1.0..1.0),
                );
                let dir = rebound_direction(
                    reflect(ball.vel, contact.normal),
                    contact.normal,
                    jitter,
                    CENTER_BIAS,
                    RANDOM_FACTOR,
                );

                // Momentum grows before it is spent, so even the first hit
                // rebounds faster than the base speed.
                ball.added_momentum =
                    (ball.added_momentum + MOMENTUM_INCREMENT).min(MAX_ADDED_MOMENTUM);
                ball.vel = dir * (BASE_MOMENTUM + ball.added_momentum);

                if population + spawned.len() < MAX_BALLS {
                    let mut duplicate = ball.clone();
                    duplicate.vel *= DUPLICATE_DAMPING;
                    duplicate.added_momentum = BASE_MOMENTUM;
                    spawned.push(duplicate);
                }

                contact.distance
            }
            None => ball.pos.length(),
        };

        // Color tracks the distance the ball reached this frame, which for
        // a bouncing ball is the pre-snap overshoot distance.
        ball.color = radial_color(distance / wall_radius);

        let speed = ball.vel.length();
        if speed > MAX_SPEED {
            ball.vel = ball.vel / speed * MAX_SPEED;
        }
    }

    // Queued duplicates enter here, untouched until the next pass. Note
    // this skips the speed clamp, so a duplicate of a momentum-heavy
    // parent can start one frame faster than MAX_SPEED.
    balls.append(&mut spawned);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn resting_ball(pos: Vec2) -> Ball {
        Ball {
            pos,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            color: [1.0, 0.0, 0.0],
            added_momentum: BASE_MOMENTUM,
        }
    }

    #[test]
    fn test_gravity_and_integration_order() {
        let mut sim = Simulation::new(1);
        sim.balls.push(resting_ball(Vec2::ZERO));

        let mut hits = 0;
        step(&mut sim, 1.0, || hits += 1);

        // Scaled dt is 0.5; velocity updates before position.
        let ball = &sim.balls[0];
        assert!((ball.vel.y - (-0.7)).abs() < 1e-6);
        assert!((ball.pos.y - (-0.35)).abs() < 1e-6);
        assert_eq!(ball.vel.x, 0.0);
        assert_eq!(hits, 0);
        assert_eq!(sim.balls.len(), 1);
    }

    #[test]
    fn test_first_bounce() {
        let mut sim = Simulation::new(2);
        let mut ball = resting_ball(Vec2::new(0.0, -0.8));
        ball.vel = Vec2::new(0.0, -0.5);
        sim.balls.push(ball);

        // Scaled dt 0.1 drops the ball to y = -0.864, past the wall.
        let mut hits = 0;
        step(&mut sim, 0.2, || hits += 1);

        assert_eq!(hits, 1);
        assert_eq!(sim.balls.len(), 2);

        let parent = &sim.balls[0];
        // Snapped onto the wall at the same angle
        assert!((parent.pos.length() - 0.85).abs() < 1e-5);
        assert!(parent.pos.x.abs() < 1e-5);
        // First hit: momentum 1.10, rebound speed 1.05 + 1.10
        assert!((parent.added_momentum - 1.10).abs() < 1e-5);
        assert!((parent.speed() - 2.15).abs() < 1e-4);
        // Center pull dominates the jitter on a radial hit
        assert!(parent.vel.y > 0.0);
        // Color comes from the overshoot distance (0.864 / 0.9), deep in
        // the outer band.
        assert_eq!(parent.color[2], 1.0);
    }

    #[test]
    fn test_free_fall_to_first_impact() {
        let mut sim = Simulation::new(7);
        sim.balls.push(resting_ball(Vec2::ZERO));

        let mut hits = 0;
        let mut frames = 0;
        while hits == 0 {
            let before = sim.balls[0].vel.y;
            step(&mut sim, 1.0 / 60.0, || hits += 1);
            if hits == 0 {
                // Straight fall: y-velocity only ever grows downward
                assert!(sim.balls[0].vel.y < before);
                assert_eq!(sim.balls.len(), 1);
            }
            frames += 1;
            assert!(frames < 1000, "ball never reached the wall");
        }

        // The impact frame fires the cue once and adds exactly one duplicate
        assert_eq!(hits, 1);
        assert_eq!(sim.balls.len(), 2);
        assert!(sim.balls[0].vel.y > 0.0);
    }

    #[test]
    fn test_duplicate_snapshot() {
        let mut sim = Simulation::new(2);
        let mut ball = resting_ball(Vec2::new(0.0, -0.8));
        ball.vel = Vec2::new(0.0, -0.5);
        sim.balls.push(ball);

        step(&mut sim, 0.2, || {});

        let parent = sim.balls[0].clone();
        let duplicate = &sim.balls[1];
        // Damped copy of the parent's rebound, not advanced this frame
        assert!((duplicate.vel - parent.vel * DUPLICATE_DAMPING).length() < 1e-6);
        assert_eq!(duplicate.pos, parent.pos);
        assert_eq!(duplicate.added_momentum, BASE_MOMENTUM);
        // The snapshot predates the parent's recolor
        assert_eq!(duplicate.color, [1.0, 0.0, 0.0]);
        assert!(parent.color != duplicate.color);
    }

    #[test]
    fn test_momentum_saturates() {
        let mut sim = Simulation::new(5);
        sim.balls.push(resting_ball(Vec2::new(0.86, 0.0)));

        // Re-place the ball into contact each pass; dt 0 keeps everything
        // else still. Duplicates are dropped so only the driven ball can
        // ever register a hit.
        let mut hits = 0;
        for _ in 0..79 {
            sim.balls[0].pos = Vec2::new(0.86, 0.0);
            step(&mut sim, 0.0, || hits += 1);
            sim.balls.truncate(1);
        }
        assert_eq!(hits, 79);
        // 1.05 + 79 * 0.05 lands on the 5.0 ceiling
        assert!((sim.balls[0].added_momentum - MAX_ADDED_MOMENTUM).abs() < 1e-3);

        sim.balls[0].pos = Vec2::new(0.86, 0.0);
        step(&mut sim, 0.0, || hits += 1);
        assert_eq!(hits, 80);
        assert_eq!(sim.balls[0].added_momentum, MAX_ADDED_MOMENTUM);
        // Saturated rebound is 6.05 before the clamp catches it
        assert!((sim.balls[0].speed() - MAX_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_cap_suppresses_duplicates_but_not_the_cue() {
        let mut sim = Simulation::new(3);
        for _ in 0..MAX_BALLS {
            assert!(sim.spawn_random());
        }

        sim.balls[0].pos = Vec2::new(0.86, 0.0);
        sim.balls[0].vel = Vec2::ZERO;
        let mut hits = 0;
        step(&mut sim, 0.0, || hits += 1);

        assert_eq!(hits, 1);
        assert_eq!(sim.balls.len(), MAX_BALLS);
        // The bounce itself still happens in full
        assert!((sim.balls[0].added_momentum - 1.10).abs() < 1e-5);
    }

    #[test]
    fn test_speed_clamp_preserves_direction() {
        let mut sim = Simulation::new(4);
        let mut ball = resting_ball(Vec2::ZERO);
        ball.vel = Vec2::new(5.0, 0.0);
        sim.balls.push(ball);

        step(&mut sim, 0.001, || {});

        let ball = &sim.balls[0];
        assert!((ball.speed() - MAX_SPEED).abs() < 1e-4);
        assert!(ball.vel.x > 0.0);
        assert!(ball.vel.y.abs() < 0.01);
    }

    #[test]
    fn test_color_refreshes_every_pass() {
        let mut sim = Simulation::new(6);
        sim.balls.push(resting_ball(Vec2::new(0.5, 0.0)));

        step(&mut sim, 0.0, || {});
        // t = 0.5 / 0.9 sits in the middle band
        assert_eq!(sim.balls[0].color[1], 1.0);

        sim.balls[0].pos = Vec2::new(0.05, 0.0);
        step(&mut sim, 0.0, || {});
        // Near the center the band is red
        assert_eq!(sim.balls[0].color[0], 1.0);
        assert_eq!(sim.balls[0].color[2], 0.0);
    }

    #[test]
    fn test_determinism() {
        // Two simulations with the same seed and call sequence stay
        // bit-identical through spawns, bounces, and duplications.
        let mut a = Simulation::new(99999);
        let mut b = Simulation::new(99999);
        a.spawn_random();
        b.spawn_random();

        for i in 0..240 {
            if i == 60 {
                a.spawn_random();
                b.spawn_random();
            }
            step(&mut a, 1.0 / 60.0, || {});
            step(&mut b, 1.0 / 60.0, || {});
        }

        assert!(a.balls.len() > 1, "expected at least one bounce by now");
        assert_eq!(a.balls, b.balls);
    }

    #[test]
    fn test_hook_fires_per_collision() {
        let mut sim = Simulation::new(8);
        // Two balls in contact at once, on opposite sides
        sim.balls.push(resting_ball(Vec2::new(0.86, 0.0)));
        sim.balls.push(resting_ball(Vec2::new(-0.86, 0.0)));

        let mut hits = 0;
        step(&mut sim, 0.0, || hits += 1);
        assert_eq!(hits, 2);
        assert_eq!(sim.balls.len(), 4);
    }

    proptest! {
        #[test]
        fn prop_step_invariants(seed in any::<u64>(), dt in 0.0f32..0.05, steps in 1usize..100) {
            let mut sim = Simulation::new(seed);
            sim.spawn_random();

            // Parents are clamped to MAX_SPEED; a fresh duplicate may carry
            // up to the damped saturated rebound for one frame.
            let speed_cap = (BASE_MOMENTUM + MAX_ADDED_MOMENTUM) * DUPLICATE_DAMPING;
            let mut prev_len = sim.balls.len();

            for i in 0..steps {
                if i % 25 == 0 {
                    sim.spawn_random();
                }
                step(&mut sim, dt, || {});

                prop_assert!(sim.balls.len() >= prev_len);
                prop_assert!(sim.balls.len() <= MAX_BALLS);
                prev_len = sim.balls.len();

                for ball in &sim.balls {
                    prop_assert!(ball.pos.is_finite() && ball.vel.is_finite());
                    prop_assert!(ball.pos.length() + ball.radius <= sim.wall_radius + 1e-4);
                    prop_assert!(ball.speed() <= speed_cap + 1e-3);
                    prop_assert!(ball.added_momentum >= BASE_MOMENTUM - 1e-6);
                    prop_assert!(ball.added_momentum <= MAX_ADDED_MOMENTUM + 1e-6);
                }
            }
        }
    }
}
