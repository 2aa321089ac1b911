//! The simulate-then-draw frame loop
//!
//! Each frame is strictly sequential: read the clock, poll input, advance
//! the simulation (wall hits ring the audio cue mid-pass), then hand the
//! frame to the renderer. The clock, input source, and renderer are all
//! trait parameters so the same loop drives the headless demo and the
//! tests.

use crate::audio::{AudioManager, SoundCue};
use crate::platform::{FrameClock, InputSource};
use crate::renderer::{FrameData, SceneRenderer, WallGeometry};
use crate::sim::{Simulation, step};

/// Longest frame delta fed to the simulation, in seconds
///
/// Hides clock stalls (window drags, suspends, debugger pauses) from the
/// physics.
const MAX_FRAME_DELTA: f64 = 0.1;

/// Frame loop driver
pub struct App<C, I, R> {
    sim: Simulation,
    audio: AudioManager,
    clock: C,
    input: I,
    renderer: R,
    wall: WallGeometry,
    last_time: f64,
    frames: u64,
}

impl<C: FrameClock, I: InputSource, R: SceneRenderer> App<C, I, R> {
    pub fn new(sim: Simulation, audio: AudioManager, clock: C, input: I, renderer: R) -> Self {
        let wall = WallGeometry::new(sim.wall_radius);
        let last_time = clock.elapsed();
        log::info!(
            "app ready: seed {}, {} renderer",
            sim.seed,
            renderer.backend()
        );
        Self {
            sim,
            audio,
            clock,
            input,
            renderer,
            wall,
            last_time,
            frames: 0,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame; false once the input source requests exit
    pub fn frame(&mut self) -> bool {
        let now = self.clock.elapsed();
        let dt = (now - self.last_time).min(MAX_FRAME_DELTA) as f32;
        self.last_time = now;

        let input = self.input.poll();
        if input.exit {
            log::info!(
                "exit after {} frames, {} balls",
                self.frames,
                self.sim.balls.len()
            );
            return false;
        }
        if input.spawn && !self.sim.spawn_random() {
            log::debug!("spawn suppressed at population cap");
        }

        let audio = &self.audio;
        step(&mut self.sim, dt, || audio.play(SoundCue::WallImpact));

        let frame = FrameData {
            balls: &self.sim.balls,
            wall_radius: self.sim.wall_radius,
            wall: &self.wall,
        };
        if let Err(err) = self.renderer.draw(&frame) {
            log::warn!("render error ({}): {err}", self.renderer.backend());
        }

        self.frames += 1;
        true
    }

    /// Drive frames until the input source requests exit
    pub fn run(&mut self) {
        while self.frame() {}
    }
}
