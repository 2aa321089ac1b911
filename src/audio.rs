//! Audio output for the wall-impact cue
//!
//! Procedurally generated sound - no external files needed. When no audio
//! device is available the cue degrades to a no-op instead of failing the
//! run.

use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Source};

/// Samples per second for synthesized cues
const SAMPLE_RATE: u32 = 44_100;
/// Pitch of the wall-impact ping
const PING_FREQ: f32 = 400.0;
/// Length of the ping in seconds
const PING_SECS: f32 = 0.1;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Ball hit the wall
    WallImpact,
}

/// Audio manager owning the output device and the synthesized cues
pub struct AudioManager {
    /// Stream plus its handle; the stream must stay alive for playback
    output: Option<(OutputStream, OutputStreamHandle)>,
    /// Unit-volume ping, scaled per play
    ping: Vec<f32>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        let output = match OutputStream::try_default() {
            Ok(pair) => Some(pair),
            Err(err) => {
                log::warn!("no audio output ({err}) - sound disabled");
                None
            }
        };
        Self {
            output,
            ping: synth_ping(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// A manager that never opens a device; for tests and headless runs
    pub fn disabled() -> Self {
        Self {
            output: None,
            ping: synth_ping(),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound cue, fire-and-forget
    ///
    /// Mixing happens on rodio's output thread, so this never blocks the
    /// frame loop even when collisions arrive in bursts. Playback errors
    /// are dropped; a missed ping is not worth interrupting the run for.
    pub fn play(&self, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some((_, handle)) = &self.output else {
            return;
        };

        match cue {
            SoundCue::WallImpact => {
                let samples: Vec<f32> = self.ping.iter().map(|s| s * vol).collect();
                let buffer = SamplesBuffer::new(1, SAMPLE_RATE, samples);
                let _ = handle.play_raw(buffer.convert_samples());
            }
        }
    }
}

/// Sine ping with an exponential decay envelope
fn synth_ping() -> Vec<f32> {
    let duration_samples = (SAMPLE_RATE as f32 * PING_SECS) as usize;
    (0..duration_samples)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            let envelope = (-t * 30.0).exp();
            let wave = (2.0 * std::f32::consts::PI * PING_FREQ * t).sin();
            wave * envelope * 0.3
        })
        .collect()
}
