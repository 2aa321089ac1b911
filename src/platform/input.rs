//! Per-frame input
//!
//! Two facts reach the loop each frame: "spawn a ball" and "stop". How they
//! are produced (key polling, scripts, UI buttons) is the embedder's
//! business; sources that read a held key should run the level through an
//! `EdgeTrigger` so one press means one spawn.

/// One frame's worth of input, already edge-triggered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Spawn one ball this frame
    pub spawn: bool,
    /// Stop the loop after this frame
    pub exit: bool,
}

/// Per-frame input provider
pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

/// Converts a level signal (key currently held) into a rising-edge event
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeTrigger {
    held: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current level; true only on the released-to-held transition
    pub fn rising(&mut self, level: bool) -> bool {
        let fired = level && !self.held;
        self.held = level;
        fired
    }
}

/// Replays a fixed spawn schedule, then requests exit
#[derive(Debug, Clone)]
pub struct ScriptedInput {
    /// Frame indices (0-based) at which to request a spawn
    spawn_frames: Vec<u64>,
    /// Request exit once this many frames have been polled
    stop_after: Option<u64>,
    frame: u64,
}

impl ScriptedInput {
    pub fn new(mut spawn_frames: Vec<u64>, stop_after: Option<u64>) -> Self {
        spawn_frames.sort_unstable();
        spawn_frames.dedup();
        Self {
            spawn_frames,
            stop_after,
            frame: 0,
        }
    }

    /// A source that never spawns and never exits
    pub fn idle() -> Self {
        Self::new(Vec::new(), None)
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> FrameInput {
        let frame = self.frame;
        self.frame += 1;
        FrameInput {
            spawn: self.spawn_frames.binary_search(&frame).is_ok(),
            exit: self.stop_after.is_some_and(|n| frame >= n),
        }
    }
}
