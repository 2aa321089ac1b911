//! Platform abstraction layer
//!
//! The frame loop needs exactly two things from the outside world: a
//! monotonic clock and per-frame input. Both arrive through traits so
//! embedders and tests can substitute their own sources.

pub mod clock;
pub mod input;

pub use clock::{FrameClock, ManualClock, SystemClock};
pub use input::{EdgeTrigger, FrameInput, InputSource, ScriptedInput};
