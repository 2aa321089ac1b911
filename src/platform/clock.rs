//! Frame clock
//!
//! The loop only ever consumes deltas between successive readings, so any
//! monotonically non-decreasing source works.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// Monotonic elapsed time in seconds
pub trait FrameClock {
    fn elapsed(&self) -> f64;
}

/// Wall clock backed by `std::time::Instant`
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Hand-advanced clock for tests and scripted runs
///
/// Clones share the same underlying time, so a driver can own one handle
/// while the test advances another.
#[derive(Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }
}

impl FrameClock for ManualClock {
    fn elapsed(&self) -> f64 {
        self.now.get()
    }
}
