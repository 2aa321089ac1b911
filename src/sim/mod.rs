//! Deterministic simulation module
//!
//! All ball behavior lives here. This module must be pure and deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio, or platform dependencies; the wall-hit hook
//!   passed to `step` is the sole outward channel

pub mod collision;
pub mod color;
pub mod state;
pub mod step;

pub use collision::{WallContact, rebound_direction, reflect, snap_to_wall, wall_contact};
pub use color::radial_color;
pub use state::{Ball, Simulation};
pub use step::step;
