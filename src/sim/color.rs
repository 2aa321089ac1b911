//! Radial color gradient
//!
//! Ball color is a pure function of distance from the center, refreshed for
//! every ball on every step. Three bands sweep red at the center through
//! green to blue at the wall.

/// Map normalized center distance to an RGB color
///
/// `t` is distance over wall radius. Values a little above 1.0 occur when a
/// fast ball overshoots the wall on the frame it collides; the bands are
/// left unclamped to keep the mapping monotonic there.
pub fn radial_color(t: f32) -> [f32; 3] {
    if t < 0.33 {
        // Red to yellow
        [1.0, t * 3.0, 0.0]
    } else if t < 0.66 {
        // Yellow to cyan
        [1.0 - (t - 0.33) * 3.0, 1.0, (t - 0.33) * 3.0]
    } else {
        // Cyan to violet
        [(t - 0.66) * 3.0, 1.0 - (t - 0.66) * 3.0, 1.0]
    }
}
