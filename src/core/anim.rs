//! Per-ripple animation curves. Everything is a pure function of elapsed time,
//! so nothing about a ripple is ever mutated after it is pushed.

use crate::core::color::Rgb;
use crate::core::constants::RADIUS_SCALE;
use glam::DVec2;

/// Elapsed fraction of the ripple's lifetime, clamped to `[0, 1]`.
/// A non-positive or non-finite duration counts as already finished.
#[inline]
pub fn progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms.is_nan() || duration_ms <= 0.0 {
        return 1.0;
    }
    // f64::min/max return the non-NaN operand, so NaN lands on 1.0
    (elapsed_ms / duration_ms).min(1.0).max(0.0)
}

#[inline]
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[inline]
pub fn ripple_radius(max_radius: f64, progress: f64) -> f64 {
    (max_radius * ease_out_cubic(progress) * RADIUS_SCALE).max(0.0)
}

#[inline]
pub fn ripple_alpha(progress: f64) -> f64 {
    1.0 - progress
}

/// One filled circle to draw this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RipplePaint {
    pub center: DVec2,
    pub radius: f64,
    pub alpha: f64,
}

/// Drawing target for the animation driver.
pub trait RipplePainter {
    /// Whether there is anything to draw onto.
    fn can_paint(&self) -> bool;
    fn clear(&mut self);
    fn fill_circle(&mut self, paint: &RipplePaint, color: Rgb);
}
