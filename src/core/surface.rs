use crate::core::anim::RipplePainter;
use crate::core::error::SurfaceError;

/// The full-viewport drawing layer the ripples are painted on.
///
/// Every method must be safe to call while the surface is absent; only
/// `create` brings it into existence.
pub trait OverlaySurface: RipplePainter {
    /// Build and attach the surface. A no-op returning `Ok` if it already exists.
    /// On error the surface stays absent.
    fn create(&mut self, opacity: f64) -> Result<(), SurfaceError>;
    /// Match the backing store to the current viewport and pixel ratio.
    fn resize(&mut self);
    /// Detach and release the surface. Idempotent.
    fn destroy(&mut self);
    fn is_present(&self) -> bool;
    fn set_opacity(&mut self, opacity: f64);
}

/// Device pixel ratio actually used for the backing store. Non-positive or
/// non-finite host values fall back to 1.
#[inline]
pub fn capped_pixel_ratio(raw: f64, cap: f64) -> f64 {
    let dpr = if raw.is_finite() && raw > 0.0 { raw } else { 1.0 };
    dpr.min(cap)
}

/// Backing-store geometry for a viewport of `css_width x css_height` CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
    pub scale: f64,
    pub css_width: f64,
    pub css_height: f64,
}

pub fn backing_size(css_width: f64, css_height: f64, raw_dpr: f64, dpr_cap: f64) -> BackingSize {
    let scale = capped_pixel_ratio(raw_dpr, dpr_cap);
    BackingSize {
        width: (css_width * scale).max(0.0) as u32,
        height: (css_height * scale).max(0.0) as u32,
        scale,
        css_width,
        css_height,
    }
}

/// Inline style for the overlay element: pinned over the viewport, above
/// everything, never hit-testable.
pub fn overlay_css(opacity: f64) -> String {
    format!(
        "position: fixed !important; top: 0 !important; left: 0 !important; \
         width: 100vw !important; height: 100vh !important; \
         pointer-events: none !important; z-index: {} !important; \
         opacity: {} !important; visibility: visible !important; \
         display: block !important; transform: none !important;",
        crate::core::constants::OVERLAY_Z_INDEX,
        opacity
    )
}
