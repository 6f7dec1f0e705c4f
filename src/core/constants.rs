// Ripple tuning and persisted-setting defaults shared by the core and the web glue.

// Registry
pub const MAX_RIPPLES: usize = 32; // oldest evicted past this

// Frame pacing
pub const TARGET_FPS: f64 = 120.0;
pub const FRAME_BUDGET_MS: f64 = 1000.0 / TARGET_FPS;
pub const FRAME_SLACK_MS: f64 = 1.0; // tolerated early arrival of a display callback

// Geometry
pub const RADIUS_SCALE: f64 = 2.0; // radius at full progress = size * RADIUS_SCALE

// Surface
pub const DEFAULT_DPR_CAP: f64 = 2.0;
pub const OVERLAY_ELEMENT_ID: &str = "ripple-fx-canvas";
pub const OVERLAY_Z_INDEX: u32 = 2_147_483_647;

// Colour used whenever the configured hex string is malformed
pub const FALLBACK_RGB: (u8, u8, u8) = (168, 168, 168);

// Persisted settings defaults
pub const DEFAULT_ENABLED: bool = true;
pub const DEFAULT_SIZE: f64 = 8.0;
pub const DEFAULT_DURATION_MS: f64 = 375.0;
pub const DEFAULT_OPACITY: f64 = 0.25;
pub const DEFAULT_COLOR: &str = "#a8a8a8";

// Only change notifications from this storage area are applied
pub const SYNC_NAMESPACE: &str = "sync";
