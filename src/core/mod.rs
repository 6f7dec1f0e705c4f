pub mod anim;
pub mod color;
pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod lifecycle;
pub mod pacing;
pub mod registry;
pub mod store;
pub mod surface;

pub use anim::{RipplePaint, RipplePainter};
pub use color::{hex_to_rgb, Rgb};
pub use config::{patch_for_namespace, Config, ConfigPatch, StorageChanges};
pub use driver::{AnimationDriver, DriverState, FrameScheduler};
pub use error::SurfaceError;
pub use lifecycle::{Controller, InputListeners};
pub use store::{boot, ConfigStore};
pub use surface::OverlaySurface;
