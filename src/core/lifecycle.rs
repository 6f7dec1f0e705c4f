//! Lifecycle controller: the single owner of settings, derived colour, the
//! overlay surface, the animation driver and the input listeners.

use crate::core::color::{hex_to_rgb, Rgb};
use crate::core::config::{Config, ConfigPatch};
use crate::core::driver::{AnimationDriver, FrameScheduler};
use crate::core::surface::OverlaySurface;
use glam::DVec2;

/// Page-level click and resize subscriptions.
pub trait InputListeners {
    fn install(&mut self);
    fn remove(&mut self);
    fn is_installed(&self) -> bool;
}

pub struct Controller<S, F, L>
where
    F: FrameScheduler,
{
    config: Config,
    color: Rgb,
    surface: S,
    driver: AnimationDriver<F>,
    listeners: L,
    active: bool,
}

impl<S, F, L> Controller<S, F, L>
where
    S: OverlaySurface,
    F: FrameScheduler,
    L: InputListeners,
{
    /// Starts inactive with default settings; nothing touches the page until
    /// the first [`apply`](Self::apply).
    pub fn new(surface: S, scheduler: F, listeners: L) -> Self {
        let config = Config::default();
        Self {
            color: hex_to_rgb(&config.color_hex),
            config,
            surface,
            driver: AnimationDriver::new(scheduler),
            listeners,
            active: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn driver(&self) -> &AnimationDriver<F> {
        &self.driver
    }

    pub fn listeners(&self) -> &L {
        &self.listeners
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Merge a (full or partial) settings record and react to it.
    pub fn apply(&mut self, patch: &ConfigPatch) {
        self.config.merge(patch);
        self.color = hex_to_rgb(&self.config.color_hex);

        match (self.config.enabled, self.active) {
            (true, false) => self.activate(),
            (false, true) => self.deactivate(),
            _ => {}
        }

        if self.surface.is_present() {
            self.surface.set_opacity(self.config.base_opacity);
        }
    }

    pub fn on_click(&mut self, point: DVec2, trusted: bool, now_ms: f64) {
        if !trusted || !self.config.enabled || !self.surface.is_present() {
            return;
        }
        self.driver.push(point, self.config.max_radius_unit, now_ms);
    }

    pub fn on_resize(&mut self) {
        self.surface.resize();
    }

    pub fn on_frame(&mut self, timestamp_ms: f64, now_ms: f64) {
        self.driver.tick(
            timestamp_ms,
            now_ms,
            self.config.duration_ms,
            self.color,
            &mut self.surface,
        );
    }

    fn activate(&mut self) {
        if let Err(e) = self.surface.create(self.config.base_opacity) {
            log::warn!("[surface] init failed, ripples disabled: {}", e);
        }
        if !self.listeners.is_installed() {
            self.listeners.install();
        }
        self.active = true;
        log::info!("[lifecycle] enabled");
    }

    fn deactivate(&mut self) {
        self.driver.stop();
        self.surface.destroy();
        self.listeners.remove();
        self.active = false;
        log::info!("[lifecycle] disabled");
    }
}
