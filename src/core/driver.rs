//! Frame-clock driven render loop.
//!
//! The driver is either Idle (nothing scheduled) or Running (exactly one
//! display-refresh callback outstanding). The first push from Idle starts the
//! loop; an accepted frame that leaves the registry empty stops it.

use crate::core::anim::RipplePainter;
use crate::core::color::Rgb;
use crate::core::pacing::FramePacer;
use crate::core::registry::RippleRegistry;
use glam::DVec2;
use std::mem;

/// Host display-refresh hook.
pub trait FrameScheduler {
    type Handle;
    /// Request one callback. `None` when the host refused.
    fn schedule(&mut self) -> Option<Self::Handle>;
    fn cancel(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState<H> {
    Idle,
    Running(H),
}

pub struct AnimationDriver<F: FrameScheduler> {
    scheduler: F,
    registry: RippleRegistry,
    pacer: FramePacer,
    state: DriverState<F::Handle>,
}

impl<F: FrameScheduler> AnimationDriver<F> {
    pub fn new(scheduler: F) -> Self {
        Self::with_pacer(scheduler, FramePacer::default())
    }

    pub fn with_pacer(scheduler: F, pacer: FramePacer) -> Self {
        Self {
            scheduler,
            registry: RippleRegistry::new(),
            pacer,
            state: DriverState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running(_))
    }

    pub fn state(&self) -> &DriverState<F::Handle> {
        &self.state
    }

    pub fn registry(&self) -> &RippleRegistry {
        &self.registry
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    /// Register a ripple and start the loop if it was idle.
    pub fn push(&mut self, origin: DVec2, max_radius: f64, now_ms: f64) {
        self.registry.push(origin, max_radius, now_ms);
        if !self.is_running() {
            self.pacer.reset(now_ms);
            self.reschedule();
        }
    }

    /// Handle one display-refresh callback.
    ///
    /// `timestamp_ms` is the host's frame timestamp (used for pacing), `now_ms`
    /// the clock ripples were stamped with.
    pub fn tick<P: RipplePainter>(
        &mut self,
        timestamp_ms: f64,
        now_ms: f64,
        duration_ms: f64,
        color: Rgb,
        painter: &mut P,
    ) {
        // the handle that fired is spent either way
        if let DriverState::Idle = mem::replace(&mut self.state, DriverState::Idle) {
            return;
        }
        if !painter.can_paint() {
            log::debug!("[driver] surface gone, stopping");
            self.registry.clear();
            return;
        }
        if !self.pacer.accept(timestamp_ms) {
            self.reschedule();
            return;
        }

        painter.clear();
        for paint in self.registry.advance(now_ms, duration_ms) {
            painter.fill_circle(&paint, color);
        }

        if !self.registry.is_empty() {
            self.reschedule();
        }
    }

    /// Cancel any outstanding callback and forget every ripple.
    pub fn stop(&mut self) {
        if let DriverState::Running(handle) = mem::replace(&mut self.state, DriverState::Idle) {
            self.scheduler.cancel(handle);
        }
        self.registry.clear();
    }

    fn reschedule(&mut self) {
        self.state = match self.scheduler.schedule() {
            Some(handle) => DriverState::Running(handle),
            None => DriverState::Idle,
        };
    }
}
