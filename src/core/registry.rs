use crate::core::anim::{self, RipplePaint};
use crate::core::constants::MAX_RIPPLES;
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
    pub origin: DVec2,
    pub start_ms: f64,
    /// Captured from the config at push time.
    pub max_radius: f64,
}

impl Ripple {
    /// Paint parameters at `now_ms`, or `None` once the ripple has run its course.
    pub fn sample(&self, now_ms: f64, duration_ms: f64) -> Option<RipplePaint> {
        let progress = anim::progress(now_ms - self.start_ms, duration_ms);
        if progress >= 1.0 {
            return None;
        }
        Some(RipplePaint {
            center: self.origin,
            radius: anim::ripple_radius(self.max_radius, progress),
            alpha: anim::ripple_alpha(progress),
        })
    }
}

/// Bounded FIFO of live ripples, oldest first.
#[derive(Clone, Debug, Default)]
pub struct RippleRegistry {
    ripples: SmallVec<[Ripple; MAX_RIPPLES]>,
}

impl RippleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a ripple, evicting the oldest one first when full.
    pub fn push(&mut self, origin: DVec2, max_radius: f64, now_ms: f64) {
        if self.ripples.len() >= MAX_RIPPLES {
            self.ripples.remove(0);
        }
        self.ripples.push(Ripple {
            origin,
            start_ms: now_ms,
            max_radius,
        });
    }

    /// Drop every ripple whose progress has reached 1.
    pub fn prune_expired(&mut self, now_ms: f64, duration_ms: f64) {
        self.ripples
            .retain(|r| anim::progress(now_ms - r.start_ms, duration_ms) < 1.0);
    }

    /// Prune expired ripples and return paint parameters for the survivors,
    /// oldest first.
    pub fn advance(
        &mut self,
        now_ms: f64,
        duration_ms: f64,
    ) -> SmallVec<[RipplePaint; MAX_RIPPLES]> {
        let mut paints = SmallVec::new();
        self.ripples.retain(|r| match r.sample(now_ms, duration_ms) {
            Some(p) => {
                paints.push(p);
                true
            }
            None => false,
        });
        paints
    }

    pub fn clear(&mut self) {
        self.ripples.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.ripples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ripples.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ripple> {
        self.ripples.iter()
    }
}
