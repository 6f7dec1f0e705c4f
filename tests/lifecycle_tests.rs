// Host-side tests for the lifecycle controller wired to fake host capabilities.
// The main crate is wasm-only, so we mount the pure-Rust core directly.

#![allow(dead_code)]
#[path = "../src/core/mod.rs"]
mod core;
mod support;

use crate::core::{Config, ConfigPatch, Rgb, SurfaceError};
use glam::DVec2;
use support::{approx, controller, enabled_controller, FakeSurface, TestController};

fn disable() -> ConfigPatch {
    ConfigPatch {
        enabled: Some(false),
        ..ConfigPatch::default()
    }
}

fn enable() -> ConfigPatch {
    ConfigPatch {
        enabled: Some(true),
        ..ConfigPatch::default()
    }
}

fn click(c: &mut TestController, x: f64, y: f64, now: f64) {
    c.on_click(DVec2::new(x, y), true, now);
}

#[test]
fn inactive_until_first_apply() {
    let c = controller();
    assert!(!c.is_active());
    assert!(!c.surface().present);
    assert!(!c.listeners().installed);
}

#[test]
fn single_click_full_lifetime() {
    let mut c = enabled_controller();
    assert!(c.is_active());
    assert_eq!(c.surface().opacity, Some(0.25));
    assert!(c.listeners().installed);

    click(&mut c, 100.0, 200.0, 1000.0);
    assert_eq!(c.driver().registry().len(), 1);
    assert!(c.driver().is_running());

    c.on_frame(1187.5, 1187.5);
    let (paint, color) = c.surface().painted[0];
    assert_eq!(paint.center, DVec2::new(100.0, 200.0));
    assert!(approx(paint.radius, 14.0));
    assert!(approx(paint.alpha, 0.5));
    assert_eq!(color, Rgb::new(168, 168, 168));

    c.on_frame(1375.0, 1375.0);
    assert!(c.driver().registry().is_empty());
    assert!(!c.driver().is_running());
    assert!(c.surface().painted.is_empty());
}

#[test]
fn untrusted_clicks_are_ignored() {
    let mut c = enabled_controller();
    c.on_click(DVec2::new(10.0, 10.0), false, 0.0);
    assert!(c.driver().registry().is_empty());
    assert!(!c.driver().is_running());
}

#[test]
fn disabling_mid_animation_tears_everything_down() {
    let mut c = enabled_controller();
    click(&mut c, 1.0, 1.0, 0.0);
    click(&mut c, 2.0, 2.0, 5.0);
    c.on_frame(10.0, 10.0);
    let pending = c.driver().scheduler().pending.expect("frame outstanding");

    c.apply(&disable());
    assert!(!c.is_active());
    assert!(c.driver().registry().is_empty());
    assert!(!c.driver().is_running());
    assert_eq!(c.driver().scheduler().cancelled, vec![pending]);
    assert!(!c.surface().present);
    assert_eq!(c.surface().destroys, 1);
    assert!(!c.listeners().installed);
    assert!(c.surface().painted.is_empty());
    let clears = c.surface().clears;

    click(&mut c, 3.0, 3.0, 20.0);
    c.on_frame(30.0, 30.0);
    assert!(c.driver().registry().is_empty());
    assert!(!c.driver().is_running());
    assert!(c.surface().painted.is_empty());
    assert_eq!(c.surface().clears, clears);

    // disabling again changes nothing
    c.apply(&disable());
    assert_eq!(c.surface().destroys, 1);
    assert_eq!(c.listeners().removals, 1);
}

#[test]
fn re_enable_rebuilds() {
    let mut c = enabled_controller();
    c.apply(&disable());
    c.apply(&enable());

    assert!(c.surface().present);
    assert_eq!(c.surface().creates, 2);
    assert_eq!(c.listeners().installs, 2);
    click(&mut c, 1.0, 1.0, 0.0);
    assert!(c.driver().is_running());
}

#[test]
fn repeated_enable_creates_one_surface() {
    let mut c = enabled_controller();
    c.apply(&ConfigPatch::from(&Config::default()));
    c.apply(&enable());
    assert_eq!(c.surface().creates, 1);
    assert_eq!(c.listeners().installs, 1);
}

#[test]
fn opacity_only_update_touches_styling() {
    let mut c = enabled_controller();
    let before = c.config().clone();

    c.apply(&ConfigPatch {
        base_opacity: Some(0.5),
        ..ConfigPatch::default()
    });
    assert_eq!(
        *c.config(),
        Config {
            base_opacity: 0.5,
            ..before
        }
    );
    assert_eq!(c.surface().opacity, Some(0.5));
    assert_eq!(c.surface().creates, 1);
    assert_eq!(c.surface().destroys, 0);
    assert_eq!(c.listeners().installs, 1);
}

#[test]
fn in_flight_ripples_keep_their_size() {
    let mut c = enabled_controller();
    click(&mut c, 0.0, 0.0, 0.0);
    c.apply(&ConfigPatch {
        max_radius_unit: Some(20.0),
        ..ConfigPatch::default()
    });
    click(&mut c, 50.0, 50.0, 0.0);

    c.on_frame(187.5, 187.5);
    let radii: Vec<f64> = c.surface().painted.iter().map(|(p, _)| p.radius).collect();
    assert_eq!(radii.len(), 2);
    assert!(approx(radii[0], 14.0));
    assert!(approx(radii[1], 35.0));
}

#[test]
fn colour_and_duration_apply_on_next_frame() {
    let mut c = enabled_controller();
    click(&mut c, 0.0, 0.0, 0.0);
    c.apply(&ConfigPatch {
        color_hex: Some("#FF0000".into()),
        duration_ms: Some(750.0),
        ..ConfigPatch::default()
    });

    c.on_frame(375.0, 375.0);
    let (paint, color) = c.surface().painted[0];
    assert_eq!(color, Rgb::new(255, 0, 0));
    assert!(approx(paint.alpha, 0.5));

    c.apply(&ConfigPatch {
        color_hex: Some("not a colour".into()),
        ..ConfigPatch::default()
    });
    assert_eq!(c.color(), Rgb::FALLBACK);
}

#[test]
fn surface_failure_degrades_silently() {
    let mut c = support::TestController::new(
        FakeSurface {
            fail_with: Some(SurfaceError::ContextUnavailable),
            ..FakeSurface::default()
        },
        Default::default(),
        Default::default(),
    );
    c.apply(&ConfigPatch::from(&Config::default()));
    assert!(c.is_active());
    assert!(!c.surface().present);

    click(&mut c, 1.0, 1.0, 0.0);
    c.on_resize();
    c.on_frame(100.0, 100.0);
    assert!(c.driver().registry().is_empty());
    assert!(!c.driver().is_running());
    assert_eq!(c.surface().resizes, 0);

    c.apply(&disable());
    assert!(!c.listeners().installed);
}

#[test]
fn resize_reaches_the_surface() {
    let mut c = enabled_controller();
    c.on_resize();
    c.on_resize();
    assert_eq!(c.surface().resizes, 2);

    let mut idle = controller();
    idle.on_resize();
    assert_eq!(idle.surface().resizes, 0);
}
