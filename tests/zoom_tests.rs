// Host-side tests for the zoom transition curve and its exactly-once
// navigation hand-off.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core"]
mod carousel {
    pub mod angle;
    pub mod config;
    pub mod zoom;
}

use carousel::angle::angular_delta;
use carousel::zoom::ZoomSession;
use std::f32::consts::FRAC_PI_2;

const T0: f64 = 10_000.0;

fn session() -> ZoomSession {
    ZoomSession::begin(T0, 0.0, FRAC_PI_2, 2, "about.html")
}

#[test]
fn first_frame_is_untouched() {
    let frame = session().sample(T0);
    assert_eq!(frame.eased, 0.0);
    assert_eq!(frame.yaw, 0.0);
    assert_eq!(frame.blur_px, 0.0);
    assert_eq!(frame.brightness, 1.0);
    assert_eq!(frame.fader_opacity, 0.0);
    assert!(!frame.done);
}

#[test]
fn samples_before_the_start_clamp_to_it() {
    let frame = session().sample(T0 - 500.0);
    assert_eq!(frame.eased, 0.0);
    assert!(!frame.done);
}

#[test]
fn halfway_frame_matches_the_ease_out_curve() {
    // ease_out_cubic(0.5) = 1 - 0.5^3 = 0.875.
    let frame = session().sample(T0 + 400.0);
    assert!((frame.eased - 0.875).abs() < 1e-6);
    assert!((frame.yaw - 0.875 * FRAC_PI_2).abs() < 1e-5);
    assert!((frame.blur_px - 5.25).abs() < 1e-5);
    assert!((frame.brightness - 0.69375).abs() < 1e-5);
    assert!((frame.fader_opacity - 0.30555).abs() < 1e-4);
    assert!(!frame.done);
}

#[test]
fn fader_holds_at_zero_before_the_final_stretch() {
    let frame = session().sample(T0 + 200.0);
    assert!((frame.eased - 0.578125).abs() < 1e-6);
    assert_eq!(frame.fader_opacity, 0.0);
}

#[test]
fn final_frame_lands_on_the_target() {
    let frame = session().sample(T0 + 800.0);
    assert!(frame.done);
    assert!((frame.eased - 1.0).abs() < 1e-6);
    assert!((frame.yaw - FRAC_PI_2).abs() < 1e-6);
    assert!((frame.fader_opacity - 1.0).abs() < 1e-5);
}

#[test]
fn overshot_samples_stay_pinned_at_the_end() {
    let frame = session().sample(T0 + 5_000.0);
    assert!(frame.done);
    assert!((frame.yaw - FRAC_PI_2).abs() < 1e-6);
    assert!((frame.blur_px - 6.0).abs() < 1e-5);
    assert!((frame.brightness - 0.65).abs() < 1e-5);
}

#[test]
fn yaw_interpolates_the_short_way_across_the_seam() {
    let session = ZoomSession::begin(T0, 2.9, -2.9, 0, "work.html");
    let frame = session.sample(T0 + 400.0);
    // The short way from 2.9 to -2.9 crosses pi, never zero.
    assert!(frame.yaw.abs() > 2.9);
    let travelled = angular_delta(frame.yaw, 2.9);
    assert!(travelled > 0.0 && travelled < 0.49);
}

#[test]
fn navigation_waits_for_completion() {
    let mut session = session();
    assert_eq!(session.take_navigation(T0 + 780.0), None);
    assert_eq!(session.take_navigation(T0 + 800.0), Some("about.html"));
}

#[test]
fn navigation_fires_exactly_once() {
    let mut session = session();
    assert_eq!(session.take_navigation(T0 + 800.0), Some("about.html"));
    assert_eq!(session.take_navigation(T0 + 900.0), None);
    assert_eq!(session.take_navigation(T0 + 10_000.0), None);
}

#[test]
fn pointer_unlocks_after_the_grace_period() {
    let session = session();
    assert!(session.pointer_locked(T0 + 100.0));
    assert!(session.pointer_locked(T0 + 850.0));
    assert!(session.pointer_locked(T0 + 899.0));
    assert!(!session.pointer_locked(T0 + 900.0));
}
