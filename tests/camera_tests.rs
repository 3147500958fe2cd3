// Host-side tests for drag bookkeeping and the camera heading model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core"]
mod carousel {
    pub mod angle;
    pub mod config;
    pub mod camera;
}

use carousel::angle::normalize_angle;
use carousel::camera::{CameraState, DragSession};
use std::f32::consts::TAU;

#[test]
fn drag_session_reports_deltas_and_travel() {
    let mut drag = DragSession::begin(100.0, 50.0);
    assert_eq!(drag.motion(110.0), 10.0);
    assert_eq!(drag.motion(105.0), -5.0);
    assert!((drag.net_dx() - 5.0).abs() < 1e-6);
    assert!((drag.travel_px() - 15.0).abs() < 1e-6);
    assert_eq!(drag.start_x, 100.0);
    assert_eq!(drag.start_y, 50.0);
}

#[test]
fn release_direction_follows_decisive_net_movement() {
    let mut drag = DragSession::begin(0.0, 0.0);
    drag.motion(10.0);
    assert_eq!(drag.release_direction(-1.0), 1.0);

    let mut drag = DragSession::begin(0.0, 0.0);
    drag.motion(-10.0);
    assert_eq!(drag.release_direction(1.0), -1.0);
}

#[test]
fn release_direction_prefers_net_over_last_move() {
    // Net +4 is decisive even though the final move went backward.
    let mut drag = DragSession::begin(0.0, 0.0);
    drag.motion(5.0);
    drag.motion(4.0);
    assert!(drag.net_dx() > 2.0);
    assert_eq!(drag.release_direction(-1.0), 1.0);
}

#[test]
fn release_direction_falls_back_to_last_move_inside_the_slop() {
    // +1 then -2: net -1 is inside the slop, the last move decides.
    let mut drag = DragSession::begin(0.0, 0.0);
    drag.motion(1.0);
    drag.motion(-1.0);
    assert!(drag.net_dx().abs() <= 2.0);
    assert_eq!(drag.release_direction(1.0), -1.0);
}

#[test]
fn release_direction_keeps_previous_spin_when_nothing_moved() {
    let drag = DragSession::begin(30.0, 40.0);
    assert_eq!(drag.release_direction(-1.0), -1.0);
    assert_eq!(drag.release_direction(1.0), 1.0);
}

#[test]
fn camera_starts_spinning_backward() {
    let cam = CameraState::new(0.32);
    assert_eq!(cam.auto_dir, -1.0);
    assert_eq!(cam.yaw(), 0.0);
    assert_eq!(cam.bg_phase(), 0.0);
}

#[test]
fn idle_tick_advances_yaw_by_dir_times_speed() {
    let mut cam = CameraState::new(0.32);
    cam.idle_tick(1.0, false);
    assert!((cam.yaw() - -0.32).abs() < 1e-6);

    cam.auto_dir = 1.0;
    cam.idle_tick(0.5, false);
    assert!((cam.yaw() - -0.16).abs() < 1e-6);
}

#[test]
fn idle_tick_with_hold_moves_only_the_background() {
    let mut cam = CameraState::new(0.32);
    cam.sync_background();
    let yaw_before = cam.yaw();
    let bg_before = cam.bg_phase();

    cam.idle_tick(1.0, true);
    assert_eq!(cam.yaw(), yaw_before);
    // auto_dir is -1, so the background drifts by +speed.
    assert!((cam.bg_phase() - (bg_before + 0.32)).abs() < 1e-5);

    // The held frame contributes no yaw delta, so syncing changes nothing.
    let bg_mid = cam.bg_phase();
    cam.sync_background();
    assert!((cam.bg_phase() - bg_mid).abs() < 1e-6);
}

#[test]
fn drag_by_applies_gain_per_pixel() {
    let mut cam = CameraState::new(0.32);
    cam.drag_by(100.0, 0.0006);
    assert!((cam.yaw() - 0.06).abs() < 1e-6);
    cam.drag_by(-200.0, 0.0006);
    assert!((cam.yaw() - -0.06).abs() < 1e-5);
}

#[test]
fn set_yaw_normalizes() {
    let mut cam = CameraState::new(0.32);
    cam.set_yaw(7.0);
    assert!((cam.yaw() - (7.0 - TAU)).abs() < 1e-5);
}

#[test]
fn background_counter_rotates_against_every_yaw_source() {
    let mut cam = CameraState::new(0.32);

    // Mix idle motion, a drag, and a direct steer; sync after each frame
    // the way the scene does.
    cam.idle_tick(0.5, false);
    cam.sync_background();
    cam.drag_by(80.0, 0.0006);
    cam.sync_background();
    cam.set_yaw(1.0);
    cam.sync_background();

    // Total yaw travel equals the final yaw here (started at zero, each
    // step well under half a turn), so the phase must be its mirror.
    let expected = normalize_angle(-cam.yaw());
    assert!(
        (cam.bg_phase() - expected).abs() < 1e-4,
        "bg_phase {} should mirror yaw {}",
        cam.bg_phase(),
        cam.yaw()
    );
}

#[test]
fn sync_background_is_idempotent_between_yaw_changes() {
    let mut cam = CameraState::new(0.32);
    cam.idle_tick(1.0, false);
    cam.sync_background();
    let bg = cam.bg_phase();
    cam.sync_background();
    cam.sync_background();
    assert!((cam.bg_phase() - bg).abs() < 1e-6);
}
