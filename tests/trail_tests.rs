// Host-side tests for the custom cursor trail model.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core/trail.rs"]
mod trail;

use glam::Vec2;
use trail::{CursorTrail, GHOST_COUNT};

fn trail_at(x: f32, y: f32) -> CursorTrail {
    CursorTrail::new(Vec2::new(x, y))
}

#[test]
fn ring_eases_while_the_dot_snaps() {
    let mut trail = trail_at(100.0, 100.0);
    trail.point_to(200.0, 100.0);
    let frame = trail.advance(0.0);
    // One ease step covers a fifth of the gap.
    assert!((frame.ring.x - 120.0).abs() < 1e-4);
    assert_eq!(frame.ring.y, 100.0);
    assert_eq!(frame.dot, Vec2::new(200.0, 100.0));
}

#[test]
fn ring_converges_onto_a_still_pointer() {
    let mut trail = trail_at(0.0, 0.0);
    trail.point_to(300.0, 200.0);
    let mut frame = trail.advance(0.0);
    for _ in 0..50 {
        frame = trail.advance(0.0);
    }
    assert!((frame.ring - frame.dot).length() < 1.0);
}

#[test]
fn first_frame_spawns_a_single_ghost() {
    let mut trail = trail_at(100.0, 100.0);
    trail.point_to(200.0, 100.0);
    let frame = trail.advance(0.0);

    // The fresh ghost has already taken its first decay step.
    assert!((frame.ghosts[0].opacity - 0.95).abs() < 1e-5);
    assert_eq!(frame.ghosts[0].pos, Vec2::new(200.0, 100.0));
    for sprite in &frame.ghosts[1..] {
        assert_eq!(sprite.opacity, 0.0);
    }
}

#[test]
fn ghosts_spawn_every_other_frame_into_the_most_faded_slot() {
    let mut trail = trail_at(0.0, 0.0);
    let f0 = trail.advance(0.0);
    let f1 = trail.advance(0.0);
    // Odd frame: no spawn, the first ghost just fades.
    assert!((f1.ghosts[0].opacity - 0.90).abs() < 1e-5);
    assert!(f1.ghosts[1].opacity == 0.0);

    let f2 = trail.advance(0.0);
    // Even frame again: the empty slot wins over the live one.
    assert!((f2.ghosts[1].opacity - 0.95).abs() < 1e-5);
    assert!(f2.ghosts[0].opacity < f0.ghosts[0].opacity);
}

#[test]
fn trail_fills_out_and_stays_bounded() {
    let mut trail = trail_at(0.0, 0.0);
    let mut frame = trail.advance(0.0);
    for i in 1..20 {
        trail.point_to(i as f32 * 10.0, 0.0);
        frame = trail.advance(0.0);
    }

    let alive = frame.ghosts.iter().filter(|g| g.opacity > 0.001).count();
    assert!(alive >= 8);
    assert!(alive <= GHOST_COUNT);
    for sprite in &frame.ghosts {
        assert!((0.0..=1.0).contains(&sprite.opacity));
        assert!(sprite.scale >= 1.0 && sprite.scale <= 1.6 + 1e-5);
    }
}

#[test]
fn ghosts_grow_as_they_fade() {
    let mut trail = trail_at(0.0, 0.0);
    let frame = trail.advance(0.0);
    let fresh = frame.ghosts[0];
    let dead = frame.ghosts[9];
    assert!((fresh.scale - 1.03).abs() < 1e-5);
    assert!((dead.scale - 1.6).abs() < 1e-5);
    assert!(fresh.scale < dead.scale);
}

#[test]
fn click_pulse_times_out() {
    let mut trail = trail_at(0.0, 0.0);
    assert!(!trail.advance(500.0).pulsing);
    trail.click(1_000.0);
    assert!(trail.advance(1_100.0).pulsing);
    assert!(trail.advance(1_239.0).pulsing);
    assert!(!trail.advance(1_300.0).pulsing);
}
