// Host-side tests for the screen projection: tangent x-mapping, rim fade,
// depth, stacking and the zoom treatments.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
#[path = "../src/core"]
mod carousel {
    pub mod angle;
    pub mod config;
    pub mod projector;
}

use carousel::config::{
    SceneConfig, EDGE_FADE_INNER_FRAC, EDGE_FADE_OUTER_FRAC, FOV, HOVER_SCALE_BOOST,
    PLINTH_BASE_PX, PLINTH_SPAN_PX, ZOOM_DIM_OTHERS, ZOOM_MAX_SCALE, ZOOM_MAX_TRANSLATE_Z,
    ZOOM_STACK_BOOST,
};
use carousel::projector::{
    depth_of, edge_fade, project_pillar, project_yaw_to_x, Viewport, ZoomEffect,
};

const W: f32 = 800.0;

fn viewport() -> Viewport {
    Viewport { w: W, h: 1000.0 }
}

fn project(rel_screen: f32) -> carousel::projector::PillarVisual {
    project_pillar(
        rel_screen,
        -0.05,
        viewport(),
        &SceneConfig::default(),
        false,
        ZoomEffect::default(),
    )
}

#[test]
fn centre_heading_projects_to_centre_x() {
    assert!((project_yaw_to_x(0.0, W) - W / 2.0).abs() < 1e-3);
}

#[test]
fn x_mapping_is_symmetric_about_the_centre() {
    for rel in [0.1, 0.4, 0.8, 1.2] {
        let right = project_yaw_to_x(rel, W) - W / 2.0;
        let left = W / 2.0 - project_yaw_to_x(-rel, W);
        assert!((right - left).abs() < 1e-2, "asymmetry at rel {rel}");
    }
}

#[test]
fn x_mapping_is_monotonic_inside_the_cone() {
    let mut prev = -1.0;
    for i in -40..=40 {
        let rel = i as f32 / 40.0 * FOV * 0.97;
        let x = project_yaw_to_x(rel, W);
        assert!(x >= prev, "x not monotonic at rel {rel}");
        prev = x;
    }
}

#[test]
fn x_stays_inside_the_viewport_for_any_heading() {
    for i in -100..=100 {
        let rel = i as f32 / 100.0 * 3.2;
        let x = project_yaw_to_x(rel, W);
        assert!((0.0..=W).contains(&x), "x {x} escaped at rel {rel}");
    }
}

#[test]
fn headings_at_or_past_the_rim_park_on_the_edge() {
    let rim = FOV * EDGE_FADE_OUTER_FRAC;
    assert_eq!(project_yaw_to_x(rim, W), W);
    assert_eq!(project_yaw_to_x(-rim, W), 0.0);
    assert_eq!(project_yaw_to_x(rim + 1.0, W), W);
    assert_eq!(project_yaw_to_x(-rim - 1.0, W), 0.0);
}

#[test]
fn edge_fade_is_full_inside_the_band_and_zero_past_it() {
    assert_eq!(edge_fade(0.0), 1.0);
    assert_eq!(edge_fade(FOV * 0.9), 1.0);
    assert_eq!(edge_fade(FOV * EDGE_FADE_INNER_FRAC), 1.0);
    assert_eq!(edge_fade(FOV * EDGE_FADE_OUTER_FRAC), 0.0);
    assert_eq!(edge_fade(FOV * 1.5), 0.0);

    // Strictly between the edges inside the band, falling with distance.
    let mid = FOV * (EDGE_FADE_INNER_FRAC + EDGE_FADE_OUTER_FRAC) / 2.0;
    let f = edge_fade(mid);
    assert!(f > 0.0 && f < 1.0);
    assert!(edge_fade(mid) > edge_fade(FOV * 0.999));
}

#[test]
fn edge_fade_is_symmetric() {
    let rel = FOV * 0.99;
    assert!((edge_fade(rel) - edge_fade(-rel)).abs() < 1e-6);
}

#[test]
fn depth_runs_from_centre_zero_to_rim_one() {
    assert_eq!(depth_of(0.0), 0.0);
    assert!((depth_of(FOV) - 1.0).abs() < 1e-6);
    assert!((depth_of(-FOV) - 1.0).abs() < 1e-6);
    // Clamped past the cone.
    assert!((depth_of(FOV * 2.0) - 1.0).abs() < 1e-6);
    // Sine shape at the half-way heading.
    assert!((depth_of(FOV / 2.0) - (std::f32::consts::FRAC_PI_4).sin()).abs() < 1e-5);
}

#[test]
fn baseline_and_pitch_place_the_foot() {
    let v = project(0.0);
    // h * 0.72 + pitch * (h * 1.2) with h = 1000, pitch = -0.05.
    assert!((v.y - 660.0).abs() < 1e-2);
}

#[test]
fn centre_pillar_stacks_on_top() {
    let centre = project(0.0);
    let near = project(0.5);
    let far = project(FOV * 0.9);
    assert!(centre.stacking > near.stacking);
    assert!(near.stacking > far.stacking);
}

#[test]
fn mirrored_headings_break_stacking_ties_by_side() {
    let right = project(0.3);
    let left = project(-0.3);
    assert_eq!(right.stacking, left.stacking + 1);
}

#[test]
fn rotation_turns_away_from_the_centre() {
    let right = project(0.5);
    let left = project(-0.5);
    assert!(right.rotation_deg < 0.0);
    assert!(left.rotation_deg > 0.0);
    assert!((right.rotation_deg + left.rotation_deg).abs() < 1e-3);
    // 0.5 rad * 0.55, in degrees.
    assert!((right.rotation_deg - (-0.5_f32.to_degrees() * 0.55)).abs() < 1e-2);
}

#[test]
fn scale_grows_toward_the_rim() {
    let centre = project(0.0);
    let rim = project(FOV * 0.9);
    assert!((centre.scale - 1.1).abs() < 1e-5);
    assert!(rim.scale > centre.scale);
    assert!(rim.scale <= 1.1 + 0.5 + 1e-5);
}

#[test]
fn hover_boosts_scale() {
    let plain = project(0.2);
    let hovered = project_pillar(
        0.2,
        -0.05,
        viewport(),
        &SceneConfig::default(),
        true,
        ZoomEffect::default(),
    );
    assert!((hovered.scale / plain.scale - HOVER_SCALE_BOOST).abs() < 1e-5);
}

#[test]
fn pillars_just_inside_the_rim_fade_but_stay_visible() {
    let v = project(FOV * 0.99);
    assert!(v.visible);
    assert!(v.opacity > 0.0 && v.opacity < 1.0);
}

#[test]
fn pillars_past_the_rim_hide() {
    let v = project(FOV * EDGE_FADE_OUTER_FRAC);
    assert!(!v.visible);
    assert_eq!(v.opacity, 0.0);
    let v = project(-FOV * 1.2);
    assert!(!v.visible);
}

#[test]
fn plinth_follows_depth_and_fade() {
    let centre = project(0.0);
    assert!((centre.plinth_width_px - PLINTH_BASE_PX).abs() < 1e-3);
    assert!((centre.plinth_opacity - 0.25).abs() < 1e-5);

    let deep = project(FOV * 0.9);
    let depth = depth_of(FOV * 0.9);
    assert!((deep.plinth_width_px - (PLINTH_BASE_PX + PLINTH_SPAN_PX * depth)).abs() < 1e-2);
    assert!(deep.plinth_opacity > centre.plinth_opacity);
}

#[test]
fn selected_zoom_effect_peaks_at_full_progress() {
    let v = project_pillar(
        0.0,
        -0.05,
        viewport(),
        &SceneConfig::default(),
        false,
        ZoomEffect::selected(1.0),
    );
    assert!((v.scale - 1.1 * ZOOM_MAX_SCALE).abs() < 1e-3);
    assert!((v.translate_z - ZOOM_MAX_TRANSLATE_Z).abs() < 1e-3);
    assert!(v.stacking > ZOOM_STACK_BOOST);
    // The dive never dims the selected pillar.
    assert_eq!(v.opacity, 1.0);
}

#[test]
fn dimmed_zoom_effect_fades_the_others() {
    let start = project_pillar(
        0.0,
        -0.05,
        viewport(),
        &SceneConfig::default(),
        false,
        ZoomEffect::dimmed(0.0),
    );
    assert!((start.opacity - 1.0).abs() < 1e-6);

    let end = project_pillar(
        0.0,
        -0.05,
        viewport(),
        &SceneConfig::default(),
        false,
        ZoomEffect::dimmed(1.0),
    );
    assert!((end.opacity - ZOOM_DIM_OTHERS).abs() < 1e-5);
    // Dimming never touches scale or depth placement.
    assert!((end.scale - start.scale).abs() < 1e-6);
    assert_eq!(end.translate_z, 0.0);
}
