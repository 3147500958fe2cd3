//! Screen-space projection for pillar headings: tangent x-mapping with a
//! hard clamp at the rim, sine depth, a narrow rim fade, and a stable
//! stacking order that keeps the centre pillar on top.

use std::f32::consts::FRAC_PI_2;

use super::angle::{lerp, smoothstep};
use super::config::{
    SceneConfig, BASELINE_FRAC, EDGE_FADE_INNER_FRAC, EDGE_FADE_OUTER_FRAC, FOV,
    HOVER_SCALE_BOOST, PITCH_GAIN, PLINTH_BASE_OPACITY, PLINTH_BASE_PX, PLINTH_OPACITY_SPAN,
    PLINTH_SPAN_PX, ROTATION_FACTOR, STACK_BASE, STACK_RANK_SCALE, ZOOM_DIM_OTHERS,
    ZOOM_MAX_SCALE, ZOOM_MAX_TRANSLATE_Z, ZOOM_STACK_BOOST,
};

/// Viewer size in CSS pixels, sampled once per frame.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub w: f32,
    pub h: f32,
}

/// Zoom contribution to one pillar's visuals for the current frame.
#[derive(Clone, Copy, Debug)]
pub struct ZoomEffect {
    pub scale_boost: f32,
    pub translate_z: f32,
    pub opacity_boost: f32,
    pub stack_boost: i32,
}

impl Default for ZoomEffect {
    fn default() -> Self {
        Self {
            scale_boost: 1.0,
            translate_z: 0.0,
            opacity_boost: 1.0,
            stack_boost: 0,
        }
    }
}

impl ZoomEffect {
    /// Treatment of the pillar being zoomed into.
    pub fn selected(eased: f32) -> Self {
        Self {
            scale_boost: lerp(1.0, ZOOM_MAX_SCALE, eased),
            translate_z: lerp(0.0, ZOOM_MAX_TRANSLATE_Z, eased),
            opacity_boost: 1.0,
            stack_boost: ZOOM_STACK_BOOST,
        }
    }

    /// Treatment of every other pillar while a zoom runs.
    pub fn dimmed(eased: f32) -> Self {
        Self {
            opacity_boost: lerp(1.0, ZOOM_DIM_OTHERS, eased),
            ..Default::default()
        }
    }
}

/// Everything the presentation layer writes for one pillar.
#[derive(Clone, Copy, Debug)]
pub struct PillarVisual {
    /// Horizontal anchor in px, clamped into `[0, viewport width]`.
    pub x: f32,
    /// Baseline the pillar foot sits on, in px from the viewport top.
    pub y: f32,
    pub opacity: f32,
    /// False just outside the rim; parked pillars also stop taking pointer events.
    pub visible: bool,
    pub stacking: i32,
    /// Perspective turn toward the rim, in degrees.
    pub rotation_deg: f32,
    pub scale: f32,
    pub translate_z: f32,
    pub plinth_width_px: f32,
    pub plinth_opacity: f32,
}

/// Map a screen-space heading to a horizontal pixel position. Inside the
/// cone the mapping is `tan(rel) / tan(FOV/2)`; at or past the rim the
/// pillar parks on the matching viewport edge instead of blowing up.
#[inline]
pub fn project_yaw_to_x(rel_screen: f32, viewport_w: f32) -> f32 {
    let half = viewport_w / 2.0;
    if rel_screen.abs() >= FOV * EDGE_FADE_OUTER_FRAC {
        return if rel_screen > 0.0 { viewport_w } else { 0.0 };
    }
    let limit = (FOV / 2.0).tan();
    let nx = rel_screen.tan() / limit; // -1..1 within the cone
    (half + nx * half).clamp(0.0, viewport_w)
}

/// Rim-only fade; 1 across almost the whole cone, easing to 0 at the rim.
#[inline]
pub fn edge_fade(rel_screen: f32) -> f32 {
    1.0 - smoothstep(
        FOV * EDGE_FADE_INNER_FRAC,
        FOV * EDGE_FADE_OUTER_FRAC,
        rel_screen.abs(),
    )
}

/// Apparent depth: 0 at the centre of the cone, 1 at the rim.
#[inline]
pub fn depth_of(rel_screen: f32) -> f32 {
    let edge_frac = (rel_screen.abs() / FOV).clamp(0.0, 1.0);
    (edge_frac * FRAC_PI_2).sin()
}

/// Project one pillar. `rel_screen` is the spread-compressed heading
/// difference between the camera and the pillar slot.
pub fn project_pillar(
    rel_screen: f32,
    pitch: f32,
    viewport: Viewport,
    config: &SceneConfig,
    hovered: bool,
    zoom: ZoomEffect,
) -> PillarVisual {
    let depth = depth_of(rel_screen);
    let frontness = 1.0 - depth;
    let fade = edge_fade(rel_screen);
    let visible = rel_screen.abs() < FOV * EDGE_FADE_OUTER_FRAC;

    // Multiply high so rank ties are rare, then break the rest by side.
    let rank = (frontness * STACK_RANK_SCALE).round() as i32 * 2 + (rel_screen > 0.0) as i32;

    let hover_boost = if hovered { HOVER_SCALE_BOOST } else { 1.0 };

    PillarVisual {
        x: project_yaw_to_x(rel_screen, viewport.w),
        y: viewport.h * BASELINE_FRAC + pitch * (viewport.h * PITCH_GAIN),
        opacity: fade * zoom.opacity_boost,
        visible,
        stacking: STACK_BASE + zoom.stack_boost + rank,
        rotation_deg: -rel_screen.to_degrees() * ROTATION_FACTOR,
        scale: (config.scale_base + config.scale_span * depth) * hover_boost * zoom.scale_boost,
        translate_z: zoom.translate_z,
        plinth_width_px: PLINTH_BASE_PX + PLINTH_SPAN_PX * depth,
        plinth_opacity: (PLINTH_BASE_OPACITY + PLINTH_OPACITY_SPAN * depth) * fade,
    }
}
