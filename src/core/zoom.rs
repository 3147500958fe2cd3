//! Scripted zoom-into-selection transition.
//!
//! A session captures everything at the moment of selection and is pure
//! from then on: every frame samples the same curve from wall-clock time,
//! so a dropped frame can never change where the camera ends up.

use super::angle::{ease_out_cubic, lerp, lerp_angle};
use super::config::{
    ZOOM_BLUR_MAX_PX, ZOOM_DURATION_MS, ZOOM_FADER_START, ZOOM_MIN_BRIGHTNESS,
    ZOOM_POINTER_GRACE_MS,
};

/// An in-flight selection transition.
#[derive(Clone, Debug)]
pub struct ZoomSession {
    start_ms: f64,
    duration_ms: f64,
    start_yaw: f32,
    target_yaw: f32,
    /// Index of the pillar being dived into.
    pub pillar: usize,
    url: Option<&'static str>,
}

/// One sampled frame of a zoom session.
#[derive(Clone, Copy, Debug)]
pub struct ZoomFrame {
    /// Eased progress in `[0, 1]`.
    pub eased: f32,
    /// Camera heading for this frame; overrides whatever the camera held.
    pub yaw: f32,
    pub blur_px: f32,
    pub brightness: f32,
    /// Opacity of the fade-to-black cover; 0 until the final stretch.
    pub fader_opacity: f32,
    pub done: bool,
}

impl ZoomSession {
    pub fn begin(now_ms: f64, start_yaw: f32, target_yaw: f32, pillar: usize, url: &'static str) -> Self {
        Self {
            start_ms: now_ms,
            duration_ms: ZOOM_DURATION_MS,
            start_yaw,
            target_yaw,
            pillar,
            url: Some(url),
        }
    }

    pub fn sample(&self, now_ms: f64) -> ZoomFrame {
        let t = ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0) as f32;
        let eased = ease_out_cubic(t);
        let fader_opacity = if eased > ZOOM_FADER_START {
            (eased - ZOOM_FADER_START) / (1.0 - ZOOM_FADER_START)
        } else {
            0.0
        };
        ZoomFrame {
            eased,
            yaw: lerp_angle(self.start_yaw, self.target_yaw, eased),
            blur_px: lerp(0.0, ZOOM_BLUR_MAX_PX, eased),
            brightness: lerp(1.0, ZOOM_MIN_BRIGHTNESS, eased),
            fader_opacity,
            done: eased >= 1.0,
        }
    }

    /// Hand out the navigation target once progress is complete. The URL
    /// moves out on the first call, so navigation can only fire once no
    /// matter how many frames sample a finished session.
    pub fn take_navigation(&mut self, now_ms: f64) -> Option<&'static str> {
        if self.sample(now_ms).done {
            self.url.take()
        } else {
            None
        }
    }

    /// Pointer input stays disabled for the duration plus a short grace
    /// period, absorbing stray clicks right at the end of the dive.
    pub fn pointer_locked(&self, now_ms: f64) -> bool {
        now_ms < self.start_ms + self.duration_ms + ZOOM_POINTER_GRACE_MS
    }
}
