//! Camera heading model: idle auto-rotation, live drag input, and the
//! background phase that counter-rotates against every yaw change.

use super::angle::{angular_delta, normalize_angle};
use super::config::DIRECTION_SLOP_PX;

/// Transient bookkeeping for one pointer drag.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragSession {
    pub start_x: f32,
    pub start_y: f32,
    last_x: f32,
    /// Signed horizontal delta of the most recent move.
    last_dx: f32,
    /// Signed sum of every horizontal delta so far.
    net_dx: f32,
    /// Sum of absolute horizontal deltas; the tap-vs-drag metric.
    travel_px: f32,
}

impl DragSession {
    pub fn begin(x: f32, y: f32) -> Self {
        Self {
            start_x: x,
            start_y: y,
            last_x: x,
            ..Default::default()
        }
    }

    /// Record a pointer move; returns the horizontal delta to feed the camera.
    pub fn motion(&mut self, x: f32) -> f32 {
        let dx = x - self.last_x;
        self.last_x = x;
        self.last_dx = dx;
        self.net_dx += dx;
        self.travel_px += dx.abs();
        dx
    }

    pub fn travel_px(&self) -> f32 {
        self.travel_px
    }

    pub fn net_dx(&self) -> f32 {
        self.net_dx
    }

    /// Direction the auto-rotation continues in after release: the sign of
    /// the net displacement when it is decisive, the sign of the last move
    /// otherwise, or `prev` when the pointer never really moved. Jitter
    /// below the slop never reverses the spin.
    pub fn release_direction(&self, prev: f32) -> f32 {
        if self.net_dx.abs() > DIRECTION_SLOP_PX {
            self.net_dx.signum()
        } else if self.last_dx != 0.0 {
            self.last_dx.signum()
        } else {
            prev
        }
    }
}

/// Camera yaw plus the phase that drives the counter-rotating panorama.
#[derive(Clone, Debug)]
pub struct CameraState {
    yaw: f32,
    bg_phase: f32,
    prev_yaw: f32,
    /// +1 or -1; the direction idle rotation currently runs in.
    pub auto_dir: f32,
    pub auto_speed: f32,
}

impl CameraState {
    pub fn new(auto_speed: f32) -> Self {
        Self {
            yaw: 0.0,
            bg_phase: 0.0,
            prev_yaw: 0.0,
            auto_dir: -1.0,
            auto_speed,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn bg_phase(&self) -> f32 {
        self.bg_phase
    }

    /// Advance the idle auto-rotation. With `hold_pillars` set the yaw is
    /// left alone and the background drifts by itself at the same rate.
    pub fn idle_tick(&mut self, dt: f32, hold_pillars: bool) {
        let step = self.auto_dir * self.auto_speed * dt;
        if hold_pillars {
            self.bg_phase = normalize_angle(self.bg_phase - step);
        } else {
            self.yaw = normalize_angle(self.yaw + step);
        }
    }

    /// Apply a live drag delta (px) through the given gain (radians per px).
    pub fn drag_by(&mut self, dx: f32, gain: f32) {
        self.yaw = normalize_angle(self.yaw + dx * gain);
    }

    /// Steer the yaw directly; the zoom sequencer owns the camera this way.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = normalize_angle(yaw);
    }

    /// Fold this frame's total yaw delta into the background phase so the
    /// panorama moves strictly opposite to whatever moved the camera.
    /// Must run after the last yaw write of the frame.
    pub fn sync_background(&mut self) {
        let dyaw = angular_delta(self.yaw, self.prev_yaw);
        self.bg_phase = normalize_angle(self.bg_phase - dyaw);
        self.prev_yaw = self.yaw;
    }
}
