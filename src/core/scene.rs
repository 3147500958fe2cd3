//! Scene controller: owns the pillar ring, the camera, and the current
//! interaction mode, and turns intents plus time into one [`RenderOutput`]
//! per frame. Everything here is DOM-free and runs the same on any target.

use std::f32::consts::TAU;

use smallvec::SmallVec;

use super::angle::{angular_delta, normalize_angle};
use super::camera::{CameraState, DragSession};
use super::config::{PillarSpec, SceneConfig, CLICK_SLOP_PX, MOUSE_DRAG_GAIN, TOUCH_DRAG_GAIN};
use super::projector::{project_pillar, PillarVisual, Viewport, ZoomEffect};
use super::zoom::ZoomSession;

/// A pillar fixed to its angular slot on the ring.
#[derive(Clone, Debug)]
pub struct Pillar {
    pub spec: PillarSpec,
    /// Slot heading; slots are spaced evenly around the full circle.
    pub base_angle: f32,
    pub pitch: f32,
}

/// Which input source currently owns the camera. Exactly one owner at a
/// time; a drag can never overlap a zoom.
#[derive(Clone, Debug)]
pub enum Mode {
    Idle,
    Dragging(DragSession),
    Zooming(ZoomSession),
}

/// Pointer device class driving a drag; their yaw gains differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Mouse,
    Touch,
}

impl PointerKind {
    #[inline]
    pub fn drag_gain(self) -> f32 {
        match self {
            PointerKind::Mouse => MOUSE_DRAG_GAIN,
            PointerKind::Touch => TOUCH_DRAG_GAIN,
        }
    }
}

/// Background portion of a frame.
#[derive(Clone, Copy, Debug)]
pub struct BackgroundFrame {
    /// Panorama phase; the painter pans the image from this.
    pub phase: f32,
    pub blur_px: f32,
    pub brightness: f32,
}

/// Per-frame snapshot of everything the presentation layer may write.
/// The scene never touches the DOM; this struct is the whole contract.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub background: BackgroundFrame,
    pub pillars: SmallVec<[PillarVisual; 8]>,
    /// Opacity of the full-viewport black cover, 0 when idle.
    pub fader_opacity: f32,
    /// False while a zoom (plus its grace period) holds the pointer off.
    pub pointer_enabled: bool,
    pub zooming: bool,
    /// Set on exactly one frame per selection, when the zoom completes.
    pub navigate: Option<&'static str>,
}

pub struct Scene {
    pub config: SceneConfig,
    pillars: Vec<Pillar>,
    camera: CameraState,
    /// Independent rotation of the pillar ring itself.
    pillar_phase: f32,
    pillar_dir: f32,
    mode: Mode,
    hovered: Option<usize>,
    /// Travel of the most recent drag; stays put after release so the
    /// click that follows a long drag can be swallowed.
    recent_drag_px: f32,
}

impl Scene {
    pub fn new(config: SceneConfig, specs: Vec<PillarSpec>) -> Self {
        let count = specs.len().max(1);
        let pillars = specs
            .into_iter()
            .enumerate()
            .map(|(i, spec)| Pillar {
                spec,
                base_angle: (i as f32 / count as f32) * TAU,
                pitch: config.pitch,
            })
            .collect();
        Self {
            camera: CameraState::new(config.auto_speed),
            pillar_phase: 0.0,
            pillar_dir: 1.0,
            mode: Mode::Idle,
            hovered: None,
            recent_drag_px: 0.0,
            config,
            pillars,
        }
    }

    pub fn pillars(&self) -> &[Pillar] {
        &self.pillars
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn yaw(&self) -> f32 {
        self.camera.yaw()
    }

    pub fn bg_phase(&self) -> f32 {
        self.camera.bg_phase()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn recent_drag_px(&self) -> f32 {
        self.recent_drag_px
    }

    // ---- Input intents ----

    /// A press on the stage begins a drag, unless a zoom owns the camera.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if matches!(self.mode, Mode::Zooming(_)) {
            return;
        }
        self.recent_drag_px = 0.0;
        self.mode = Mode::Dragging(DragSession::begin(x, y));
    }

    /// A horizontal pointer move steers the yaw while a drag is live;
    /// ignored in any other mode.
    pub fn pointer_move(&mut self, x: f32, kind: PointerKind) {
        if let Mode::Dragging(session) = &mut self.mode {
            let dx = session.motion(x);
            self.recent_drag_px = session.travel_px();
            self.camera.drag_by(dx, kind.drag_gain());
        }
    }

    /// Release ends the drag and re-aims the idle rotation from how the
    /// pointer moved; the background keeps running opposite the pillars.
    pub fn pointer_up(&mut self) {
        if let Mode::Dragging(session) = &self.mode {
            self.recent_drag_px = session.travel_px();
            let dir = session.release_direction(self.camera.auto_dir);
            self.camera.auto_dir = dir;
            self.pillar_dir = -dir;
            self.mode = Mode::Idle;
        }
    }

    /// An interrupted pointer stream runs the same release inference as a
    /// clean release.
    pub fn pointer_cancel(&mut self) {
        self.pointer_up();
    }

    /// Hover a pillar by index; `None` clears. Ignored while zooming.
    pub fn set_hover(&mut self, index: Option<usize>) {
        if matches!(self.mode, Mode::Zooming(_)) {
            return;
        }
        self.hovered = index.filter(|&i| i < self.pillars.len());
    }

    /// Tooltip line for the current hover, when this scene shows tooltips.
    pub fn hover_tip(&self) -> Option<&'static str> {
        if !self.config.hover_tooltip {
            return None;
        }
        let pillar = self.pillars.get(self.hovered?)?;
        pillar.spec.tip.or(Some(pillar.spec.label))
    }

    /// Try to start the zoom transition for a clicked or tapped pillar.
    /// Refused after a real drag, during another zoom, and for pillars
    /// without a navigation target. Returns whether the dive started.
    pub fn select(&mut self, index: usize, now_ms: f64) -> bool {
        if self.recent_drag_px > CLICK_SLOP_PX || matches!(self.mode, Mode::Zooming(_)) {
            return false;
        }
        let Some(pillar) = self.pillars.get(index) else {
            return false;
        };
        let Some(url) = pillar.spec.url else {
            return false;
        };
        // Aim at the slot's current world heading, ring rotation included.
        let target = normalize_angle(pillar.base_angle + self.pillar_phase);
        self.hovered = None;
        self.mode = Mode::Zooming(ZoomSession::begin(now_ms, self.camera.yaw(), target, index, url));
        true
    }

    // ---- Frame ----

    /// Advance one frame: run the owning mode, fold the yaw delta into the
    /// background, then project every pillar.
    pub fn advance(&mut self, now_ms: f64, dt: f32, viewport: Viewport) -> RenderOutput {
        let mut navigate = None;
        let mut fader_opacity = 0.0;
        let mut blur_px = 0.0;
        let mut brightness = 1.0;
        let mut pointer_enabled = true;
        let mut zooming = false;
        let mut dive: Option<(usize, f32)> = None;

        match &mut self.mode {
            Mode::Idle => {
                let hold = self.hovered.is_some() && self.config.hover_freezes_rotation;
                self.camera.idle_tick(dt, hold);
                if !hold {
                    self.pillar_phase = normalize_angle(
                        self.pillar_phase + self.pillar_dir * self.config.pillar_speed * dt,
                    );
                }
            }
            // Yaw already moved through the move intents.
            Mode::Dragging(_) => {}
            Mode::Zooming(session) => {
                zooming = true;
                let frame = session.sample(now_ms);
                self.camera.set_yaw(frame.yaw);
                blur_px = frame.blur_px;
                brightness = frame.brightness;
                fader_opacity = frame.fader_opacity;
                dive = Some((session.pillar, frame.eased));
                navigate = session.take_navigation(now_ms);
                pointer_enabled = !session.pointer_locked(now_ms);
            }
        }

        // Counter-rotate the panorama against the frame's total yaw delta,
        // whatever caused it.
        self.camera.sync_background();

        let yaw = self.camera.yaw();
        let viewport = Viewport {
            w: viewport.w.max(1.0),
            h: viewport.h.max(1.0),
        };

        let mut pillars: SmallVec<[PillarVisual; 8]> = SmallVec::new();
        for (i, pillar) in self.pillars.iter().enumerate() {
            let rel_raw = angular_delta(yaw, pillar.base_angle + self.pillar_phase);
            let rel_screen = rel_raw * self.config.spread;
            let hovered = self.hovered == Some(i) && !zooming;
            let zoom = match dive {
                Some((target, eased)) if target == i => ZoomEffect::selected(eased),
                Some((_, eased)) => ZoomEffect::dimmed(eased),
                None => ZoomEffect::default(),
            };
            pillars.push(project_pillar(
                rel_screen,
                pillar.pitch,
                viewport,
                &self.config,
                hovered,
                zoom,
            ));
        }

        RenderOutput {
            background: BackgroundFrame {
                phase: self.camera.bg_phase(),
                blur_px,
                brightness,
            },
            pillars,
            fader_opacity,
            pointer_enabled,
            zooming,
            navigate,
        }
    }
}
