// Shared carousel tuning constants and per-scene configuration.

// Projection cone
pub const FOV: f32 = std::f32::consts::FRAC_PI_2; // horizontal field of view (radians)
pub const EDGE_FADE_INNER_FRAC: f32 = 0.985; // fraction of FOV where the rim fade starts
pub const EDGE_FADE_OUTER_FRAC: f32 = 0.9995; // fully faded, clamped and hidden at the rim

// Screen placement
pub const BASELINE_FRAC: f32 = 0.72; // pillar feet sit at this fraction of viewport height
pub const PITCH_GAIN: f32 = 1.2; // pitch-to-px factor, times viewport height
pub const ROTATION_FACTOR: f32 = 0.55; // degrees of rotateY per degree of screen angle
pub const HOVER_SCALE_BOOST: f32 = 1.08;

// Plinth shadow under each pillar
pub const PLINTH_BASE_PX: f32 = 220.0;
pub const PLINTH_SPAN_PX: f32 = 120.0;
pub const PLINTH_BASE_OPACITY: f32 = 0.25;
pub const PLINTH_OPACITY_SPAN: f32 = 0.55;

// Stacking order
pub const STACK_BASE: i32 = 1000;
pub const STACK_RANK_SCALE: f32 = 10_000.0; // frontness multiplier, high so ties are rare
pub const ZOOM_STACK_BOOST: i32 = 8000; // lifts the selected pillar above everything

// Pointer interaction
pub const CLICK_SLOP_PX: f32 = 6.0; // tap-vs-drag threshold
pub const DIRECTION_SLOP_PX: f32 = 2.0; // minimum net drag that picks a spin direction
pub const MOUSE_DRAG_GAIN: f32 = 0.0006; // radians of yaw per pixel dragged
pub const TOUCH_DRAG_GAIN: f32 = 0.0003; // touch deltas arrive finer-grained

// Zoom transition
pub const ZOOM_DURATION_MS: f64 = 800.0;
pub const ZOOM_POINTER_GRACE_MS: f64 = 100.0; // pointer stays disabled briefly past the end
pub const ZOOM_MAX_SCALE: f32 = 3.8; // multiplies the projected scale at peak zoom
pub const ZOOM_MAX_TRANSLATE_Z: f32 = 900.0; // px toward the camera at peak zoom
pub const ZOOM_DIM_OTHERS: f32 = 0.06; // opacity the unselected pillars fade down to
pub const ZOOM_FADER_START: f32 = 0.82; // eased progress where the black fade ramps in
pub const ZOOM_BLUR_MAX_PX: f32 = 6.0;
pub const ZOOM_MIN_BRIGHTNESS: f32 = 0.65;

/// One selectable carousel item as supplied by the page catalog.
#[derive(Clone, Debug)]
pub struct PillarSpec {
    pub label: &'static str,
    /// Navigation target; a pillar without one can be hovered but not selected.
    pub url: Option<&'static str>,
    pub sprite_url: &'static str,
    /// Tooltip line; falls back to the label when absent.
    pub tip: Option<&'static str>,
}

/// Tuning for one scene instance.
#[derive(Clone, Copy, Debug)]
pub struct SceneConfig {
    /// Compresses true angular spacing into tighter on-screen clustering.
    pub spread: f32,
    /// Idle auto-rotation speed (radians per second).
    pub auto_speed: f32,
    /// Speed of the independent pillar-ring rotation (radians per second).
    pub pillar_speed: f32,
    /// Pillar scale at the centre of the cone.
    pub scale_base: f32,
    /// Extra scale gained toward the rim.
    pub scale_span: f32,
    /// Vertical pitch applied to every pillar in this scene.
    pub pitch: f32,
    /// CSS width the page gives each pillar element.
    pub pillar_width_px: f32,
    /// Freeze the pillar ring (background keeps drifting) while hovered.
    pub hover_freezes_rotation: bool,
    /// Show the HUD tooltip while hovering a pillar.
    pub hover_tooltip: bool,
    /// Bake rounded corners into sprite images once they decode.
    pub rounded_sprites: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            spread: 0.55,
            auto_speed: 0.32,
            pillar_speed: 0.0,
            scale_base: 1.1,
            scale_span: 0.5,
            pitch: -0.05,
            pillar_width_px: 220.0,
            hover_freezes_rotation: true,
            hover_tooltip: true,
            rounded_sprites: false,
        }
    }
}
