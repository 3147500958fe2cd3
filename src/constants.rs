// Presentation-layer tuning. Everything here concerns the DOM shell only;
// carousel behavior tuning lives in `core::config`.

// Panorama backdrop
pub const PANORAMA_SRC: &str = "backpano.png";
pub const PANORAMA_TOP_COLOR: &str = "#0a1220"; // gradient fallback until the image decodes
pub const PANORAMA_BOTTOM_COLOR: &str = "#0b0f18";

// Sprite corner rounding, baked once per image
pub const SPRITE_CORNER_RADIUS_PX: f64 = 32.0;

// Drag-hint arrows: CSS fade length before the node is dropped
pub const ARROWS_FADE_MS: i32 = 500;

// Zoom fader element
pub const FADER_TRANSITION_MS: i32 = 120;

// Tooltip placement
pub const TIP_BOTTOM_SAFETY_PX: f64 = 4.0; // gap kept when clamping to the bottom edge
