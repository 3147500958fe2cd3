//! Page overlays: the full-viewport fade-to-black cover the zoom dive
//! ends on, and the one-shot drag-hint arrows.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{ARROWS_FADE_MS, FADER_TRANSITION_MS};

const FADER_ID: &str = "zoom-fader";
const ARROWS_ID: &str = "drag-arrows";

fn ensure_fader(document: &web::Document) -> Option<web::HtmlElement> {
    if let Some(el) = document.get_element_by_id(FADER_ID) {
        return el.dyn_into().ok();
    }
    let el: web::HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    el.set_id(FADER_ID);
    let style = el.style();
    _ = style.set_property("position", "fixed");
    _ = style.set_property("inset", "0");
    _ = style.set_property("background", "#000");
    _ = style.set_property("opacity", "0");
    _ = style.set_property(
        "transition",
        &format!("opacity {FADER_TRANSITION_MS}ms linear"),
    );
    _ = style.set_property("pointer-events", "none");
    _ = style.set_property("z-index", "9998");
    document.body()?.append_child(&el).ok()?;
    Some(el)
}

/// Drive the cover's opacity. Zero leaves a missing element alone and
/// never creates it.
pub fn set_fader_opacity(document: &web::Document, opacity: f32) {
    if opacity <= 0.0 {
        if let Some(el) = document.get_element_by_id(FADER_ID) {
            if let Ok(el) = el.dyn_into::<web::HtmlElement>() {
                _ = el.style().set_property("opacity", "0");
            }
        }
        return;
    }
    if let Some(el) = ensure_fader(document) {
        _ = el.style().set_property("opacity", &format!("{opacity:.3}"));
    }
}

/// Drag-hint arrows shown until the first real drag.
pub struct DragArrows {
    el: Option<web::HtmlElement>,
}

impl DragArrows {
    pub fn find(document: &web::Document) -> Self {
        let el = document
            .get_element_by_id(ARROWS_ID)
            .and_then(|el| el.dyn_into().ok());
        Self { el }
    }

    /// Start the CSS fade and drop the node once it finished. Later calls
    /// are no-ops.
    pub fn hide_once(&mut self) {
        let Some(el) = self.el.take() else { return };
        _ = el.class_list().add_1("fade-out");
        if let Some(window) = web::window() {
            let remove = Closure::once_into_js(move || el.remove());
            _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                ARROWS_FADE_MS,
            );
        }
    }
}
