use crate::core::Scene;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys that activate a focused pillar, per the button pattern.
/// Older engines report the space bar as "Spacebar".
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

/// Pillars are tabbable; Enter and Space select them like a click.
pub fn wire_pillar_keys(scene: Rc<RefCell<Scene>>, el: &web::HtmlElement, index: usize) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if !is_activation_key(&ev.key()) {
            return;
        }
        ev.prevent_default();
        if scene.borrow_mut().select(index, dom::now_ms()) {
            log::info!("[input] key selected pillar {}", index);
        }
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
