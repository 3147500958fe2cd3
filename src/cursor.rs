//! Custom cursor: ring + dot that chase the pointer, with a short ghost
//! trail behind them. Mounted only for fine-pointer devices; the page CSS
//! hides the native cursor when `#cursor` is present.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::trail::{CursorFrame, CursorTrail, GHOST_COUNT};
use crate::dom;

/// Text-entry targets where the native caret should win.
const NATIVE_CURSOR_SELECTOR: &str = "input, textarea, [contenteditable=\"true\"]";

pub struct CursorDom {
    pub root: web::HtmlElement,
    pub ring: web::HtmlElement,
    pub dot: web::HtmlElement,
    pub ghosts: Vec<web::HtmlElement>,
}

/// Touch-first devices report a coarse pointer; they keep the native cursor.
pub fn has_fine_pointer() -> bool {
    let Some(window) = web::window() else {
        return true;
    };
    match window.match_media("(pointer:fine)") {
        Ok(Some(query)) => query.matches(),
        _ => true,
    }
}

/// Find the page's cursor shell and fill it with ghost elements.
/// Returns None when the markup is absent or the pointer is coarse.
pub fn mount(document: &web::Document) -> Option<CursorDom> {
    if !has_fine_pointer() {
        return None;
    }
    let root: web::HtmlElement = document.get_element_by_id("cursor")?.dyn_into().ok()?;
    let ring: web::HtmlElement = root.query_selector(".cursor-ring").ok()??.dyn_into().ok()?;
    let dot: web::HtmlElement = root.query_selector(".cursor-dot").ok()??.dyn_into().ok()?;

    let mut ghosts = Vec::with_capacity(GHOST_COUNT);
    for _ in 0..GHOST_COUNT {
        let ghost = dom::create_div(document, "cursor-ghost").ok()?;
        dom::set_style(&ghost, "opacity", "0");
        _ = root.append_child(&ghost);
        ghosts.push(ghost);
    }

    Some(CursorDom { root, ring, dot, ghosts })
}

/// Feed pointer events into the trail state. The frame loop reads the
/// smoothed positions back out via [`apply`].
pub fn wire(trail: Rc<RefCell<CursorTrail>>, dom: &CursorDom) {
    let Some(window) = web::window() else { return };
    let window_target: &web::EventTarget = window.as_ref();

    let move_trail = trail.clone();
    let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        move_trail
            .borrow_mut()
            .point_to(ev.client_x() as f32, ev.client_y() as f32);
    }) as Box<dyn FnMut(_)>);
    dom::add_passive_listener(window_target, "mousemove", on_move.as_ref().unchecked_ref());
    on_move.forget();

    for kind in ["touchstart", "touchmove"] {
        let touch_trail = trail.clone();
        let on_touch = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = ev.touches().get(0) {
                touch_trail
                    .borrow_mut()
                    .point_to(touch.client_x() as f32, touch.client_y() as f32);
            }
        }) as Box<dyn FnMut(_)>);
        dom::add_passive_listener(window_target, kind, on_touch.as_ref().unchecked_ref());
        on_touch.forget();
    }

    for kind in ["mousedown", "touchend"] {
        let press_trail = trail.clone();
        let on_press = Closure::wrap(Box::new(move || {
            press_trail.borrow_mut().click(dom::now_ms());
        }) as Box<dyn FnMut()>);
        dom::add_passive_listener(window_target, kind, on_press.as_ref().unchecked_ref());
        on_press.forget();
    }

    // Yield to the native caret over text fields.
    if let Some(document) = window.document() {
        let root = dom.root.clone();
        let on_over = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let over_text = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|el| el.closest(NATIVE_CURSOR_SELECTOR).ok().flatten())
                .is_some();
            dom::set_style(&root, "display", if over_text { "none" } else { "" });
        }) as Box<dyn FnMut(_)>);
        _ = document
            .add_event_listener_with_callback("mouseover", on_over.as_ref().unchecked_ref());
        on_over.forget();
    }
}

/// Push one advanced trail frame into the DOM.
pub fn apply(dom: &CursorDom, frame: &CursorFrame) {
    dom::set_style(&dom.ring, "transform", &center_transform(frame.ring, None));
    dom::set_style(&dom.dot, "transform", &center_transform(frame.dot, None));

    let dot_classes = dom.dot.class_list();
    if frame.pulsing {
        _ = dot_classes.add_1("click");
    } else {
        _ = dot_classes.remove_1("click");
    }

    for (el, ghost) in dom.ghosts.iter().zip(frame.ghosts.iter()) {
        dom::set_style(el, "opacity", &format!("{:.3}", ghost.opacity));
        dom::set_style(
            el,
            "transform",
            &center_transform(ghost.pos, Some(ghost.scale)),
        );
    }
}

fn center_transform(pos: Vec2, scale: Option<f32>) -> String {
    match scale {
        Some(s) => format!(
            "translate({:.1}px, {:.1}px) translate(-50%, -50%) scale({:.3})",
            pos.x, pos.y, s
        ),
        None => format!(
            "translate({:.1}px, {:.1}px) translate(-50%, -50%)",
            pos.x, pos.y
        ),
    }
}
