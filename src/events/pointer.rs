use crate::core::config::CLICK_SLOP_PX;
use crate::core::{Mode, PointerKind, Scene};
use crate::dom;
use crate::overlay::DragArrows;
use crate::tooltip::{TipSource, Tooltip};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct SceneWiring {
    pub scene: Rc<RefCell<Scene>>,
    pub viewer: web::HtmlElement,
    pub tooltip: Rc<Tooltip>,
    pub arrows: Rc<RefCell<DragArrows>>,
}

pub fn wire_scene_input(w: SceneWiring) {
    wire_mouse_drag(&w);
    wire_touch_drag(&w);
    wire_click(&w);
}

fn wire_mouse_drag(w: &SceneWiring) {
    let down = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        down.scene
            .borrow_mut()
            .pointer_down(ev.client_x() as f32, ev.client_y() as f32);
        _ = down.viewer.class_list().add_1("dragging");
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .viewer
        .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
    closure.forget();

    let mv = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        mv.scene
            .borrow_mut()
            .pointer_move(ev.client_x() as f32, PointerKind::Mouse);
        hide_arrows_once_dragging(&mv);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    }
    closure.forget();

    let up = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        up.scene.borrow_mut().pointer_up();
        _ = up.viewer.class_list().remove_1("dragging");
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("mouseup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_touch_drag(w: &SceneWiring) {
    let start = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            start
                .scene
                .borrow_mut()
                .pointer_down(touch.client_x() as f32, touch.client_y() as f32);
        }
    }) as Box<dyn FnMut(_)>);
    dom::add_passive_listener(
        w.viewer.as_ref(),
        "touchstart",
        closure.as_ref().unchecked_ref(),
    );
    closure.forget();

    let mv = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            mv.scene
                .borrow_mut()
                .pointer_move(touch.client_x() as f32, PointerKind::Touch);
            hide_arrows_once_dragging(&mv);
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        dom::add_passive_listener(wnd.as_ref(), "touchmove", closure.as_ref().unchecked_ref());
    }
    closure.forget();

    // A short touch doubles as a tap: route it through the same selection
    // path as a click so it zooms instead of navigating outright.
    let end = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        let was_tap = {
            let mut scene = end.scene.borrow_mut();
            let dragging = matches!(scene.mode(), Mode::Dragging(_));
            scene.pointer_up();
            dragging && scene.recent_drag_px() <= CLICK_SLOP_PX
        };
        _ = end.viewer.class_list().remove_1("dragging");
        if !was_tap {
            return;
        }
        let Some(touch) = ev.changed_touches().get(0) else {
            return;
        };
        let Some(document) = dom::window_document() else {
            return;
        };
        let target = document.element_from_point(touch.client_x() as f32, touch.client_y() as f32);
        if let Some(index) = target.and_then(|el| pillar_index(&el)) {
            if end.scene.borrow_mut().select(index, dom::now_ms()) {
                log::info!("[input] tap selected pillar {}", index);
            }
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchend", closure.as_ref().unchecked_ref());
    }
    closure.forget();

    let cancel = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
        cancel.scene.borrow_mut().pointer_cancel();
        _ = cancel.viewer.class_list().remove_1("dragging");
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("touchcancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_click(w: &SceneWiring) {
    // Capture phase, so the tooltip is gone before any navigation starts.
    let tip = w.tooltip.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        tip.hide();
    }) as Box<dyn FnMut(_)>);
    _ = w.viewer.add_event_listener_with_callback_and_bool(
        "click",
        closure.as_ref().unchecked_ref(),
        true,
    );
    closure.forget();

    let click = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<web::Element>().ok());
        if let Some(index) = target.and_then(|el| pillar_index(&el)) {
            if click.scene.borrow_mut().select(index, dom::now_ms()) {
                log::info!("[input] click selected pillar {}", index);
            }
        }
    }) as Box<dyn FnMut(_)>);
    _ = w
        .viewer
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Hover highlights one pillar and, where the scene allows it, freezes
/// the ring and shows the tooltip.
pub fn wire_pillar_hover(
    scene: Rc<RefCell<Scene>>,
    tooltip: Rc<Tooltip>,
    el: &web::HtmlElement,
    index: usize,
) {
    let enter_scene = scene.clone();
    let enter_tip = tooltip.clone();
    let enter_el = el.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        enter_scene.borrow_mut().set_hover(Some(index));
        _ = enter_el.class_list().add_1("hover");
        if let Some(tip) = enter_scene.borrow().hover_tip() {
            enter_tip.show(tip, TipSource::Pillar);
            enter_tip.follow(ev.client_x() as f64, ev.client_y() as f64);
        }
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("mouseenter", closure.as_ref().unchecked_ref());
    closure.forget();

    let move_scene = scene.clone();
    let move_tip = tooltip.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let scene = move_scene.borrow();
        if scene.hovered() == Some(index) && scene.hover_tip().is_some() {
            move_tip.follow(ev.client_x() as f64, ev.client_y() as f64);
        }
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
    closure.forget();

    let leave_el = el.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
        _ = leave_el.class_list().remove_1("hover");
        let shows_tip = scene.borrow().config.hover_tooltip;
        scene.borrow_mut().set_hover(None);
        if shows_tip {
            tooltip.hide();
        }
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("mouseleave", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn hide_arrows_once_dragging(w: &SceneWiring) {
    let travelled = match w.scene.borrow().mode() {
        Mode::Dragging(drag) => drag.travel_px() > CLICK_SLOP_PX,
        _ => false,
    };
    if travelled {
        w.arrows.borrow_mut().hide_once();
    }
}

fn pillar_index(el: &web::Element) -> Option<usize> {
    let pillar = el.closest(".pillar").ok()??;
    pillar.get_attribute("data-index")?.parse().ok()
}
