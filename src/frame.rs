use crate::background;
use crate::core::projector::Viewport;
use crate::core::trail::CursorTrail;
use crate::core::{RenderOutput, Scene};
use crate::cursor;
use crate::dom;
use crate::overlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One scene container and the elements the loop paints for it.
pub struct SceneRig {
    pub scene: Rc<RefCell<Scene>>,
    pub viewer: web::HtmlElement,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub panorama: web::HtmlImageElement,
    pub pillars: Vec<dom::PillarDom>,
}

pub struct FrameContext {
    pub document: web::Document,
    pub rigs: Vec<SceneRig>,
    pub cursor: Option<(Rc<RefCell<CursorTrail>>, cursor::CursorDom)>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let now_ms = dom::now_ms();

        let mut fader = 0.0f32;
        let mut any_zooming = false;
        let mut navigate: Option<&'static str> = None;

        for rig in &mut self.rigs {
            let w = (rig.viewer.client_width() as f32).max(1.0);
            let h = (rig.viewer.client_height() as f32).max(1.0);
            let out = rig
                .scene
                .borrow_mut()
                .advance(now_ms, dt, Viewport { w, h });
            paint_rig(rig, &out, w, h);

            fader = fader.max(out.fader_opacity);
            any_zooming = any_zooming || out.zooming;
            if navigate.is_none() {
                navigate = out.navigate;
            }
        }

        overlay::set_fader_opacity(&self.document, fader);
        if let Some(body) = self.document.body() {
            let classes = body.class_list();
            if any_zooming {
                _ = classes.add_1("zooming");
            } else {
                _ = classes.remove_1("zooming");
            }
        }

        if let Some((trail, cursor_dom)) = &self.cursor {
            let cursor_frame = trail.borrow_mut().advance(now_ms);
            cursor::apply(cursor_dom, &cursor_frame);
        }

        // Exactly one navigation per completed zoom; the scene hands the
        // URL out on a single frame.
        if let Some(url) = navigate {
            log::info!("[zoom] navigating to {}", url);
            if let Some(window) = web::window() {
                _ = window.location().set_href(url);
            }
        }
    }
}

fn paint_rig(rig: &SceneRig, out: &RenderOutput, w: f32, h: f32) {
    background::draw(
        &rig.ctx,
        &rig.canvas,
        &rig.panorama,
        out.background.phase,
        f64::from(w),
        f64::from(h),
    );

    let filter = if out.zooming {
        format!(
            "blur({:.2}px) brightness({:.3})",
            out.background.blur_px, out.background.brightness
        )
    } else {
        String::new()
    };
    _ = rig.canvas.style().set_property("filter", &filter);
    dom::set_style(
        &rig.viewer,
        "pointer-events",
        if out.pointer_enabled { "" } else { "none" },
    );

    for (pillar_dom, visual) in rig.pillars.iter().zip(out.pillars.iter()) {
        dom::apply_pillar_visual(pillar_dom, visual);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
