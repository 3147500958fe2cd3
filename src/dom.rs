//! Small DOM helpers plus the pillar element factory and per-frame writer.

use anyhow::anyhow;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::core::config::PillarSpec;
use crate::core::projector::PillarVisual;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Wall-clock milliseconds from the page's performance clock.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map_or(0.0, |p| p.now())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, prop: &str, value: &str) {
    _ = el.style().set_property(prop, value);
}

/// Attach a passive listener (touch-scroll friendly) to any event target.
pub fn add_passive_listener(target: &web::EventTarget, kind: &str, f: &js_sys::Function) {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(kind, f, &opts);
}

pub fn create_div(document: &web::Document, class_name: &str) -> anyhow::Result<web::HtmlElement> {
    let el: web::HtmlElement = document
        .create_element("div")
        .map_err(|e| anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|_| anyhow!("created element is not an HtmlElement"))?;
    el.set_class_name(class_name);
    Ok(el)
}

/// DOM handles for one pillar element.
pub struct PillarDom {
    pub root: web::HtmlElement,
    pub plinth: web::HtmlElement,
    pub sprite: web::HtmlImageElement,
}

/// Build one pillar element: a rotator holding the sprite box and the
/// plinth, with the label outside the scaler so it never stretches.
pub fn create_pillar_element(
    document: &web::Document,
    spec: &PillarSpec,
    index: usize,
    width_px: f32,
) -> anyhow::Result<PillarDom> {
    let root = create_div(document, "pillar")?;
    _ = root.style().set_property("--w", &format!("{width_px:.0}px"));
    _ = root.set_attribute("role", "button");
    root.set_tab_index(0);
    _ = root.set_attribute("data-index", &index.to_string());
    if let Some(url) = spec.url {
        _ = root.set_attribute("data-url", url);
    }
    _ = root.set_attribute("data-tip", spec.tip.unwrap_or(spec.label));

    let rot = create_div(document, "pillar-rot")?;
    let sprite_wrap = create_div(document, "sprite-wrap")?;
    let sprite_scale = create_div(document, "sprite-scale")?;

    let sprite = web::HtmlImageElement::new().map_err(|e| anyhow!("{:?}", e))?;
    sprite.set_class_name("sprite");
    sprite.set_alt(spec.label);
    sprite.set_cross_origin(Some("anonymous"));
    sprite.set_src(spec.sprite_url);

    let plinth = create_div(document, "plinth")?;

    // Labels may carry markup line breaks.
    let label = create_div(document, "label")?;
    label.set_inner_html(spec.label);

    _ = sprite_scale.append_child(&sprite);
    _ = sprite_wrap.append_child(&sprite_scale);
    _ = rot.append_child(&sprite_wrap);
    _ = rot.append_child(&plinth);
    _ = root.append_child(&rot);
    _ = root.append_child(&label);

    Ok(PillarDom {
        root,
        plinth,
        sprite,
    })
}

/// Write one frame's projection onto the element pair.
pub fn apply_pillar_visual(dom: &PillarDom, v: &PillarVisual) {
    let style = dom.root.style();
    _ = style.set_property("left", &format!("{:.1}px", v.x));
    _ = style.set_property("top", &format!("{:.1}px", v.y));
    _ = style.set_property("opacity", &format!("{:.3}", v.opacity));
    _ = style.set_property("visibility", if v.visible { "visible" } else { "hidden" });
    // Parked pillars also stop taking pointer events.
    _ = style.set_property("pointer-events", if v.visible { "" } else { "none" });
    _ = style.set_property("z-index", &v.stacking.to_string());
    let transform = format!(
        "translate3d(-50%,-100%,0) rotateY({:.2}deg) translateZ({:.1}px) scale({:.3})",
        v.rotation_deg, v.translate_z, v.scale
    );
    _ = style.set_property("transform", &transform);

    let plinth = dom.plinth.style();
    _ = plinth.set_property("width", &format!("{:.1}px", v.plinth_width_px));
    _ = plinth.set_property("opacity", &format!("{:.3}", v.plinth_opacity));
}
