//! HUD tooltip that follows the pointer across pillars and the top-action
//! buttons. One element serves the whole page.

use std::rc::Rc;

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::TIP_BOTTOM_SAFETY_PX;

const TIP_ID: &str = "pill-tip";

/// Where a tooltip came from; the page styles the two differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TipSource {
    Pillar,
    Action,
}

pub struct Tooltip {
    el: web::HtmlElement,
}

impl Tooltip {
    /// Reuse the page's tooltip element or append a fresh one to the body.
    pub fn mount(document: &web::Document) -> anyhow::Result<Self> {
        if let Some(el) = document.get_element_by_id(TIP_ID) {
            let el = el
                .dyn_into::<web::HtmlElement>()
                .map_err(|_| anyhow!("#{TIP_ID} is not an HtmlElement"))?;
            return Ok(Self { el });
        }
        let el: web::HtmlElement = document
            .create_element("div")
            .map_err(|e| anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|_| anyhow!("tooltip element is not an HtmlElement"))?;
        el.set_id(TIP_ID);
        _ = el.set_attribute("role", "tooltip");
        _ = el.set_attribute("aria-hidden", "true");
        let body = document.body().ok_or_else(|| anyhow!("no body"))?;
        _ = body.append_child(&el);
        Ok(Self { el })
    }

    pub fn show(&self, text: &str, source: TipSource) {
        self.el.set_text_content(Some(text));
        let classes = self.el.class_list();
        _ = classes.remove_2("from-pillar", "from-action");
        _ = classes.add_1(match source {
            TipSource::Pillar => "from-pillar",
            TipSource::Action => "from-action",
        });
        let style = self.el.style();
        _ = style.set_property("opacity", "1");
        _ = style.set_property("visibility", "visible");
        _ = self.el.set_attribute("aria-hidden", "false");
    }

    pub fn hide(&self) {
        let style = self.el.style();
        _ = style.set_property("opacity", "0");
        _ = style.set_property("visibility", "hidden");
        _ = self.el.set_attribute("aria-hidden", "true");
    }

    /// Place the tooltip so the cursor sits on its top-left corner,
    /// flipping to top-right when it would overflow, and clamped to stay
    /// fully visible vertically.
    pub fn follow(&self, client_x: f64, client_y: f64) {
        let Some(window) = web::window() else { return };
        let vw = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let vh = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);

        let style = self.el.style();
        // Park at the origin first so the measurement is unclamped.
        _ = style.set_property("left", "0px");
        _ = style.set_property("top", "0px");
        _ = style.set_property("transform", "none");
        let rect = self.el.get_bounding_client_rect();

        _ = style.set_property("left", &format!("{client_x}px"));
        _ = style.set_property("top", &format!("{client_y}px"));
        if client_x + rect.width() > vw {
            // Anchor the right edge at the cursor instead.
            _ = style.set_property("transform", "translateX(-100%) translateY(0)");
        } else {
            _ = style.set_property("transform", "translate(0,0)");
        }

        let rect = self.el.get_bounding_client_rect();
        if rect.bottom() > vh {
            let dy = rect.bottom() - vh + TIP_BOTTOM_SAFETY_PX;
            _ = style.set_property("top", &format!("{}px", client_y - dy));
        }
    }
}

/// Attach the tooltip to the top-right action buttons: data-tip (or the
/// aria-label/title fallbacks) shown on hover, hidden on leave and click.
pub fn wire_action_buttons(document: &web::Document, tooltip: Rc<Tooltip>) {
    let Some(bar) = document.get_element_by_id("top-actions") else {
        return;
    };
    let Ok(buttons) = bar.query_selector_all(".icon-btn") else {
        return;
    };

    for i in 0..buttons.length() {
        let Some(node) = buttons.item(i) else { continue };
        let Ok(btn) = node.dyn_into::<web::HtmlElement>() else {
            continue;
        };

        let btn_enter = btn.clone();
        let tip_enter = tooltip.clone();
        let enter = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let text = action_tip(&btn_enter);
            if text.is_empty() {
                return;
            }
            tip_enter.show(&text, TipSource::Action);
            tip_enter.follow(ev.client_x() as f64, ev.client_y() as f64);
        }) as Box<dyn FnMut(_)>);
        _ = btn.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let tip_move = tooltip.clone();
        let mv = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            tip_move.follow(ev.client_x() as f64, ev.client_y() as f64);
        }) as Box<dyn FnMut(_)>);
        _ = btn.add_event_listener_with_callback("mousemove", mv.as_ref().unchecked_ref());
        mv.forget();

        let tip_leave = tooltip.clone();
        let leave = Closure::wrap(Box::new(move || tip_leave.hide()) as Box<dyn FnMut()>);
        _ = btn.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();

        let tip_click = tooltip.clone();
        let click = Closure::wrap(Box::new(move || tip_click.hide()) as Box<dyn FnMut()>);
        _ = btn.add_event_listener_with_callback_and_bool(
            "click",
            click.as_ref().unchecked_ref(),
            true,
        );
        click.forget();
    }
}

fn action_tip(btn: &web::HtmlElement) -> String {
    btn.get_attribute("data-tip")
        .or_else(|| btn.get_attribute("aria-label"))
        .or_else(|| btn.get_attribute("title"))
        .unwrap_or_default()
}
