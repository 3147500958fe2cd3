//! Image readiness gate and the rounded-corner sprite bake.

use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Resolve once every image has either decoded or failed. A broken asset
/// must never keep the frame loop from starting.
pub async fn wait_for_images(images: &[web::HtmlImageElement]) {
    for img in images {
        if img.complete() && img.natural_width() > 0 {
            continue;
        }
        if JsFuture::from(img.decode()).await.is_err() {
            log::warn!("[assets] image failed to decode: {}", img.src());
        }
    }
}

/// Bakes rounded corners into sprites through an offscreen canvas, cached
/// per (source, radius) so repeated sprites pay for the bake once.
pub struct RoundedImageCache {
    entries: FnvHashMap<String, String>,
}

impl RoundedImageCache {
    pub fn new() -> Self {
        Self {
            entries: FnvHashMap::default(),
        }
    }

    /// Data URL of the rounded copy, or `None` when the bake fails; the
    /// caller keeps the square original in that case.
    pub fn rounded_data_url(
        &mut self,
        document: &web::Document,
        img: &web::HtmlImageElement,
        radius: f64,
    ) -> Option<String> {
        let key = format!("{}::{}", img.src(), radius);
        if let Some(hit) = self.entries.get(&key) {
            return Some(hit.clone());
        }

        let w = img.natural_width();
        let h = img.natural_height();
        if w == 0 || h == 0 {
            return None;
        }
        let canvas: web::HtmlCanvasElement =
            document.create_element("canvas").ok()?.dyn_into().ok()?;
        canvas.set_width(w);
        canvas.set_height(h);
        let ctx: web::CanvasRenderingContext2d =
            canvas.get_context("2d").ok()??.dyn_into().ok()?;

        round_rect_path(&ctx, 0.0, 0.0, w as f64, h as f64, radius);
        ctx.clip();
        ctx.draw_image_with_html_image_element_and_dw_and_dh(img, 0.0, 0.0, w as f64, h as f64)
            .ok()?;

        let url = canvas.to_data_url().ok()?;
        self.entries.insert(key, url.clone());
        Some(url)
    }
}

/// Rounded-rectangle clip path for the bake.
fn round_rect_path(ctx: &web::CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
    let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
    ctx.begin_path();
    ctx.move_to(x + r, y);
    _ = ctx.arc_to(x + w, y, x + w, y + h, r);
    _ = ctx.arc_to(x + w, y + h, x, y + h, r);
    _ = ctx.arc_to(x, y + h, x, y, r);
    _ = ctx.arc_to(x, y, x + w, y, r);
    ctx.close_path();
}
