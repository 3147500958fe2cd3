//! Panorama painter: pans the backdrop horizontally from the background
//! phase and tiles it across the canvas. Until the image decodes, a flat
//! vertical gradient stands in so the scene never shows a blank frame.

use std::f64::consts::TAU;

use web_sys as web;

use crate::constants::{PANORAMA_BOTTOM_COLOR, PANORAMA_TOP_COLOR};

/// Draw one background frame. Resizing the backing store to the viewer
/// size every frame also clears the canvas.
pub fn draw(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    pano: &web::HtmlImageElement,
    phase: f32,
    w: f64,
    h: f64,
) {
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    if w <= 0.0 || h <= 0.0 {
        return;
    }

    if !pano.complete() || pano.natural_width() == 0 {
        fallback_gradient(ctx, w, h);
        return;
    }

    let natural_w = pano.natural_width() as f64;
    let natural_h = pano.natural_height() as f64;
    let draw_w = (natural_w * (h / natural_h)).ceil();
    if draw_w <= 0.0 {
        return;
    }

    // One full image width spans a full turn of phase.
    let px_per_radian = draw_w / TAU;
    let mut offset = ((-f64::from(phase)) * px_per_radian).round() % draw_w;
    if offset < 0.0 {
        offset += draw_w;
    }

    let mut x = -offset;
    while x < w {
        _ = ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
            pano, 0.0, 0.0, natural_w, natural_h, x, 0.0, draw_w, h,
        );
        x += draw_w;
    }
}

fn fallback_gradient(ctx: &web::CanvasRenderingContext2d, w: f64, h: f64) {
    let grad = ctx.create_linear_gradient(0.0, 0.0, 0.0, h);
    _ = grad.add_color_stop(0.0, PANORAMA_TOP_COLOR);
    _ = grad.add_color_stop(1.0, PANORAMA_BOTTOM_COLOR);
    ctx.set_fill_style_canvas_gradient(&grad);
    ctx.fill_rect(0.0, 0.0, w, h);
}
