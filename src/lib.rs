#![cfg(target_arch = "wasm32")]
use crate::core::trail::CursorTrail;
use crate::core::Scene;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod background;
mod catalog;
mod constants;
mod core;
mod cursor;
mod dom;
mod events;
mod frame;
mod overlay;
mod tooltip;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pillars-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let containers = document
        .query_selector_all(".scene")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if containers.length() == 0 {
        return Err(anyhow::anyhow!("no .scene containers in page"));
    }

    let tooltip = Rc::new(tooltip::Tooltip::mount(&document)?);
    tooltip::wire_action_buttons(&document, tooltip.clone());
    let arrows = Rc::new(RefCell::new(overlay::DragArrows::find(&document)));

    let mut rigs = Vec::new();
    let mut pending_images: Vec<web::HtmlImageElement> = Vec::new();

    for index in 0..containers.length() {
        let Some(node) = containers.item(index) else {
            continue;
        };
        let container: web::HtmlElement = node
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("scene container is not an HtmlElement"))?;
        let rig = build_rig(
            &document,
            &container,
            index as usize,
            &tooltip,
            &arrows,
            &mut pending_images,
        )?;
        rigs.push(rig);
    }

    let cursor = cursor::mount(&document).map(|cursor_dom| {
        let half_w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
            * 0.5;
        let half_h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as f32
            * 0.5;
        let trail = Rc::new(RefCell::new(CursorTrail::new(Vec2::new(half_w, half_h))));
        cursor::wire(trail.clone(), &cursor_dom);
        (trail, cursor_dom)
    });

    // Let the panorama and sprites decode before the first painted frame,
    // then swap in rounded sprite copies where the scene wants them.
    assets::wait_for_images(&pending_images).await;
    bake_rounded_sprites(&document, &rigs);

    let scene_count = rigs.len();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        document,
        rigs,
        cursor,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    log::info!("[init] {} scene(s) running", scene_count);
    Ok(())
}

fn build_rig(
    document: &web::Document,
    container: &web::HtmlElement,
    index: usize,
    tooltip: &Rc<tooltip::Tooltip>,
    arrows: &Rc<RefCell<overlay::DragArrows>>,
    pending_images: &mut Vec<web::HtmlImageElement>,
) -> anyhow::Result<frame::SceneRig> {
    let (config, specs) = catalog::for_container(container.get_attribute("data-catalog"), index);

    let viewer: web::HtmlElement = container
        .query_selector(".viewer")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("scene {index} is missing .viewer"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!(".viewer is not an HtmlElement"))?;
    let canvas: web::HtmlCanvasElement = container
        .query_selector("canvas.bg")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("scene {index} is missing canvas.bg"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("canvas.bg is not a canvas"))?;
    let ctx: web::CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("unexpected 2d context type"))?;

    let panorama = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    panorama.set_cross_origin(Some("anonymous"));
    panorama.set_src(constants::PANORAMA_SRC);
    pending_images.push(panorama.clone());

    let scene = Rc::new(RefCell::new(Scene::new(config, specs)));

    let mut pillars = Vec::new();
    {
        let scene_ref = scene.borrow();
        for (i, pillar) in scene_ref.pillars().iter().enumerate() {
            let pillar_dom =
                dom::create_pillar_element(document, &pillar.spec, i, config.pillar_width_px)?;
            _ = viewer.append_child(&pillar_dom.root);
            events::pointer::wire_pillar_hover(
                scene.clone(),
                tooltip.clone(),
                &pillar_dom.root,
                i,
            );
            events::keyboard::wire_pillar_keys(scene.clone(), &pillar_dom.root, i);
            pending_images.push(pillar_dom.sprite.clone());
            pillars.push(pillar_dom);
        }
    }

    events::pointer::wire_scene_input(events::pointer::SceneWiring {
        scene: scene.clone(),
        viewer: viewer.clone(),
        tooltip: tooltip.clone(),
        arrows: arrows.clone(),
    });

    Ok(frame::SceneRig {
        scene,
        viewer,
        canvas,
        ctx,
        panorama,
        pillars,
    })
}

fn bake_rounded_sprites(document: &web::Document, rigs: &[frame::SceneRig]) {
    let mut cache = assets::RoundedImageCache::new();
    for rig in rigs {
        if !rig.scene.borrow().config.rounded_sprites {
            continue;
        }
        for pillar in &rig.pillars {
            let sprite = &pillar.sprite;
            if sprite.src().starts_with("data:") {
                continue;
            }
            if let Some(url) =
                cache.rounded_data_url(document, sprite, constants::SPRITE_CORNER_RADIUS_PX)
            {
                sprite.set_src(&url);
            }
        }
    }
}
