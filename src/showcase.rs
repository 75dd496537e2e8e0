use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::config::{ShowcaseConfig, MORPH_SET_ATTRIBUTE, STEP_EVENT_ATTRIBUTE};
use crate::core::{ground_grid, MorphInterpolator, MorphParams, ParticleField, SceneState};
use crate::scroll::ScrollSource;
use crate::{dom, events, frame, panels, render, visibility};

/// Bind one section: panel controller always, renderer unless the preset is
/// desktop-only and the viewport is narrow.
/// A page without the section's root is left alone.
pub fn boot(document: &web::Document, preset: ShowcaseConfig, pointer: &Rc<Cell<Vec2>>) -> anyhow::Result<()> {
    let Some(root) = dom::query_document(document, preset.root) else {
        log::debug!("[showcase] {}: no '{}' on page", preset.name, preset.root);
        return Ok(());
    };
    let config = preset.with_overrides(
        root.get_attribute(STEP_EVENT_ATTRIBUTE).as_deref(),
        root.get_attribute(MORPH_SET_ATTRIBUTE).as_deref(),
    );
    log::info!(
        "[showcase] {}: event '{}', morph set '{}'",
        config.name,
        config.step_event,
        config.catalog.name()
    );

    let controller = panels::boot(&root, &config);
    if let Some(c) = &controller {
        log::debug!("[showcase] {}: starting on step {}", config.name, c.borrow().current());
    }

    let (width, _) = dom::viewport_size();
    if !config.renders_at(width) {
        log::info!("[showcase] {}: viewport {}px, scene skipped", config.name, width);
        return Ok(());
    }
    spawn_scene(document, root, config, pointer.clone())
}

fn canvas_host(document: &web::Document, root: &web::HtmlElement, selector: &str) -> Option<web::HtmlElement> {
    dom::query(root, selector).or_else(|| dom::query_document(document, selector))
}

fn spawn_scene(
    document: &web::Document,
    root: web::HtmlElement,
    config: ShowcaseConfig,
    pointer: Rc<Cell<Vec2>>,
) -> anyhow::Result<()> {
    let host = canvas_host(document, &root, config.canvas_host)
        .ok_or_else(|| anyhow::anyhow!("missing canvas host '{}'", config.canvas_host))?;
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::set_style(&canvas, "width", "100%");
    dom::set_style(&canvas, "height", "100%");
    dom::set_style(&canvas, "display", "block");
    host.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    dom::wire_canvas_resize(&canvas);

    let targets = config.catalog.build()?;
    let morph_floats = targets.buffer_len();
    let morph = MorphInterpolator::new(targets, MorphParams::default())?;
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let particles = ParticleField::new(config.particles, seed);
    let particle_floats = particles.positions().len();
    let scene = SceneState::new(morph, particles, config.orbit, config.gate);

    // late subscriber: pick up whatever step the controller already reached
    let root_el: web::Element = root.clone().into();
    let target_step = Rc::new(Cell::new(events::read_step(&root_el).unwrap_or(0)));
    let step_in = target_step.clone();
    events::subscribe_step(&root_el, &config.step_event, move |step| step_in.set(step));

    let visible = visibility::gate(&root_el);
    let scroll = Rc::new(ScrollSource::new(root.clone(), config.pin_viewports));

    spawn_local(async move {
        let [hx, hz, spacing] = config.grid;
        let grid = ground_grid(hx, hz, spacing);
        let geometry = render::SceneGeometry {
            grid: &grid,
            morph_floats,
            particle_floats,
            palette: config.palette,
        };
        let Some(gpu) = frame::init_gpu(&canvas, &geometry).await else {
            return;
        };
        let ctx = Rc::new(RefCell::new(frame::SceneContext {
            scene,
            gpu,
            canvas,
            camera: config.camera,
            visible,
            target_step,
            pointer,
            scroll,
            started: Instant::now(),
        }));
        frame::start_loop(ctx);
        log::info!("[showcase] {}: scene running", config.name);
        if let Some(ready) = &config.ready_event {
            if let Err(e) = events::dispatch_signal(&root_el, ready) {
                log::error!("[showcase] dispatch {}: {:?}", ready, e);
            }
        }
    });
    Ok(())
}
