use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::config::CameraRig;
use crate::core::{FrameInputs, OrbitInputs, SceneState};
use crate::render;
use crate::scroll::ScrollSource;

/// Everything one canvas needs per animation frame.
pub struct SceneContext<'a> {
    pub scene: SceneState,
    pub gpu: render::GpuState<'a>,
    pub canvas: web::HtmlCanvasElement,
    pub camera: CameraRig,
    pub visible: Rc<Cell<bool>>,
    pub target_step: Rc<Cell<usize>>,
    pub pointer: Rc<Cell<Vec2>>,
    pub scroll: Rc<ScrollSource>,
    pub started: Instant,
}

impl<'a> SceneContext<'a> {
    pub fn frame(&mut self) {
        let visible = self.visible.get();
        let inputs = FrameInputs {
            visible,
            target_step: self.target_step.get(),
            orbit: OrbitInputs {
                elapsed_sec: self.started.elapsed().as_secs_f32(),
                // layout is only read for frames that will draw
                scroll_progress: if visible { self.scroll.progress() } else { 0.0 },
                pointer: self.pointer.get(),
            },
        };
        let Some(out) = self.scene.tick(&inputs) else {
            return;
        };

        let g = &mut self.gpu;
        g.resize_if_needed(self.canvas.width(), self.canvas.height());
        if self.scene.morph.take_dirty() {
            g.upload_wireframe(self.scene.morph.build(), self.scene.morph.accent());
        }
        if out.upload_particles {
            g.upload_particles(self.scene.particles.positions());
        }
        g.set_materials(out.materials);
        let o = &self.scene.orientation;
        g.set_camera(&self.camera, o.camera_lift);
        g.set_orientation(o.yaw, o.pitch, o.scale);
        match g.render() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("[gpu] render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    geometry: &render::SceneGeometry<'_>,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, geometry).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::warn!("[gpu] WebGPU unavailable, scene disabled: {:?}", e);
            None
        }
    }
}

/// Call `step` on every animation frame until it returns `false`.
pub fn run_frames(mut step: impl FnMut() -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if step() {
            request_frame(&tick_clone);
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(scene_ctx: Rc<RefCell<SceneContext<'static>>>) {
    run_frames(move || {
        scene_ctx.borrow_mut().frame();
        true
    });
}
