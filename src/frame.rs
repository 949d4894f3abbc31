use crate::constants::FPS_LOG_INTERVAL_SECS;
use crate::core::SceneParams;
use crate::{dom, render, SceneHandle};
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Stop,
}

pub struct FrameContext<'a> {
    pub scene: SceneHandle,
    pub gpu: Option<render::GpuState<'a>>,
    pub canvas: web::HtmlCanvasElement,
    pub last_fps: Instant,
    pub frames: u32,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        scene: SceneHandle,
        gpu: Option<render::GpuState<'a>>,
        canvas: web::HtmlCanvasElement,
    ) -> Self {
        Self {
            scene,
            gpu,
            canvas,
            last_fps: Instant::now(),
            frames: 0,
        }
    }

    pub fn frame(&mut self) -> FrameStatus {
        if !self.canvas.is_connected() {
            return FrameStatus::Stop;
        }
        let out = self.scene.borrow_mut().frame(dom::scroll_y());
        self.count_frame();

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            match g.render(&out) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("[frame] surface lost; reconfiguring");
                    g.reconfigure();
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("[frame] out of GPU memory");
                    return FrameStatus::Stop;
                }
                Err(e) => log::warn!("[frame] skipped: {:?}", e),
            }
        }
        FrameStatus::Continue
    }

    fn count_frame(&mut self) {
        self.frames += 1;
        let elapsed = self.last_fps.elapsed().as_secs_f32();
        if elapsed >= FPS_LOG_INTERVAL_SECS {
            log::debug!("[frame] {:.1} fps", self.frames as f32 / elapsed);
            self.frames = 0;
            self.last_fps = Instant::now();
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    params: &SceneParams,
    particles: &[Vec3],
    face_layers: &[render::FacePixels],
) -> Option<render::GpuState<'static>> {
    // The surface borrows the canvas for the rest of the page's life.
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, params, particles, face_layers).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &Tick) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive `frame_ctx` from `requestAnimationFrame` until a frame reports
/// [`FrameStatus::Stop`].
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        match frame_ctx.borrow_mut().frame() {
            FrameStatus::Continue => request_frame(&tick_clone),
            FrameStatus::Stop => log::info!("[frame] render loop stopped"),
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
