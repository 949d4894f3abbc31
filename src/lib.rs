#![cfg(target_arch = "wasm32")]
use crate::core::scene::scatter_particles;
use crate::core::{FaceTable, Scene, SceneParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod page;
mod render;
mod terminal;
mod theme;

/// The one scene of the page, shared by input handlers, the theme toggles
/// and the frame loop.
pub(crate) type SceneHandle = Rc<RefCell<Scene>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-cube starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn wire_terminal(document: &web::Document) {
    match terminal::TerminalView::find(document) {
        Some(view) => {
            terminal::wire_terminal_chrome(document, &view);
            events::wire_terminal_keydown(view);
        }
        None => log::info!("[terminal] not on this page"),
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page glue works without the 3D layer.
    page::wire_page(&document);
    overlay::wire_mobile_menu(&document);
    wire_terminal(&document);

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let (width, height) =
        dom::viewport_size().ok_or_else(|| anyhow::anyhow!("no viewport size"))?;
    let params = SceneParams::for_viewport_width(width);

    let store = Rc::new(RefCell::new(theme::LocalThemeStore::new()));
    let initial = theme::startup_theme(&document, &*store.borrow());
    theme::apply_affordances(&document, initial);

    let scene: SceneHandle = Rc::new(RefCell::new(Scene::new(
        params,
        FaceTable::portfolio(),
        initial,
        width,
        height,
    )));
    let (vw, vh) = scene.borrow().viewport();
    dom::sync_canvas_backing_size(&canvas, vw, vh);
    log::info!(
        "[scene] {}x{} theme={} particles={}",
        vw,
        vh,
        initial.as_str(),
        params.particle_count
    );

    theme::wire_theme_toggles(&document, scene.clone(), store);
    let wiring = events::PointerWiring {
        scene: scene.clone(),
        canvas: canvas.clone(),
    };
    events::wire_resize(&wiring);

    overlay::run_loading(&document).await;
    start_scene(&document, wiring).await
}

/// Paint the faces, bring up WebGPU and hand the scene to the frame loop.
async fn start_scene(
    document: &web::Document,
    wiring: events::PointerWiring,
) -> anyhow::Result<()> {
    let scene = wiring.scene.clone();
    let canvas = wiring.canvas.clone();
    let assets = render::face_assets(&scene.borrow().faces);
    let images = render::load_face_images(assets).await;
    let layers = render::paint_faces(document, &scene.borrow().faces, &images)?;

    let params = scene.borrow().params;
    let mut rng = StdRng::from_entropy();
    let particles = scatter_particles(params.particle_count, params.particle_spread, &mut rng);

    let Some(gpu) = frame::init_gpu(&canvas, &params, &particles, &layers).await else {
        log::warn!("[scene] no WebGPU; cube input stays off");
        return Ok(());
    };
    scene.borrow_mut().go_live();
    events::wire_input_handlers(&wiring);
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        scene,
        Some(gpu),
        canvas,
    )));
    frame::start_loop(frame_ctx);
    log::info!("[scene] render loop started");
    Ok(())
}
