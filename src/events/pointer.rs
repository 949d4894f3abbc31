use crate::core::router::FaceAction;
use crate::core::{handle_click, ClickOutcome, InputEvent, Navigator, INTERACTIVE_SELECTOR};
use crate::{dom, input, SceneHandle};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub scene: SceneHandle,
    pub canvas: web::HtmlCanvasElement,
}

/// Pointer, wheel and click handlers. Wire these only once the cube is
/// drawn; resize handling is separate and goes live at startup.
pub fn wire_input_handlers(w: &PointerWiring) {
    wire_mousemove(w);
    wire_touchmove(w);
    wire_wheel(w);
    wire_click(w);
}

/// Browser side of face clicks.
struct WebNavigator;

impl Navigator for WebNavigator {
    fn open_url(&mut self, url: &str) {
        if let Some(w) = web::window() {
            _ = w.open_with_url_and_target(url, "_blank");
        }
    }

    fn scroll_to(&mut self, anchor: &str) -> bool {
        dom::scroll_to_anchor(anchor)
    }
}

fn passive_options() -> web::AddEventListenerOptions {
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    opts
}

fn listen_passive<E: FromWasmAbi + 'static>(
    target: &web::EventTarget,
    kind: &str,
    handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &passive_options(),
    );
    closure.forget();
}

fn set_body_cursor(hovering: bool) {
    if let Some(body) = dom::window_document().and_then(|d| d.body()) {
        _ = body
            .style()
            .set_property("cursor", if hovering { "pointer" } else { "default" });
    }
}

/// Feed one event and keep the cursor affordance in sync with the hover.
fn feed(scene: &SceneHandle, ev: InputEvent) {
    let (before, after) = {
        let mut s = scene.borrow_mut();
        let before = s.hover.hovered;
        let after = s.handle_input(ev);
        (before, after)
    };
    if before.is_some() != after.is_some() {
        set_body_cursor(after.is_some());
    }
}

fn wire_mousemove(w: &PointerWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let scene = w.scene.clone();
    let canvas = w.canvas.clone();
    listen_passive(&document, "mousemove", move |ev: web::MouseEvent| {
        if !canvas.is_connected() {
            return;
        }
        feed(&scene, input::from_mouse(&ev));
    });
}

fn wire_touchmove(w: &PointerWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let scene = w.scene.clone();
    listen_passive(&document, "touchmove", move |ev: web::TouchEvent| {
        if let Some(e) = input::from_touch(&ev) {
            feed(&scene, e);
        }
    });
}

fn wire_wheel(w: &PointerWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let scene = w.scene.clone();
    listen_passive(&document, "wheel", move |ev: web::WheelEvent| {
        feed(&scene, input::from_wheel(&ev));
    });
}

fn target_is_interactive(ev: &web::MouseEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
        .is_some()
}

fn wire_click(w: &PointerWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let scene = w.scene.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let interactive = target_is_interactive(&ev);
        let s = scene.borrow();
        let face = if interactive {
            None
        } else {
            s.face_at(ev.client_x() as f32, ev.client_y() as f32)
        };
        match handle_click(&s.faces, interactive, face, &mut WebNavigator) {
            ClickOutcome::Routed(i, Some(FaceAction::OpenUrl(url))) => {
                log::info!("[click] face {} -> {}", i, url);
            }
            ClickOutcome::Routed(i, Some(FaceAction::ScrollTo(anchor))) => {
                log::info!("[click] face {} -> scroll {}", i, anchor);
            }
            ClickOutcome::Routed(i, None) => {
                log::warn!("[click] face {} has no action", i);
            }
            ClickOutcome::PassedThrough | ClickOutcome::Missed => {}
        }
    }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_resize(w: &PointerWiring) {
    let scene = w.scene.clone();
    let canvas = w.canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some((width, height)) = dom::viewport_size() else {
            return;
        };
        if let Some((aw, ah)) = scene.borrow_mut().resize(width, height) {
            dom::sync_canvas_backing_size(&canvas, aw, ah);
        }
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
