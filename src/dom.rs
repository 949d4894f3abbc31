use crate::constants::MAX_DEVICE_PIXEL_RATIO;
use crate::core::viewport::{backing_size, canvas_css_size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Attach a click handler to the element with `element_id`, if present.
#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Same as [`add_click_listener`] for every element matching `selector`.
pub fn add_click_listener_all(
    document: &web::Document,
    selector: &str,
    handler: impl Fn() + 'static,
) {
    let handler = std::rc::Rc::new(handler);
    for el in query_all(document, selector) {
        let h = handler.clone();
        let closure = Closure::wrap(Box::new(move || h()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn html_element(el: &web::Element) -> Option<web::HtmlElement> {
    el.clone().dyn_into::<web::HtmlElement>().ok()
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(h) = html_element(el) {
        _ = h.style().set_property(property, value);
    }
}

/// CSS viewport size of the window.
pub fn viewport_size() -> Option<(f32, f32)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

pub fn scroll_y() -> f32 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0) as f32
}

/// Pin the canvas CSS size to `width` x `height` and size its backing store
/// to match.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: f32, height: f32) {
    let (css_w, css_h) = canvas_css_size(width, height);
    set_style(canvas, "width", &css_w);
    set_style(canvas, "height", &css_h);
    if let Some(w) = web::window() {
        let (w_px, h_px) =
            backing_size(width, height, w.device_pixel_ratio(), MAX_DEVICE_PIXEL_RATIO);
        canvas.set_width(w_px);
        canvas.set_height(h_px);
    }
}

/// Smooth-scroll so that the element matching `anchor` is at the top.
/// Returns `false` if nothing matches.
pub fn scroll_to_anchor(anchor: &str) -> bool {
    let Some(document) = window_document() else {
        return false;
    };
    let Some(target) = query(&document, anchor) else {
        return false;
    };
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    opts.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&opts);
    true
}

pub fn scroll_to_top() {
    if let Some(w) = web::window() {
        let opts = web::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web::ScrollBehavior::Smooth);
        w.scroll_to_with_scroll_to_options(&opts);
    }
}

/// Resolve after `ms` milliseconds on the window timer.
pub async fn sleep_ms(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
