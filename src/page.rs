use crate::constants::*;
use crate::core::page::{back_to_top_visible, reveal_offset, work_item_delay_ms, NavState};
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire_page(document: &web::Document) {
    wire_smooth_anchors(document);
    wire_section_reveal(document);
    wire_work_items(document);
    wire_scroll_chrome(document);
}

/// In-page links scroll smoothly instead of jumping.
fn wire_smooth_anchors(document: &web::Document) {
    for link in dom::query_all(document, ANCHOR_LINK_SELECTOR) {
        let Some(href) = link.get_attribute("href") else {
            continue;
        };
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            ev.prevent_default();
            // A bare "#" selects nothing; so does a missing target.
            _ = dom::scroll_to_anchor(&href);
        }) as Box<dyn FnMut(_)>);
        _ = link.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

fn observer(
    callback: ObserverCallback,
    threshold: f64,
    root_margin: Option<&str>,
) -> Option<web::IntersectionObserver> {
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(m) = root_margin {
        init.set_root_margin(m);
    }
    let obs =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok();
    callback.forget();
    obs
}

fn intersecting_targets(entries: &js_sys::Array) -> Vec<web::Element> {
    entries
        .iter()
        .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
        .filter(|e| e.is_intersecting())
        .map(|e| e.target())
        .collect()
}

fn wire_section_reveal(document: &web::Document) {
    let sections = dom::query_all(document, REVEAL_SECTION_SELECTOR);
    if sections.is_empty() {
        return;
    }
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
            for el in intersecting_targets(&entries) {
                dom::set_style(&el, "opacity", "1");
                dom::set_style(&el, "transform", "translateY(0)");
            }
        },
    ) as Box<dyn FnMut(_, _)>);
    let Some(obs) = observer(callback, SECTION_REVEAL_THRESHOLD, None) else {
        log::warn!("[page] IntersectionObserver unavailable; sections shown as-is");
        return;
    };
    for section in &sections {
        let offset = reveal_offset(section.class_list().contains(PROJECT_DETAILS_CLASS));
        dom::set_style(section, "opacity", "0");
        dom::set_style(section, "transform", &format!("translateY({})", offset));
        dom::set_style(section, "transition", "opacity 0.8s ease, transform 0.8s ease");
        obs.observe(section);
    }
}

fn wire_work_items(document: &web::Document) {
    let items = Rc::new(dom::query_all(document, WORK_ITEM_SELECTOR));
    if items.is_empty() {
        return;
    }
    let order = items.clone();
    let callback: ObserverCallback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, obs: web::IntersectionObserver| {
            for el in intersecting_targets(&entries) {
                obs.unobserve(&el);
                let index = order.iter().position(|i| *i == el).unwrap_or(0);
                spawn_local(async move {
                    dom::sleep_ms(work_item_delay_ms(index)).await;
                    _ = el.class_list().add_1(VISIBLE_CLASS);
                });
            }
        },
    ) as Box<dyn FnMut(_, _)>);
    let Some(obs) = observer(callback, WORK_ITEM_THRESHOLD, Some(WORK_ITEM_ROOT_MARGIN)) else {
        return;
    };
    for item in items.iter() {
        obs.observe(item);
    }
}

fn set_class(el: &web::Element, class: &str, on: bool) {
    _ = el.class_list().toggle_with_force(class, on);
}

/// Navigation bar auto-hide and the back-to-top button.
fn wire_scroll_chrome(document: &web::Document) {
    let nav_el = dom::query(document, NAV_SELECTOR);
    let back_to_top = document.get_element_by_id(BACK_TO_TOP_ID);
    let nav = Rc::new(RefCell::new(NavState::default()));

    {
        let nav = nav.clone();
        let nav_el = nav_el.clone();
        let back_to_top = back_to_top.clone();
        let closure = Closure::wrap(Box::new(move || {
            let y = dom::scroll_y() as f64;
            let visible = nav.borrow_mut().on_scroll(y);
            if let Some(n) = &nav_el {
                set_class(n, NAV_HIDDEN_CLASS, !visible);
            }
            if let Some(b) = &back_to_top {
                set_class(b, VISIBLE_CLASS, back_to_top_visible(y));
            }
        }) as Box<dyn FnMut()>);
        if let Some(w) = web::window() {
            _ = w.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    if let Some(n) = nav_el {
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let visible = nav.borrow_mut().on_pointer(ev.client_y() as f64);
            set_class(&n, NAV_HIDDEN_CLASS, !visible);
        }) as Box<dyn FnMut(_)>);
        _ = document.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    if back_to_top.is_some() {
        dom::add_click_listener(document, BACK_TO_TOP_ID, dom::scroll_to_top);
    }
}
