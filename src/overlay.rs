use crate::constants::*;
use crate::core::page::LoadingProgress;
use crate::dom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_SCREEN_ID) {
        _ = el.class_list().add_1("hidden");
    }
}

fn set_progress(document: &web::Document, percent: f32) {
    if let Some(bar) = document.get_element_by_id(LOADING_PROGRESS_ID) {
        dom::set_style(&bar, "width", &format!("{}%", percent));
    }
}

/// Fill the loading bar in random steps, then hide the screen. Resolves
/// once the screen is gone.
pub async fn run_loading(document: &web::Document) {
    let mut rng = StdRng::from_entropy();
    let mut progress = LoadingProgress::default();
    while !progress.is_done() {
        dom::sleep_ms(LOADING_TICK_MS).await;
        set_progress(document, progress.step(&mut rng));
    }
    dom::sleep_ms(LOADING_HIDE_DELAY_MS).await;
    hide(document);
    log::info!("[scene] loading screen hidden");
}

fn set_menu_open(menu: &web::Element, open: bool) {
    _ = menu.class_list().toggle_with_force(ACTIVE_CLASS, open);
    if let Some(body) = dom::window_document().and_then(|d| d.body()) {
        _ = body
            .style()
            .set_property("overflow", if open { "hidden" } else { "" });
    }
}

/// Open/close buttons flip the menu; any menu link closes it.
pub fn wire_mobile_menu(document: &web::Document) {
    let Some(menu) = dom::query(document, MOBILE_MENU_SELECTOR) else {
        return;
    };
    for selector in [MOBILE_MENU_BUTTON_SELECTOR, MOBILE_MENU_CLOSE_SELECTOR] {
        let menu = menu.clone();
        dom::add_click_listener_all(document, selector, move || {
            let open = !menu.class_list().contains(ACTIVE_CLASS);
            set_menu_open(&menu, open);
        });
    }
    dom::add_click_listener_all(document, MOBILE_NAV_LINK_SELECTOR, move || {
        set_menu_open(&menu, false);
    });
}
