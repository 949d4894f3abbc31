use crate::constants::{LIGHT_MODE_CLASS, THEME_ICON_SELECTOR, THEME_TOGGLE_IDS};
use crate::core::theme::{initial_theme, THEME_STORAGE_KEY};
use crate::core::{Theme, ThemeStore};
use crate::{dom, SceneHandle};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Theme preference in `localStorage`. Storage being unavailable (private
/// mode, disabled cookies) degrades to not persisting.
pub struct LocalThemeStore {
    storage: Option<web::Storage>,
}

impl LocalThemeStore {
    pub fn new() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("[theme] localStorage unavailable; preference will not persist");
        }
        Self { storage }
    }
}

impl Default for LocalThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeStore for LocalThemeStore {
    fn load(&self) -> Option<Theme> {
        let s = self.storage.as_ref()?;
        s.get_item(THEME_STORAGE_KEY)
            .ok()
            .flatten()
            .and_then(|v| Theme::parse(&v))
    }

    fn save(&mut self, theme: Theme) {
        if let Some(s) = &self.storage {
            _ = s.set_item(THEME_STORAGE_KEY, theme.as_str());
        }
    }
}

pub fn startup_theme(document: &web::Document, store: &dyn ThemeStore) -> Theme {
    let marked = document
        .body()
        .map(|b| b.class_list().contains(LIGHT_MODE_CLASS))
        .unwrap_or(false);
    initial_theme(marked, store)
}

/// Body class and toggle icons for `theme`. Applied at once; only the
/// canvas blends.
pub fn apply_affordances(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        _ = body
            .class_list()
            .toggle_with_force(LIGHT_MODE_CLASS, theme.is_light());
    }
    for id in THEME_TOGGLE_IDS {
        if let Some(icon) = dom::query(document, &format!("#{} {}", id, THEME_ICON_SELECTOR)) {
            icon.set_text_content(Some(theme.icon()));
            dom::set_style(&icon, "transform", theme.icon_transform());
        }
    }
}

pub fn wire_theme_toggles(
    document: &web::Document,
    scene: SceneHandle,
    store: Rc<RefCell<LocalThemeStore>>,
) {
    for id in THEME_TOGGLE_IDS {
        let scene = scene.clone();
        let store = store.clone();
        dom::add_click_listener(document, id, move || {
            let theme = scene.borrow_mut().toggle_theme(&mut *store.borrow_mut());
            if let Some(d) = dom::window_document() {
                apply_affordances(&d, theme);
            }
            log::info!("[theme] -> {}", theme.as_str());
        });
    }
}
