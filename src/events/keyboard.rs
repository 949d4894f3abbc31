use crate::terminal::TerminalView;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys the terminal input reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminalKey {
    Submit,
}

#[inline]
pub fn terminal_key(key: &str) -> Option<TerminalKey> {
    match key {
        "Enter" => Some(TerminalKey::Submit),
        _ => None,
    }
}

pub fn handle_terminal_keydown(ev: &web::KeyboardEvent, view: &TerminalView) {
    if ev.repeat() {
        return;
    }
    match terminal_key(&ev.key()) {
        Some(TerminalKey::Submit) => {
            ev.prevent_default();
            view.submit();
        }
        None => {}
    }
}

pub fn wire_terminal_keydown(view: TerminalView) {
    let input = view.input().clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_terminal_keydown(&ev, &view);
    }) as Box<dyn FnMut(_)>);
    _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
