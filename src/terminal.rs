use crate::constants::*;
use crate::core::terminal::{execute, Effect, Output, Reply};
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// The terminal widget's input box and scrollback.
#[derive(Clone)]
pub struct TerminalView {
    document: web::Document,
    input: web::HtmlInputElement,
    output: web::Element,
}

impl TerminalView {
    pub fn find(document: &web::Document) -> Option<Self> {
        let input = document
            .get_element_by_id(TERMINAL_INPUT_ID)?
            .dyn_into::<web::HtmlInputElement>()
            .ok()?;
        let output = document.get_element_by_id(TERMINAL_OUTPUT_ID)?;
        Some(Self {
            document: document.clone(),
            input,
            output,
        })
    }

    pub fn input(&self) -> &web::HtmlInputElement {
        &self.input
    }

    fn scroll_to_end(&self) {
        self.output.set_scroll_top(self.output.scroll_height());
    }

    fn new_line(&self) -> Option<web::Element> {
        let line = self.document.create_element("div").ok()?;
        line.set_class_name("terminal-line");
        _ = self.output.append_child(&line);
        Some(line)
    }

    /// Prompt plus the submitted text, inserted as text rather than markup.
    fn echo(&self, text: &str) {
        let Some(line) = self.new_line() else {
            return;
        };
        if let Ok(prompt) = self.document.create_element("span") {
            prompt.set_class_name("terminal-prompt");
            prompt.set_text_content(Some(TERMINAL_PROMPT));
            _ = line.append_child(&prompt);
        }
        let rest = self.document.create_text_node(&format!(" {}", text));
        _ = line.append_child(&rest);
        self.scroll_to_end();
    }

    fn print(&self, output: Output) {
        let Some(line) = self.new_line() else {
            return;
        };
        match output {
            Output::Markup(html) => {
                line.set_inner_html(&html);
                self.scroll_to_end();
            }
            Output::Typed(text) => {
                let view = self.clone();
                spawn_local(async move {
                    let mut shown = String::with_capacity(text.len());
                    for ch in text.chars() {
                        shown.push(ch);
                        line.set_text_content(Some(&shown));
                        view.scroll_to_end();
                        dom::sleep_ms(TYPE_INTERVAL_MS).await;
                    }
                });
            }
        }
    }

    fn clear(&self) {
        self.output.set_inner_html("");
    }

    fn download(&self, href: &str, filename: &str) {
        let Ok(el) = self.document.create_element("a") else {
            return;
        };
        let Ok(a) = el.dyn_into::<web::HtmlAnchorElement>() else {
            return;
        };
        a.set_href(href);
        a.set_download(filename);
        if let Some(body) = self.document.body() {
            _ = body.append_child(&a);
            a.click();
            _ = body.remove_child(&a);
        }
    }

    pub fn show(&self, reply: Reply) {
        self.echo(&reply.echo);
        match reply.effect {
            Some(Effect::ClearOutput) => self.clear(),
            Some(Effect::Download { href, filename }) => {
                log::info!("[terminal] download {}", href);
                self.download(href, filename);
            }
            Some(Effect::ScrollTo(anchor)) => {
                _ = dom::scroll_to_anchor(anchor);
            }
            None => {}
        }
        if let Some(out) = reply.output {
            self.print(out);
        }
    }

    /// Run the current input line and reset the box.
    pub fn submit(&self) {
        let raw = self.input.value();
        let Some(reply) = execute(&raw) else {
            return;
        };
        self.input.set_value("");
        log::debug!("[terminal] {}", reply.echo.trim());
        self.show(reply);
    }
}

/// Click-to-focus and the minimize toggle.
pub fn wire_terminal_chrome(document: &web::Document, view: &TerminalView) {
    let Some(terminal) = document.get_element_by_id(TERMINAL_ID) else {
        return;
    };
    let input = view.input().clone();
    let focus = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        let on_minimize = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(&format!("#{}", TERMINAL_MINIMIZE_ID)).ok().flatten())
            .is_some();
        if !on_minimize {
            _ = input.focus();
        }
    }) as Box<dyn FnMut(_)>);
    _ = terminal.add_event_listener_with_callback("click", focus.as_ref().unchecked_ref());
    focus.forget();

    let Some(button) = document.get_element_by_id(TERMINAL_MINIMIZE_ID) else {
        return;
    };
    dom::add_click_listener(document, TERMINAL_MINIMIZE_ID, move || {
        let minimized = terminal.class_list().toggle("minimized").unwrap_or(false);
        button.set_text_content(Some(if minimized {
            TERMINAL_GLYPH_MINIMIZED
        } else {
            TERMINAL_GLYPH_OPEN
        }));
    });
}
