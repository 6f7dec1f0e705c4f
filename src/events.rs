use crate::core::InputListeners;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Document-level click (capture phase) and window resize listeners.
///
/// Both are passive. The closures are built once and re-used across
/// install/remove cycles so removal always matches what was added.
pub struct DomListeners {
    on_click: Closure<dyn FnMut(web::MouseEvent)>,
    on_resize: Closure<dyn FnMut()>,
    installed: bool,
}

impl DomListeners {
    pub fn new(
        on_click: impl FnMut(web::MouseEvent) + 'static,
        on_resize: impl FnMut() + 'static,
    ) -> Self {
        Self {
            on_click: Closure::wrap(Box::new(on_click) as Box<dyn FnMut(_)>),
            on_resize: Closure::wrap(Box::new(on_resize) as Box<dyn FnMut()>),
            installed: false,
        }
    }
}

impl InputListeners for DomListeners {
    fn install(&mut self) {
        if self.installed {
            return;
        }
        let (Some(window), Some(document)) = (web::window(), dom::window_document()) else {
            log::warn!("[events] no window/document, listeners not installed");
            return;
        };
        _ = document.add_event_listener_with_callback_and_add_event_listener_options(
            "click",
            self.on_click.as_ref().unchecked_ref(),
            &dom::listener_options(true, true, false),
        );
        _ = window.add_event_listener_with_callback_and_add_event_listener_options(
            "resize",
            self.on_resize.as_ref().unchecked_ref(),
            &dom::listener_options(true, false, false),
        );
        self.installed = true;
    }

    fn remove(&mut self) {
        if !self.installed {
            return;
        }
        if let Some(document) = dom::window_document() {
            _ = document.remove_event_listener_with_callback_and_bool(
                "click",
                self.on_click.as_ref().unchecked_ref(),
                true,
            );
        }
        if let Some(window) = web::window() {
            _ = window.remove_event_listener_with_callback(
                "resize",
                self.on_resize.as_ref().unchecked_ref(),
            );
        }
        self.installed = false;
    }

    fn is_installed(&self) -> bool {
        self.installed
    }
}
