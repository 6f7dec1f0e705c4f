use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// `performance.now()`, or 0 when unavailable.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Viewport in CSS px: the larger of the root element's client box and the
/// window's inner size, so scrollbars and zoom never leave an uncovered strip.
pub fn viewport_size(window: &web::Window) -> (f64, f64) {
    let (client_w, client_h) = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| (el.client_width() as f64, el.client_height() as f64))
        .unwrap_or((0.0, 0.0));
    let inner_w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let inner_h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (client_w.max(inner_w), client_h.max(inner_h))
}

pub fn listener_options(passive: bool, capture: bool, once: bool) -> web::AddEventListenerOptions {
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    options.set_capture(capture);
    options.set_once(once);
    options
}

#[inline]
pub fn is_loading(document: &web::Document) -> bool {
    document.ready_state() == "loading"
}

/// Run `f` once the document has been parsed.
pub fn on_dom_content_loaded(document: &web::Document, f: impl FnOnce() + 'static) {
    let callback = Closure::once_into_js(f);
    _ = document.add_event_listener_with_callback_and_add_event_listener_options(
        "DOMContentLoaded",
        callback.unchecked_ref(),
        &listener_options(true, false, true),
    );
}
