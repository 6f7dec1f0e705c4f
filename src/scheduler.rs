use crate::core::FrameScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` behind [`FrameScheduler`]. One closure is built up
/// front and handed to every request.
pub struct RafScheduler {
    callback: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new(on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            callback: Closure::wrap(Box::new(on_frame) as Box<dyn FnMut(f64)>),
        }
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn schedule(&mut self) -> Option<i32> {
        let window = web::window()?;
        match window.request_animation_frame(self.callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::warn!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle);
        }
    }
}
