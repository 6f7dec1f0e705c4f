#![cfg(target_arch = "wasm32")]
use crate::core::{boot, Controller};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod core;
mod dom;
mod events;
mod scheduler;
mod storage;
mod surface;

use events::DomListeners;
use scheduler::RafScheduler;
use storage::ChromeSyncStore;
use surface::CanvasSurface;

type WebController = Controller<CanvasSurface, RafScheduler, DomListeners>;

// Page callbacks hold only a weak reference; the store subscription keeps the
// controller alive for the life of the page.
fn build_controller() -> Rc<RefCell<WebController>> {
    Rc::new_cyclic(|weak: &Weak<RefCell<WebController>>| {
        let frame_ref = weak.clone();
        let on_frame = move |timestamp: f64| {
            if let Some(ctl) = frame_ref.upgrade() {
                if let Ok(mut ctl) = ctl.try_borrow_mut() {
                    ctl.on_frame(timestamp, dom::now_ms());
                }
            }
        };

        let click_ref = weak.clone();
        let on_click = move |ev: web::MouseEvent| {
            if let Some(ctl) = click_ref.upgrade() {
                if let Ok(mut ctl) = ctl.try_borrow_mut() {
                    let point = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
                    ctl.on_click(point, ev.is_trusted(), dom::now_ms());
                }
            }
        };

        let resize_ref = weak.clone();
        let on_resize = move || {
            if let Some(ctl) = resize_ref.upgrade() {
                if let Ok(mut ctl) = ctl.try_borrow_mut() {
                    ctl.on_resize();
                }
            }
        };

        RefCell::new(Controller::new(
            CanvasSurface::new(),
            RafScheduler::new(on_frame),
            DomListeners::new(on_click, on_resize),
        ))
    })
}

fn launch() {
    let controller = build_controller();
    spawn_local(async move {
        boot(&ChromeSyncStore, &controller).await;
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ripple-fx starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if dom::is_loading(&document) {
        dom::on_dom_content_loaded(&document, launch);
    } else {
        launch();
    }
    Ok(())
}
