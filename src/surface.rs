use crate::core::constants::{DEFAULT_DPR_CAP, OVERLAY_ELEMENT_ID};
use crate::core::surface::{backing_size, overlay_css};
use crate::core::{OverlaySurface, Rgb, RipplePaint, RipplePainter, SurfaceError};
use crate::dom;
use serde::Serialize;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Serialize)]
struct ContextOptions {
    alpha: bool,
    desynchronized: bool,
}

struct Attached {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

/// The overlay `<canvas>` and its 2D context.
pub struct CanvasSurface {
    attached: Option<Attached>,
    dpr_cap: f64,
    viewport: (f64, f64),
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasSurface {
    pub fn new() -> Self {
        Self::with_dpr_cap(DEFAULT_DPR_CAP)
    }

    pub fn with_dpr_cap(dpr_cap: f64) -> Self {
        Self {
            attached: None,
            dpr_cap,
            viewport: (0.0, 0.0),
        }
    }
}

fn js_err(e: JsValue) -> SurfaceError {
    SurfaceError::Dom(format!("{:?}", e))
}

fn attach(opacity: f64) -> Result<Attached, SurfaceError> {
    let window = web::window().ok_or(SurfaceError::NoWindow)?;
    let document = window.document().ok_or(SurfaceError::NoDocument)?;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| SurfaceError::Dom("created element is not a canvas".into()))?;
    canvas.set_id(OVERLAY_ELEMENT_ID);
    canvas.style().set_css_text(&overlay_css(opacity));

    let options = serde_wasm_bindgen::to_value(&ContextOptions {
        alpha: true,
        desynchronized: true,
    })
    .map_err(|e| SurfaceError::Dom(e.to_string()))?;
    let ctx = canvas
        .get_context_with_context_options("2d", &options)
        .map_err(js_err)?
        .ok_or(SurfaceError::ContextUnavailable)?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| SurfaceError::ContextUnavailable)?;

    let parent: web::Node = match document.body() {
        Some(body) => body.into(),
        None => document
            .document_element()
            .ok_or(SurfaceError::NoParent)?
            .into(),
    };
    parent
        .insert_before(&canvas, parent.first_child().as_ref())
        .map_err(js_err)?;

    Ok(Attached { canvas, ctx })
}

impl OverlaySurface for CanvasSurface {
    fn create(&mut self, opacity: f64) -> Result<(), SurfaceError> {
        if self.attached.is_some() {
            return Ok(());
        }
        self.attached = Some(attach(opacity)?);
        self.resize();
        log::info!("[surface] attached #{}", OVERLAY_ELEMENT_ID);
        Ok(())
    }

    fn resize(&mut self) {
        let Some(a) = &self.attached else {
            return;
        };
        let Some(window) = web::window() else {
            return;
        };
        let (vw, vh) = dom::viewport_size(&window);
        let size = backing_size(vw, vh, window.device_pixel_ratio(), self.dpr_cap);

        // resizing the backing store also resets the context transform
        a.canvas.set_width(size.width);
        a.canvas.set_height(size.height);
        let style = a.canvas.style();
        _ = style.set_property_with_priority("width", &format!("{}px", size.css_width), "important");
        _ = style.set_property_with_priority("height", &format!("{}px", size.css_height), "important");
        _ = a.ctx.set_transform(size.scale, 0.0, 0.0, size.scale, 0.0, 0.0);
        self.viewport = (vw, vh);
    }

    fn destroy(&mut self) {
        if let Some(a) = self.attached.take() {
            a.canvas.remove();
            log::info!("[surface] detached");
        }
    }

    fn is_present(&self) -> bool {
        self.attached.is_some()
    }

    fn set_opacity(&mut self, opacity: f64) {
        if let Some(a) = &self.attached {
            _ = a
                .canvas
                .style()
                .set_property_with_priority("opacity", &opacity.to_string(), "important");
        }
    }
}

impl RipplePainter for CanvasSurface {
    fn can_paint(&self) -> bool {
        self.attached.is_some()
    }

    fn clear(&mut self) {
        if let Some(a) = &self.attached {
            a.ctx.clear_rect(0.0, 0.0, self.viewport.0, self.viewport.1);
        }
    }

    fn fill_circle(&mut self, paint: &RipplePaint, color: Rgb) {
        let Some(a) = &self.attached else {
            return;
        };
        a.ctx.begin_path();
        _ = a.ctx.arc(paint.center.x, paint.center.y, paint.radius, 0.0, TAU);
        #[allow(deprecated)]
        a.ctx
            .set_fill_style(&JsValue::from_str(&color.css_rgba(paint.alpha)));
        a.ctx.fill();
    }
}
